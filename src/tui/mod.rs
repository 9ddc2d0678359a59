//! TUI module - Terminal dashboard for a computed plan

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use std::io::{stdout, Stdout};

use crate::engine::schedule::weekday_key;
use crate::engine::{DietRecommendation, Recommender, WorkoutRecommendation};
use crate::templates::NOTE_SEPARATOR;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Diet,
    Workout,
}

impl View {
    fn toggle(self) -> Self {
        match self {
            View::Diet => View::Workout,
            View::Workout => View::Diet,
        }
    }

    fn title(self) -> &'static str {
        match self {
            View::Diet => "Diet",
            View::Workout => "Workout",
        }
    }
}

/// App state for TUI
pub struct App {
    diet: DietRecommendation,
    workout: WorkoutRecommendation,
    view: View,
    should_quit: bool,
}

impl App {
    pub fn new(recommender: &Recommender) -> Self {
        Self {
            diet: recommender.diet(),
            workout: recommender.workout(),
            view: View::Diet,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(8),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!("vitaplan - {} plan", self.view.title()))
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let notes = match self.view {
            View::Diet => {
                frame.render_widget(self.diet_table(), chunks[1]);
                &self.diet.notes
            }
            View::Workout => {
                frame.render_widget(self.schedule_table(), chunks[1]);
                &self.workout.notes
            }
        };

        let notes: Vec<Line> = notes
            .split(NOTE_SEPARATOR)
            .map(|n| Line::from(format!("- {}", n)))
            .collect();
        let notes = Paragraph::new(notes)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Notes"));
        frame.render_widget(notes, chunks[2]);

        // Footer
        let footer = Paragraph::new("q: quit | tab: switch diet/workout")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[3]);
    }

    fn diet_table(&self) -> Table<'_> {
        let meal_plan = &self.diet.meal_plan;
        let slots = [
            ("Breakfast", &meal_plan.breakfast),
            ("Lunch", &meal_plan.lunch),
            ("Dinner", &meal_plan.dinner),
            ("Snacks", &meal_plan.snacks),
        ];

        let rows: Vec<Row> = slots.iter().map(|(name, slot)| {
            Row::new(vec![
                Cell::from(*name),
                Cell::from(slot.suggestions.join(" / ")),
                Cell::from(slot.description.clone()),
            ])
        }).collect();

        let title = format!(
            "{} kcal | protein {} g | carbs {} g | fat {} g",
            self.diet.daily_calories, self.diet.protein, self.diet.carbs, self.diet.fat
        );

        Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Percentage(55),
                Constraint::Min(20),
            ],
        )
        .header(Row::new(vec!["Meal", "Suggestions", "Guidance"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title(title))
    }

    fn schedule_table(&self) -> Table<'_> {
        let rows: Vec<Row> = self.workout.weekly_schedule.iter().map(|(weekday, day)| {
            Row::new(vec![
                Cell::from(weekday_key(weekday)),
                Cell::from(day.day_type.name()),
                Cell::from(day.duration.clone()),
                Cell::from(day.description.clone()),
            ])
        }).collect();

        let plan = &self.workout.workout_plan;
        let title = format!(
            "{} | {} | burn {} kcal",
            plan.focus, plan.sessions_per_week, self.workout.target_calories
        );

        Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(22),
                Constraint::Length(15),
                Constraint::Min(20),
            ],
        )
        .header(Row::new(vec!["Day", "Type", "Duration", "Description"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title(title))
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        KeyCode::Tab => self.view = self.view.toggle(),
                        _ => {}
                    }
                }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::UserProfile;
    use chrono::{TimeZone, Utc};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        App::new(&Recommender::new(&UserProfile::default(), &[], &[], now))
    }

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(View::Diet.toggle(), View::Workout);
        assert_eq!(View::Workout.toggle(), View::Diet);
    }

    #[test]
    fn test_render_diet_view() {
        let app = app();
        let screen = rendered(&app);
        assert!(screen.contains("Diet plan"));
        assert!(screen.contains("Breakfast"));
    }

    #[test]
    fn test_render_workout_view() {
        let mut app = app();
        app.view = app.view.toggle();
        let screen = rendered(&app);
        assert!(screen.contains("Workout plan"));
        assert!(screen.contains("monday"));
    }
}
