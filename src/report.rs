//! Plain-text rendering of features and plans for the terminal

use crate::engine::schedule::weekday_key;
use crate::engine::{DietRecommendation, FeatureSet, WorkoutRecommendation};
use crate::templates::NOTE_SEPARATOR;

fn notes_block(notes: &str) -> String {
    notes
        .split(NOTE_SEPARATOR)
        .map(|n| format!("  - {}", n))
        .collect::<Vec<_>>()
        .join("\n")
}

impl FeatureSet {
    pub fn format(&self) -> String {
        let prefs = &self.exercise_preferences;
        format!(
            "Age: {} | Height: {} cm | Weight: {} kg\n\
             BMI: {:.1} ({:?}) | Trend: {:?}\n\
             Goal: {} | Activity: {:?}\n\
             Preferences: cardio {:.0}%, strength {:.0}%, flexibility {:.0}%",
            self.age,
            self.height,
            self.weight,
            self.bmi,
            self.bmi_band,
            self.weight_trend,
            self.goal.name(),
            self.activity_level,
            prefs.cardio * 100.0,
            prefs.strength * 100.0,
            prefs.flexibility * 100.0,
        )
    }
}

impl DietRecommendation {
    pub fn format(&self) -> String {
        let mut lines = vec![
            format!("Daily calories: {} kcal", self.daily_calories),
            format!(
                "Protein: {} g | Carbs: {} g | Fat: {} g",
                self.protein, self.carbs, self.fat
            ),
        ];

        let slots = [
            ("Breakfast", &self.meal_plan.breakfast),
            ("Lunch", &self.meal_plan.lunch),
            ("Dinner", &self.meal_plan.dinner),
            ("Snacks", &self.meal_plan.snacks),
        ];
        for (name, slot) in slots {
            lines.push(format!("\n{}: {}", name, slot.description));
            for suggestion in &slot.suggestions {
                lines.push(format!("  * {}", suggestion));
            }
        }

        lines.push(format!("\nNotes:\n{}", notes_block(&self.notes)));
        lines.join("\n")
    }
}

impl WorkoutRecommendation {
    pub fn format(&self) -> String {
        let plan = &self.workout_plan;
        let mut lines = vec![
            format!("Focus: {}", plan.focus),
            format!("Progression: {}", plan.progression),
            format!(
                "Sessions: {} | Target burn: {} kcal",
                plan.sessions_per_week, self.target_calories
            ),
        ];

        for block in &plan.exercises {
            lines.push(format!(
                "\n{} ({}, {}): {}",
                block.name, block.duration, block.frequency, block.description
            ));
            lines.push(format!("  {}", block.options.join(", ")));
        }

        lines.push("\nWeekly schedule:".to_string());
        for (weekday, day) in self.weekly_schedule.iter() {
            lines.push(format!(
                "  {:10} {:22} {:15} {}",
                weekday_key(weekday),
                day.day_type.name(),
                day.duration,
                day.description
            ));
        }

        lines.push(format!("\nNotes:\n{}", notes_block(&self.notes)));
        lines.join("\n")
    }
}
