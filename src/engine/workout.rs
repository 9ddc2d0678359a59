//! Workout planner - category ratios, weekly schedule and a templated exercise plan

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::features::FeatureSet;
use super::schedule::{WeeklySchedule, allocate_days};
use crate::bands::{AgeBand, BmiBand};
use crate::exercises::{CategoryRatios, ExerciseCategory};
use crate::records::{ActivityLevel, Goal};
use crate::templates::join_notes;
use crate::templates::workout::{self as text, GoalWorkout};

/// Weight of the goal ratios against the user's own preferences
pub const GOAL_WEIGHT: f64 = 0.7;

pub fn goal_ratios(goal: Goal) -> CategoryRatios {
    match goal {
        Goal::Lose => CategoryRatios::new(0.6, 0.3, 0.1),
        Goal::Gain => CategoryRatios::new(0.2, 0.7, 0.1),
        Goal::Maintain => CategoryRatios::new(0.4, 0.4, 0.2),
    }
}

/// Goal ratios blended with preferences, summing to 1
pub fn final_ratios(goal: Goal, preferences: &CategoryRatios) -> CategoryRatios {
    let goal_ratios = goal_ratios(goal);
    goal_ratios
        .blend(preferences, GOAL_WEIGHT)
        .normalized()
        .unwrap_or(goal_ratios)
}

pub fn days_per_week(level: ActivityLevel) -> u8 {
    match level {
        ActivityLevel::Low => 3,
        ActivityLevel::Medium => 4,
        ActivityLevel::High => 5,
    }
}

/// Intensity label and session length multiplier for an age band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intensity {
    pub label: &'static str,
    pub duration_multiplier: f64,
}

impl Intensity {
    pub fn for_age(band: AgeBand) -> Self {
        let duration_multiplier = match band {
            AgeBand::Senior => 0.8,
            AgeBand::MiddleAged => 1.0,
            AgeBand::Adult => 1.2,
        };
        Self { label: text::intensity_label(band), duration_multiplier }
    }
}

/// Daily exercise calorie burn target
pub fn target_calories(weight: f64, goal: Goal, age_band: AgeBand) -> f64 {
    let per_kg = match goal {
        Goal::Lose => 35.0,
        Goal::Gain => 15.0,
        Goal::Maintain => 25.0,
    };
    let age_factor = match age_band {
        AgeBand::Senior => 0.8,
        AgeBand::MiddleAged => 0.9,
        AgeBand::Adult => 1.0,
    };
    weight * per_kg * age_factor
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseBlock {
    pub name: String,
    pub options: Vec<String>,
    pub duration: String,
    pub frequency: String,
    pub description: String,
}

impl ExerciseBlock {
    fn new(category: ExerciseCategory, options: Vec<&str>, ratio: f64, description: &str) -> Self {
        let (low, high, min_sessions) = match category {
            ExerciseCategory::Cardio | ExerciseCategory::Strength => (30.0, 45.0, 2),
            ExerciseCategory::Flexibility => (15.0, 30.0, 1),
        };
        let extra = 15.0 * ratio;
        let sessions = ((3.0 * ratio).round_ties_even() as i64).max(min_sessions);

        Self {
            name: category.name().to_string(),
            options: options.into_iter().map(String::from).collect(),
            duration: format!(
                "{}-{} minutes",
                (low + extra).round_ties_even(),
                (high + extra).round_ties_even()
            ),
            frequency: match sessions {
                1 => "1 time/week".to_string(),
                n => format!("{} times/week", n),
            },
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub focus: String,
    pub progression: String,
    pub sessions_per_week: String,
    pub exercises: Vec<ExerciseBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecommendation {
    pub workout_plan: WorkoutPlan,
    pub weekly_schedule: WeeklySchedule,
    pub target_calories: i64,
    pub notes: String,
}

pub fn plan_workout(features: &FeatureSet) -> WorkoutRecommendation {
    let ratios = final_ratios(features.goal, &features.exercise_preferences);
    let intensity = Intensity::for_age(features.age_band);

    let allocation = allocate_days(days_per_week(features.activity_level), &ratios);
    let weekly_schedule =
        WeeklySchedule::build(&allocation, intensity.label, intensity.duration_multiplier);

    let target = target_calories(features.weight, features.goal, features.age_band);

    debug!(
        cardio = ratios.cardio,
        strength = ratios.strength,
        flexibility = ratios.flexibility,
        rest_days = weekly_schedule.rest_days(),
        "Computed workout ratios for goal {}",
        features.goal.name()
    );

    WorkoutRecommendation {
        workout_plan: build_plan(features, &ratios),
        weekly_schedule,
        target_calories: target.max(0.0).round_ties_even() as i64,
        notes: workout_notes(features),
    }
}

/// Drop every option matching `remove`; if anything was dropped, append
/// `replacement` unless it is already listed
fn substitute(
    options: &[&'static str],
    remove: impl Fn(&str) -> bool,
    replacement: &'static str,
) -> Vec<&'static str> {
    if !options.iter().any(|o| remove(o)) {
        return options.to_vec();
    }

    let mut adjusted: Vec<&'static str> = options.iter().copied().filter(|o| !remove(o)).collect();
    if !adjusted.contains(&replacement) {
        adjusted.push(replacement);
    }
    adjusted
}

fn cardio_options(
    template: &GoalWorkout,
    bmi_band: BmiBand,
    age_band: AgeBand,
) -> Vec<&'static str> {
    let mut options = template.cardio.to_vec();
    if bmi_band == BmiBand::Obese {
        options = substitute(&options, |o| o == text::RUNNING, text::BRISK_WALKING);
    }
    if age_band == AgeBand::Senior {
        options = substitute(&options, text::is_hiit, text::BRISK_WALKING);
    }
    options
}

fn strength_options(template: &GoalWorkout, age_band: AgeBand) -> Vec<&'static str> {
    if age_band == AgeBand::Senior {
        substitute(
            template.strength,
            |o| o == text::HEAVY_WEIGHT_TRAINING,
            text::LIGHT_HIGH_REP_TRAINING,
        )
    } else {
        template.strength.to_vec()
    }
}

fn build_plan(features: &FeatureSet, ratios: &CategoryRatios) -> WorkoutPlan {
    let template = text::goal_workout(features.goal);
    let descriptions = text::category_descriptions(features.bmi_band);

    let progression = if features.age_band == AgeBand::Senior {
        text::SENIOR_PROGRESSION
    } else {
        template.progression
    };

    let exercises = vec![
        ExerciseBlock::new(
            ExerciseCategory::Cardio,
            cardio_options(template, features.bmi_band, features.age_band),
            ratios.cardio,
            descriptions.cardio,
        ),
        ExerciseBlock::new(
            ExerciseCategory::Strength,
            strength_options(template, features.age_band),
            ratios.strength,
            descriptions.strength,
        ),
        ExerciseBlock::new(
            ExerciseCategory::Flexibility,
            template.flexibility.to_vec(),
            ratios.flexibility,
            descriptions.flexibility,
        ),
    ];

    WorkoutPlan {
        goal: features.goal,
        focus: template.focus.to_string(),
        progression: progression.to_string(),
        sessions_per_week: text::frequency_label(features.activity_level).to_string(),
        exercises,
    }
}

fn workout_notes(features: &FeatureSet) -> String {
    let mut notes = vec![text::goal_note(features.goal)];
    notes.extend(text::bmi_note(features.bmi_band));
    notes.extend(text::age_note(features.age_band));
    notes.extend(text::activity_note(features.activity_level));
    notes.push(text::WARM_UP_NOTE);
    notes.push(text::HYDRATION_NOTE);
    join_notes(&notes)
}
