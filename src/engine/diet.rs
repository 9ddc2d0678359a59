//! Diet planner - calorie and macronutrient targets plus a templated meal plan
//!
//! Energy needs follow Mifflin-St Jeor scaled by an activity multiplier, then
//! shifted by goal, BMI band and recent weight trend. Macros are split per goal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::features::{FeatureSet, WeightTrend};
use crate::bands::BmiBand;
use crate::records::{ActivityLevel, Gender, Goal};
use crate::templates::diet::{self as text, MealDescriptions, MealOptions};
use crate::templates::join_notes;

const PROTEIN_KCAL_PER_G: f64 = 4.0;
const CARB_KCAL_PER_G: f64 = 4.0;
const FAT_KCAL_PER_G: f64 = 9.0;

/// Per-goal macronutrient split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProfile {
    pub protein_per_kg: f64,
    pub fat_ratio: f64,
    /// Nominal carb share. Carb grams are the residual of the calorie budget,
    /// so this value does not enter the calculation.
    pub carb_ratio: f64,
}

pub fn macro_profile(goal: Goal) -> MacroProfile {
    match goal {
        Goal::Lose => MacroProfile { protein_per_kg: 2.0, fat_ratio: 0.30, carb_ratio: 0.40 },
        Goal::Gain => MacroProfile { protein_per_kg: 2.2, fat_ratio: 0.25, carb_ratio: 0.55 },
        Goal::Maintain => MacroProfile { protein_per_kg: 1.8, fat_ratio: 0.25, carb_ratio: 0.50 },
    }
}

/// Mifflin-St Jeor, kcal/day
pub fn basal_metabolic_rate(gender: Gender, weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Low => 1.2,
        ActivityLevel::Medium => 1.55,
        ActivityLevel::High => 1.9,
    }
}

pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => -500.0,
        Goal::Maintain => 0.0,
        Goal::Gain => 500.0,
    }
}

/// Overweight or obese and cutting: cut a bit deeper. Underweight and gaining: eat a bit more.
pub fn bmi_adjustment(bmi: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Lose if bmi > 25.0 => -100.0,
        Goal::Gain if bmi < 18.5 => 100.0,
        _ => 0.0,
    }
}

/// Already moving towards the goal: ease off slightly
pub fn trend_adjustment(trend: WeightTrend, goal: Goal) -> f64 {
    match (trend, goal) {
        (WeightTrend::Losing, Goal::Lose) => 100.0,
        (WeightTrend::Gaining, Goal::Gain) => -50.0,
        _ => 0.0,
    }
}

/// Unrounded daily targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

pub fn energy_targets(features: &FeatureSet) -> EnergyTargets {
    let bmr = basal_metabolic_rate(features.gender, features.weight, features.height, features.age);
    let tdee = bmr * activity_multiplier(features.activity_level);

    let daily_calories = tdee
        + goal_adjustment(features.goal)
        + bmi_adjustment(features.bmi, features.goal)
        + trend_adjustment(features.weight_trend, features.goal);

    let macros = macro_profile(features.goal);
    let protein_g = features.weight * macros.protein_per_kg;
    let protein_kcal = protein_g * PROTEIN_KCAL_PER_G;
    let fat_kcal = daily_calories * macros.fat_ratio;
    let carb_kcal = daily_calories - protein_kcal - fat_kcal;

    EnergyTargets {
        bmr,
        tdee,
        daily_calories,
        protein_g,
        carbs_g: carb_kcal / CARB_KCAL_PER_G,
        fat_g: fat_kcal / FAT_KCAL_PER_G,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlot {
    pub description: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    pub breakfast: MealSlot,
    pub lunch: MealSlot,
    pub dinner: MealSlot,
    pub snacks: MealSlot,
}

impl MealPlan {
    /// Suggestions come from the goal table, descriptions from the BMI band table
    pub fn from_templates(options: &MealOptions, descriptions: &MealDescriptions) -> Self {
        let slot = |description: &str, suggestions: &[&str]| MealSlot {
            description: description.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            breakfast: slot(descriptions.breakfast, &options.breakfast),
            lunch: slot(descriptions.lunch, &options.lunch),
            dinner: slot(descriptions.dinner, &options.dinner),
            snacks: slot(descriptions.snacks, &options.snacks),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietRecommendation {
    pub daily_calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub meal_plan: MealPlan,
    pub notes: String,
}

/// Whole kcal/grams; negative budgets clamp to zero
fn to_output(value: f64) -> i64 {
    value.max(0.0).round_ties_even() as i64
}

pub fn plan_diet(features: &FeatureSet) -> DietRecommendation {
    let targets = energy_targets(features);

    debug!(
        bmr = targets.bmr,
        tdee = targets.tdee,
        daily_calories = targets.daily_calories,
        "Computed energy targets for goal {}",
        features.goal.name()
    );

    DietRecommendation {
        daily_calories: to_output(targets.daily_calories),
        protein: to_output(targets.protein_g),
        carbs: to_output(targets.carbs_g),
        fat: to_output(targets.fat_g),
        meal_plan: MealPlan::from_templates(
            text::meal_options(features.goal),
            text::meal_descriptions(features.bmi_band),
        ),
        notes: diet_notes(features.goal, features.bmi_band, features.weight_trend),
    }
}

fn diet_notes(goal: Goal, band: BmiBand, trend: WeightTrend) -> String {
    let mut notes = vec![text::goal_note(goal), text::bmi_note(band)];
    notes.extend(text::trend_note(trend, goal));
    notes.push(text::HYDRATION_NOTE);
    join_notes(&notes)
}
