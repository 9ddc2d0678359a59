//! Workout text: exercise options and focus by goal, descriptions by BMI band, notes

use crate::bands::{AgeBand, BmiBand};
use crate::records::{ActivityLevel, Goal};

pub struct GoalWorkout {
    pub cardio: &'static [&'static str],
    pub strength: &'static [&'static str],
    pub flexibility: &'static [&'static str],
    pub focus: &'static str,
    pub progression: &'static str,
}

pub const RUNNING: &str = "running";
pub const BRISK_WALKING: &str = "brisk walking";
pub const HEAVY_WEIGHT_TRAINING: &str = "heavy weight training";
pub const LIGHT_HIGH_REP_TRAINING: &str = "light high-repetition training";

/// Replaces the goal progression for the senior age band
pub const SENIOR_PROGRESSION: &str =
    "Increase training volume slowly every 4 weeks and pay attention to recovery";

pub const LOSE_WORKOUT: GoalWorkout = GoalWorkout {
    cardio: &[RUNNING, "HIIT", "cycling", "swimming", "elliptical trainer"],
    strength: &[
        "full-body strength training",
        "high-repetition strength training",
        "circuit training",
    ],
    flexibility: &["yoga", "pilates", "stretching"],
    focus: "Fat loss, better cardiovascular fitness, keeping muscle mass",
    progression: "Increase cardio duration or intensity every 2 weeks",
};

pub const GAIN_WORKOUT: GoalWorkout = GoalWorkout {
    cardio: &["short HIIT sessions", "stair climbing", "rowing machine"],
    strength: &[
        HEAVY_WEIGHT_TRAINING,
        "low-repetition high-intensity training",
        "compound lift training",
    ],
    flexibility: &["dynamic stretching", "yoga", "foam rolling"],
    focus: "Muscle gain and strength, with moderate cardio for heart health",
    progression: "Increase training weight or sets every 2-3 weeks",
};

pub const MAINTAIN_WORKOUT: GoalWorkout = GoalWorkout {
    cardio: &[RUNNING, "cycling", "swimming", BRISK_WALKING, "jump rope"],
    strength: &[
        "moderate-intensity strength training",
        "bodyweight training",
        "functional training",
    ],
    flexibility: &["yoga", "pilates", "tai chi", "stretching"],
    focus: "Overall health, balancing cardiovascular fitness and muscle strength",
    progression: "Change the training style every 3-4 weeks to keep variety",
};

pub fn goal_workout(goal: Goal) -> &'static GoalWorkout {
    match goal {
        Goal::Lose => &LOSE_WORKOUT,
        Goal::Gain => &GAIN_WORKOUT,
        Goal::Maintain => &MAINTAIN_WORKOUT,
    }
}

/// Any high-intensity interval variant
pub fn is_hiit(option: &str) -> bool {
    option.contains("HIIT")
}

pub struct CategoryDescriptions {
    pub cardio: &'static str,
    pub strength: &'static str,
    pub flexibility: &'static str,
}

pub const OBESE_DESCRIPTIONS: CategoryDescriptions = CategoryDescriptions {
    cardio: "Low-impact cardio to reduce joint stress",
    strength: "Full-body strength training to raise basal metabolic rate",
    flexibility: "Improve range of motion and reduce injury risk",
};

pub const UNDERWEIGHT_DESCRIPTIONS: CategoryDescriptions = CategoryDescriptions {
    cardio: "Moderate cardio without burning too much energy",
    strength: "Focus on strength training to promote muscle growth",
    flexibility: "Keep joints healthy and maintain range of motion",
};

pub const NORMAL_DESCRIPTIONS: CategoryDescriptions = CategoryDescriptions {
    cardio: "Varied cardio to improve cardiovascular fitness",
    strength: "Balanced strength training for overall strength",
    flexibility: "Improve flexibility and balance",
};

pub fn category_descriptions(band: BmiBand) -> &'static CategoryDescriptions {
    match band {
        BmiBand::Obese => &OBESE_DESCRIPTIONS,
        BmiBand::Underweight => &UNDERWEIGHT_DESCRIPTIONS,
        BmiBand::Overweight | BmiBand::Normal => &NORMAL_DESCRIPTIONS,
    }
}

/// Weekly frequency label shown next to the plan
pub fn frequency_label(level: ActivityLevel) -> &'static str {
    match level {
        ActivityLevel::Low => "3-4 times/week",
        ActivityLevel::Medium => "4-5 times/week",
        ActivityLevel::High => "5-6 times/week",
    }
}

pub fn intensity_label(band: AgeBand) -> &'static str {
    match band {
        AgeBand::Senior => "Low-to-medium intensity",
        AgeBand::MiddleAged => "Medium intensity",
        AgeBand::Adult => "Medium-to-high intensity",
    }
}

pub const FLEXIBILITY_DAY: &str = "Yoga or stretching to improve flexibility and balance";
pub const REST_DAY: &str = "Full rest or light stretching";

pub fn strength_day(intensity: &str) -> String {
    format!("{} strength training, focusing on major muscle groups", intensity)
}

pub fn cardio_day(intensity: &str) -> String {
    format!("{} cardio such as running, cycling or swimming", intensity)
}

pub fn goal_note(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => "Your goal is weight loss: combine cardio and strength training to create a calorie deficit while keeping muscle.",
        Goal::Gain => "Your goal is muscle gain: focus on strength training with some cardio, and make sure you eat enough.",
        Goal::Maintain => "Your goal is staying healthy: balance cardio and strength training to keep every part of your body fit.",
    }
}

/// No sentence for the normal band
pub fn bmi_note(band: BmiBand) -> Option<&'static str> {
    match band {
        BmiBand::Obese => Some("Your BMI is high: start with low-impact exercise such as brisk walking, swimming or the elliptical trainer to protect your joints."),
        BmiBand::Overweight => Some("Your BMI is slightly high: combine cardio and strength training to bring body fat down."),
        BmiBand::Underweight => Some("Your BMI is low: focus on strength training, keep cardio moderate and eat enough."),
        BmiBand::Normal => None,
    }
}

pub fn age_note(band: AgeBand) -> Option<&'static str> {
    match band {
        AgeBand::Senior => Some("Given your age, start with low-intensity exercise and build up gradually, protecting your joints and allowing full recovery."),
        AgeBand::MiddleAged => Some("As you get older, add more flexibility and core training to prevent injury and stay functional."),
        AgeBand::Adult => None,
    }
}

pub fn activity_note(level: ActivityLevel) -> Option<&'static str> {
    match level {
        ActivityLevel::Low => Some("Your current activity level is low: start with short, low-intensity sessions and build up time and intensity."),
        ActivityLevel::High => Some("Your current activity level is high: prioritize recovery and vary your training to avoid overtraining."),
        ActivityLevel::Medium => None,
    }
}

pub const WARM_UP_NOTE: &str =
    "Warm up for 5-10 minutes before every session and stretch afterwards.";
pub const HYDRATION_NOTE: &str =
    "Stay well hydrated, especially before, during and after exercise.";
