//! Diet text: meal suggestions by goal, meal descriptions by BMI band, notes

use crate::bands::BmiBand;
use crate::engine::WeightTrend;
use crate::records::Goal;

/// Three suggestions per meal slot
pub struct MealOptions {
    pub breakfast: [&'static str; 3],
    pub lunch: [&'static str; 3],
    pub dinner: [&'static str; 3],
    pub snacks: [&'static str; 3],
}

pub struct MealDescriptions {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
    pub snacks: &'static str,
}

pub const LOSE_MEALS: MealOptions = MealOptions {
    breakfast: [
        "Low-fat Greek yogurt with blueberries and nuts",
        "Egg-white omelette with whole-wheat toast",
        "Oatmeal with banana and a little honey",
    ],
    lunch: [
        "Grilled chicken breast salad with low-fat dressing",
        "Tuna and vegetable salad with olive oil",
        "Stir-fried tofu and vegetables with a little brown rice",
    ],
    dinner: [
        "Baked salmon with steamed vegetables",
        "Lean beef stew with a little sweet potato",
        "Grilled chicken breast with leafy greens",
    ],
    snacks: [
        "Apple slices with a few almonds",
        "Low-fat Greek yogurt",
        "Carrot sticks with hummus",
    ],
};

pub const GAIN_MEALS: MealOptions = MealOptions {
    breakfast: [
        "Whole-grain bread with eggs, avocado and cheese",
        "High-protein oatmeal with banana, protein powder and nut butter",
        "Whole-wheat waffles with Greek yogurt and berries",
    ],
    lunch: [
        "Chicken breast sandwich on whole-grain bread with avocado",
        "Salmon with brown rice and vegetables",
        "Beef fried rice with vegetables and extra protein",
    ],
    dinner: [
        "Steak with roasted sweet potato and vegetables",
        "Whole-wheat pasta with meat sauce and cheese",
        "Roast chicken with quinoa and vegetables",
    ],
    snacks: [
        "Protein shake with banana and peanut butter",
        "Greek yogurt with nuts and honey",
        "Whole-wheat toast with eggs and avocado",
    ],
};

pub const MAINTAIN_MEALS: MealOptions = MealOptions {
    breakfast: [
        "Whole-grain bread with eggs and avocado",
        "Oatmeal with fruit and nuts",
        "Greek yogurt with berries and granola",
    ],
    lunch: [
        "Chicken salad with quinoa and vegetables",
        "Salmon with brown rice and vegetables",
        "Tofu and vegetable fried rice",
    ],
    dinner: [
        "Baked fish with vegetables and a few potatoes",
        "Lean meat stew with brown rice",
        "Chicken with vegetables and quinoa",
    ],
    snacks: [
        "Fruit and a handful of nuts",
        "Greek yogurt with a little honey",
        "Carrots with hummus",
    ],
};

pub const OBESE_DESCRIPTIONS: MealDescriptions = MealDescriptions {
    breakfast: "Breakfast should be rich in protein and fiber, with limited carbohydrates",
    lunch: "Lunch should center on protein and vegetables, limiting starchy foods",
    dinner: "Dinner should be light, avoiding high-carb foods and adding more vegetables",
    snacks: "Choose low-calorie, high-protein snacks and keep portions small",
};

pub const UNDERWEIGHT_DESCRIPTIONS: MealDescriptions = MealDescriptions {
    breakfast: "Breakfast should be nutrient-dense, with quality protein, healthy fats and complex carbohydrates",
    lunch: "Lunch should be calorie-sufficient, balancing protein, carbohydrates and healthy fats",
    dinner: "Dinner should include enough protein and carbohydrates to support recovery and growth",
    snacks: "Choose high-calorie, high-protein snacks to raise total intake",
};

pub const NORMAL_DESCRIPTIONS: MealDescriptions = MealDescriptions {
    breakfast: "Breakfast should include quality protein and complex carbohydrates",
    lunch: "Lunch should balance protein, carbohydrates and vegetables",
    dinner: "Dinner should be moderate, with protein and vegetables",
    snacks: "Healthy snack choices",
};

pub fn meal_options(goal: Goal) -> &'static MealOptions {
    match goal {
        Goal::Lose => &LOSE_MEALS,
        Goal::Gain => &GAIN_MEALS,
        Goal::Maintain => &MAINTAIN_MEALS,
    }
}

/// Meal descriptions only distinguish three bands; overweight reads as normal
pub fn meal_descriptions(band: BmiBand) -> &'static MealDescriptions {
    match band {
        BmiBand::Obese => &OBESE_DESCRIPTIONS,
        BmiBand::Underweight => &UNDERWEIGHT_DESCRIPTIONS,
        BmiBand::Overweight | BmiBand::Normal => &NORMAL_DESCRIPTIONS,
    }
}

pub fn goal_note(goal: Goal) -> &'static str {
    match goal {
        Goal::Lose => "Your goal is weight loss: keep calorie intake in check and raise the protein share to preserve muscle.",
        Goal::Gain => "Your goal is muscle gain: increase calorie intake and make sure you get enough protein and carbohydrates.",
        Goal::Maintain => "Your goal is staying healthy: eat a balanced diet and keep calorie intake moderate.",
    }
}

pub fn bmi_note(band: BmiBand) -> &'static str {
    match band {
        BmiBand::Obese => "Your BMI is high: control total calories, raise the protein share and cut refined carbohydrates and added sugar.",
        BmiBand::Overweight => "Your BMI is slightly high: moderate calorie intake and choose whole grains and lean meats.",
        BmiBand::Underweight => "Your BMI is low: increase total calorie intake with enough protein and healthy fats.",
        BmiBand::Normal => "Your BMI is in the normal range: keep up balanced eating habits.",
    }
}

/// Only when the recent trend runs against the goal
pub fn trend_note(trend: WeightTrend, goal: Goal) -> Option<&'static str> {
    match trend {
        WeightTrend::Losing if goal != Goal::Lose => Some(
            "You have been losing weight recently; if that is not your goal, consider eating a bit more.",
        ),
        WeightTrend::Gaining if goal != Goal::Gain => Some(
            "You have been gaining weight recently; if that is not your goal, consider eating a bit less.",
        ),
        _ => None,
    }
}

pub const HYDRATION_NOTE: &str =
    "Drink enough water every day, at least 2 liters (about 8 glasses).";
