//! Exercise categories - keyword tables for classifying logged sessions

use serde::{Deserialize, Serialize};

/// The three training categories plans are built from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
}

impl ExerciseCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseCategory::Cardio => "Cardio training",
            ExerciseCategory::Strength => "Strength training",
            ExerciseCategory::Flexibility => "Flexibility training",
        }
    }

    /// All categories in plan order
    pub fn all() -> &'static [ExerciseCategory] {
        &[
            ExerciseCategory::Cardio,
            ExerciseCategory::Strength,
            ExerciseCategory::Flexibility,
        ]
    }
}

pub struct CategoryKeywords {
    pub category: ExerciseCategory,
    /// Lowercase labels; the Chinese ones are what the mobile form submits
    pub labels: &'static [&'static str],
}

pub const CATEGORY_KEYWORDS: &[CategoryKeywords] = &[
    CategoryKeywords {
        category: ExerciseCategory::Cardio,
        labels: &[
            "running", "walking", "cycling", "swimming", "aerobic", "aerobics",
            "跑步", "步行", "骑行", "游泳", "有氧",
        ],
    },
    CategoryKeywords {
        category: ExerciseCategory::Strength,
        labels: &[
            "strength training", "weightlifting", "gym",
            "力量训练", "举重", "健身",
        ],
    },
    CategoryKeywords {
        category: ExerciseCategory::Flexibility,
        labels: &[
            "yoga", "pilates", "stretching",
            "瑜伽", "普拉提", "伸展",
        ],
    },
];

/// Match a free-text exercise label against the keyword tables.
/// Labels outside every table (basketball, "other", ...) return `None`.
pub fn classify_label(label: &str) -> Option<ExerciseCategory> {
    let label = label.trim().to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|k| k.labels.contains(&label.as_str()))
        .map(|k| k.category)
}

/// Per-category shares; used both for preferences and for plan ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryRatios {
    pub cardio: f64,
    pub strength: f64,
    pub flexibility: f64,
}

impl CategoryRatios {
    pub const fn new(cardio: f64, strength: f64, flexibility: f64) -> Self {
        Self { cardio, strength, flexibility }
    }

    pub fn get(&self, category: ExerciseCategory) -> f64 {
        match category {
            ExerciseCategory::Cardio => self.cardio,
            ExerciseCategory::Strength => self.strength,
            ExerciseCategory::Flexibility => self.flexibility,
        }
    }

    pub fn total(&self) -> f64 {
        self.cardio + self.strength + self.flexibility
    }

    /// Scale so the three shares sum to 1. `None` when there is nothing to scale.
    pub fn normalized(&self) -> Option<Self> {
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        Some(Self::new(
            self.cardio / total,
            self.strength / total,
            self.flexibility / total,
        ))
    }

    /// `self * own_weight + other * (1 - own_weight)`, not renormalized
    pub fn blend(&self, other: &Self, own_weight: f64) -> Self {
        let other_weight = 1.0 - own_weight;
        Self::new(
            own_weight * self.cardio + other_weight * other.cardio,
            own_weight * self.strength + other_weight * other.strength,
            own_weight * self.flexibility + other_weight * other.flexibility,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_english_labels() {
        assert_eq!(classify_label("running"), Some(ExerciseCategory::Cardio));
        assert_eq!(classify_label("Swimming"), Some(ExerciseCategory::Cardio));
        assert_eq!(classify_label("  gym "), Some(ExerciseCategory::Strength));
        assert_eq!(classify_label("Strength Training"), Some(ExerciseCategory::Strength));
        assert_eq!(classify_label("pilates"), Some(ExerciseCategory::Flexibility));
    }

    #[test]
    fn test_classify_form_labels() {
        assert_eq!(classify_label("跑步"), Some(ExerciseCategory::Cardio));
        assert_eq!(classify_label("举重"), Some(ExerciseCategory::Strength));
        assert_eq!(classify_label("瑜伽"), Some(ExerciseCategory::Flexibility));
    }

    #[test]
    fn test_classify_unmatched() {
        assert_eq!(classify_label("basketball"), None);
        assert_eq!(classify_label("篮球"), None);
        assert_eq!(classify_label(""), None);
        // Exact match only, no substring search
        assert_eq!(classify_label("trail running"), None);
    }

    #[test]
    fn test_keyword_tables_disjoint() {
        for (i, a) in CATEGORY_KEYWORDS.iter().enumerate() {
            for b in CATEGORY_KEYWORDS.iter().skip(i + 1) {
                for label in a.labels {
                    assert!(!b.labels.contains(label), "{} listed twice", label);
                }
            }
        }
    }

    #[test]
    fn test_normalized() {
        let ratios = CategoryRatios::new(2.0, 1.0, 1.0).normalized().unwrap();
        assert_eq!(ratios, CategoryRatios::new(0.5, 0.25, 0.25));
        assert!(CategoryRatios::new(0.0, 0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn test_blend() {
        let goal = CategoryRatios::new(0.6, 0.3, 0.1);
        let pref = CategoryRatios::new(0.0, 0.0, 1.0);
        let blended = goal.blend(&pref, 0.7);
        assert!((blended.cardio - 0.42).abs() < 1e-9);
        assert!((blended.strength - 0.21).abs() < 1e-9);
        assert!((blended.flexibility - 0.37).abs() < 1e-9);
    }
}
