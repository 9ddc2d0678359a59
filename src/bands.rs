//! Threshold bands - BMI and age buckets evaluated once per request

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub enum Bound {
    /// value > threshold
    Above(f64),
    /// value < threshold
    Below(f64),
}

impl Bound {
    pub fn contains(self, value: f64) -> bool {
        match self {
            Bound::Above(threshold) => value > threshold,
            Bound::Below(threshold) => value < threshold,
        }
    }
}

pub struct BandRule<T> {
    pub bound: Bound,
    pub band: T,
}

/// First matching rule wins, otherwise `fallback`
pub fn classify<T: Copy>(rules: &[BandRule<T>], value: f64, fallback: T) -> T {
    rules
        .iter()
        .find(|rule| rule.bound.contains(value))
        .map(|rule| rule.band)
        .unwrap_or(fallback)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BmiBand {
    Obese,
    Overweight,
    Normal,
    Underweight,
}

pub const BMI_RULES: &[BandRule<BmiBand>] = &[
    BandRule { bound: Bound::Above(30.0), band: BmiBand::Obese },
    BandRule { bound: Bound::Above(25.0), band: BmiBand::Overweight },
    BandRule { bound: Bound::Below(18.5), band: BmiBand::Underweight },
];

impl BmiBand {
    pub fn from_bmi(bmi: f64) -> Self {
        classify(BMI_RULES, bmi, BmiBand::Normal)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Over 60
    Senior,
    /// Over 40
    MiddleAged,
    Adult,
}

pub const AGE_RULES: &[BandRule<AgeBand>] = &[
    BandRule { bound: Bound::Above(60.0), band: AgeBand::Senior },
    BandRule { bound: Bound::Above(40.0), band: AgeBand::MiddleAged },
];

impl AgeBand {
    pub fn from_age(age: i32) -> Self {
        classify(AGE_RULES, f64::from(age), AgeBand::Adult)
    }
}
