//! Input records - profile and history as handed over by the calling service

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    /// Anything else; uses the non-male BMR constant
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    High,
    #[default]
    #[serde(other)]
    Medium,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    #[default]
    #[serde(other)]
    Maintain,
}

impl Goal {
    pub fn name(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

/// User profile record. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// `YYYY-MM-DD`, or a full date-time string
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goal: Option<Goal>,
}

/// One body measurement entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementRecord {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub body_fat: Option<f64>,     // Percent
    #[serde(default)]
    pub muscle_mass: Option<f64>,  // Kilograms
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,        // Centimeters
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// One logged exercise session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseRecord {
    #[serde(default)]
    pub exercise_type: String,
    #[serde(default)]
    pub duration: Option<f64>,        // Minutes
    #[serde(default)]
    pub calories_burned: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,        // Meters
    #[serde(default)]
    pub steps: Option<i64>,
    #[serde(default)]
    pub heart_rate: Option<i32>,
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Everything the engine needs for one user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub measurements: Vec<MeasurementRecord>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
}

impl RecommendationRequest {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Profile lookup already failed upstream if this is missing
    pub fn profile(&self) -> Result<&UserProfile, EngineError> {
        self.profile.as_ref().ok_or(EngineError::MissingProfile)
    }
}

/// Parse an RFC 3339 clock reading
pub fn parse_clock(raw: &str) -> Result<DateTime<Utc>, EngineError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| EngineError::InvalidClock(raw.to_string()))
}

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn parse_naive_date_time(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Parse a birth date given either as a plain date or as a date-time
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    parse_naive_date_time(raw).map(|dt| dt.date())
}

/// Parse a history timestamp. Naive values are taken as UTC, a bare date as midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_naive_date_time(raw) {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Unreadable timestamps become `None` instead of rejecting the request
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}
