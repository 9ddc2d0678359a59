//! Feature extraction - profile and history reduced to one immutable feature set

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bands::{AgeBand, BmiBand};
use crate::exercises::{CategoryRatios, ExerciseCategory, classify_label};
use crate::records::{
    ActivityLevel, ExerciseRecord, Gender, Goal, MeasurementRecord, UserProfile, parse_birth_date,
};

pub const DEFAULT_AGE: i32 = 30;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_BMI: f64 = 22.0;
pub const DEFAULT_PREFERENCES: CategoryRatios = CategoryRatios::new(0.5, 0.3, 0.2);

/// Only measurements this recent count towards the trend
pub const TREND_WINDOW_DAYS: i64 = 30;
/// Percent change beyond which the trend is no longer stable
pub const TREND_THRESHOLD_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightTrend {
    Losing,
    Gaining,
    #[default]
    Stable,
}

/// Everything the planners look at. Built once per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureSet {
    pub gender: Gender,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub bmi: f64,
    pub bmi_band: BmiBand,
    pub age_band: AgeBand,
    pub exercise_preferences: CategoryRatios,
    pub weight_trend: WeightTrend,
}

/// Build the feature set. Missing or malformed data falls back to defaults.
pub fn extract(
    profile: &UserProfile,
    measurements: &[MeasurementRecord],
    exercises: &[ExerciseRecord],
    now: DateTime<Utc>,
) -> FeatureSet {
    let age = calculate_age(profile.birth_date.as_deref(), now.date_naive());
    let height = profile.height.unwrap_or(DEFAULT_HEIGHT_CM);
    let weight = latest_weight(measurements, profile.weight);
    let bmi = calculate_bmi(height, weight);

    let features = FeatureSet {
        gender: profile.gender.unwrap_or_default(),
        age,
        height,
        weight,
        activity_level: profile.activity_level.unwrap_or_default(),
        goal: profile.goal.unwrap_or_default(),
        bmi,
        bmi_band: BmiBand::from_bmi(bmi),
        age_band: AgeBand::from_age(age),
        exercise_preferences: exercise_preferences(exercises),
        weight_trend: weight_trend(measurements, now),
    };

    debug!(
        age = features.age,
        weight = features.weight,
        bmi = features.bmi,
        trend = ?features.weight_trend,
        "Extracted features from {} measurements and {} exercises",
        measurements.len(),
        exercises.len()
    );

    features
}

/// Full years between the birth date and `today`
pub fn calculate_age(birth_date: Option<&str>, today: NaiveDate) -> i32 {
    let Some(raw) = birth_date else {
        return DEFAULT_AGE;
    };

    let Some(born) = parse_birth_date(raw) else {
        warn!("Unparseable birth date {:?}, using default age", raw);
        return DEFAULT_AGE;
    };

    let before_birthday = (today.month(), today.day()) < (born.month(), born.day());
    today.year() - born.year() - i32::from(before_birthday)
}

/// Weight of the most recent measurement, else the profile weight
fn latest_weight(measurements: &[MeasurementRecord], profile_weight: Option<f64>) -> f64 {
    let fallback = profile_weight
        .filter(|w| w.is_finite())
        .unwrap_or(DEFAULT_WEIGHT_KG);

    // Stable sort: among equal timestamps the first listed entry wins
    let mut sorted: Vec<&MeasurementRecord> = measurements.iter().collect();
    sorted.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    sorted
        .first()
        .and_then(|m| m.weight)
        .filter(|w| w.is_finite())
        .unwrap_or(fallback)
}

/// BMI rounded to one decimal
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if !(height_cm > 0.0) {
        return DEFAULT_BMI;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round_ties_even() / 10.0
}

/// Share of logged sessions per category
fn exercise_preferences(exercises: &[ExerciseRecord]) -> CategoryRatios {
    let mut counts = CategoryRatios::new(0.0, 0.0, 0.0);

    for exercise in exercises {
        match classify_label(&exercise.exercise_type) {
            Some(ExerciseCategory::Cardio) => counts.cardio += 1.0,
            Some(ExerciseCategory::Strength) => counts.strength += 1.0,
            Some(ExerciseCategory::Flexibility) => counts.flexibility += 1.0,
            None => {}
        }
    }

    counts.normalized().unwrap_or(DEFAULT_PREFERENCES)
}

/// Direction of weight change over the trend window
fn weight_trend(measurements: &[MeasurementRecord], now: DateTime<Utc>) -> WeightTrend {
    if measurements.len() < 2 {
        return WeightTrend::Stable;
    }

    let window_start = now - Duration::days(TREND_WINDOW_DAYS);
    let mut recent: Vec<(DateTime<Utc>, f64)> = measurements
        .iter()
        .filter_map(|m| Some((m.recorded_at?, m.weight?)))
        .filter(|(at, weight)| *at >= window_start && weight.is_finite())
        .collect();

    if recent.len() < 2 {
        return WeightTrend::Stable;
    }

    recent.sort_by_key(|(at, _)| *at);

    let first = recent[0].1;
    let last = recent[recent.len() - 1].1;
    if first <= 0.0 {
        return WeightTrend::Stable;
    }

    let change_percent = (last - first) / first * 100.0;
    if change_percent < -TREND_THRESHOLD_PERCENT {
        WeightTrend::Losing
    } else if change_percent > TREND_THRESHOLD_PERCENT {
        WeightTrend::Gaining
    } else {
        WeightTrend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn measurement(weight: f64, days_ago: i64) -> MeasurementRecord {
        MeasurementRecord {
            weight: Some(weight),
            recorded_at: Some(now() - Duration::days(days_ago)),
            ..Default::default()
        }
    }

    fn exercise(label: &str) -> ExerciseRecord {
        ExerciseRecord {
            exercise_type: label.to_string(),
            recorded_at: Some(now()),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        now().date_naive()
    }

    #[test]
    fn test_age_default_when_missing() {
        assert_eq!(calculate_age(None, today()), DEFAULT_AGE);
    }

    #[test]
    fn test_age_default_when_unparseable() {
        assert_eq!(calculate_age(Some("not a date"), today()), DEFAULT_AGE);
    }

    #[test]
    fn test_age_birthday_passed() {
        assert_eq!(calculate_age(Some("1990-03-01"), today()), 36);
    }

    #[test]
    fn test_age_birthday_not_yet() {
        assert_eq!(calculate_age(Some("1990-12-01"), today()), 35);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(calculate_age(Some("1990-10-16"), today()), 36);
        assert_eq!(calculate_age(Some("1990-10-17"), today()), 35);
    }

    #[test]
    fn test_latest_weight_uses_newest_measurement() {
        let measurements = vec![measurement(80.0, 10), measurement(78.0, 1), measurement(82.0, 20)];
        assert_eq!(latest_weight(&measurements, Some(90.0)), 78.0);
    }

    #[test]
    fn test_latest_weight_missing_timestamp_sorts_earliest() {
        let undated = MeasurementRecord { weight: Some(100.0), ..Default::default() };
        let measurements = vec![undated, measurement(75.0, 40)];
        assert_eq!(latest_weight(&measurements, None), 75.0);
    }

    #[test]
    fn test_latest_weight_fallbacks() {
        assert_eq!(latest_weight(&[], Some(64.0)), 64.0);
        assert_eq!(latest_weight(&[], None), DEFAULT_WEIGHT_KG);
        let no_weight = MeasurementRecord { recorded_at: Some(now()), ..Default::default() };
        assert_eq!(latest_weight(&[no_weight], Some(64.0)), 64.0);
    }

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(175.0, 80.0), 26.1);
        assert_eq!(calculate_bmi(170.0, 70.0), 24.2);
        // 24.25 exactly; halves go to the even digit
        assert_eq!(calculate_bmi(200.0, 97.0), 24.2);
        assert_eq!(calculate_bmi(200.0, 99.0), 24.8);
    }

    #[test]
    fn test_bmi_non_positive_height() {
        assert_eq!(calculate_bmi(0.0, 80.0), DEFAULT_BMI);
        assert_eq!(calculate_bmi(-10.0, 80.0), DEFAULT_BMI);
        assert_eq!(calculate_bmi(f64::NAN, 80.0), DEFAULT_BMI);
    }

    #[test]
    fn test_preferences_default_when_empty() {
        assert_eq!(exercise_preferences(&[]), DEFAULT_PREFERENCES);
    }

    #[test]
    fn test_preferences_default_when_nothing_matches() {
        let exercises = vec![exercise("basketball"), exercise("football")];
        assert_eq!(exercise_preferences(&exercises), DEFAULT_PREFERENCES);
    }

    #[test]
    fn test_preferences_distribution() {
        let exercises = vec![
            exercise("running"),
            exercise("running"),
            exercise("swimming"),
            exercise("gym"),
            exercise("basketball"),
        ];
        let prefs = exercise_preferences(&exercises);
        assert_eq!(prefs, CategoryRatios::new(0.75, 0.25, 0.0));
    }

    #[test]
    fn test_preferences_sum_to_one() {
        let exercises = vec![exercise("yoga"), exercise("跑步"), exercise("weightlifting")];
        let prefs = exercise_preferences(&exercises);
        assert!((prefs.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_stable_with_one_point() {
        assert_eq!(weight_trend(&[measurement(80.0, 1)], now()), WeightTrend::Stable);
        assert_eq!(weight_trend(&[], now()), WeightTrend::Stable);
    }

    #[test]
    fn test_trend_losing() {
        let measurements = vec![measurement(78.0, 1), measurement(80.0, 20)];
        assert_eq!(weight_trend(&measurements, now()), WeightTrend::Losing);
    }

    #[test]
    fn test_trend_gaining() {
        let measurements = vec![measurement(80.0, 25), measurement(81.0, 10), measurement(82.0, 2)];
        assert_eq!(weight_trend(&measurements, now()), WeightTrend::Gaining);
    }

    #[test]
    fn test_trend_within_one_percent_is_stable() {
        let measurements = vec![measurement(80.0, 20), measurement(80.7, 1)];
        assert_eq!(weight_trend(&measurements, now()), WeightTrend::Stable);
    }

    #[test]
    fn test_trend_ignores_old_points() {
        // Only one point inside the window
        let measurements = vec![measurement(90.0, 60), measurement(80.0, 3)];
        assert_eq!(weight_trend(&measurements, now()), WeightTrend::Stable);
    }

    #[test]
    fn test_trend_ignores_undated_points() {
        let undated = MeasurementRecord { weight: Some(60.0), ..Default::default() };
        let measurements = vec![undated, measurement(80.0, 3)];
        assert_eq!(weight_trend(&measurements, now()), WeightTrend::Stable);
    }

    #[test]
    fn test_trend_zero_first_weight_is_stable() {
        let measurements = vec![measurement(0.0, 10), measurement(80.0, 3)];
        assert_eq!(weight_trend(&measurements, now()), WeightTrend::Stable);
    }

    #[test]
    fn test_extract_defaults() {
        let features = extract(&UserProfile::default(), &[], &[], now());
        assert_eq!(features.gender, Gender::Male);
        assert_eq!(features.age, DEFAULT_AGE);
        assert_eq!(features.height, DEFAULT_HEIGHT_CM);
        assert_eq!(features.weight, DEFAULT_WEIGHT_KG);
        assert_eq!(features.activity_level, ActivityLevel::Medium);
        assert_eq!(features.goal, Goal::Maintain);
        assert_eq!(features.bmi, 24.2);
        assert_eq!(features.bmi_band, BmiBand::Normal);
        assert_eq!(features.age_band, AgeBand::Adult);
        assert_eq!(features.exercise_preferences, DEFAULT_PREFERENCES);
        assert_eq!(features.weight_trend, WeightTrend::Stable);
    }

    #[test]
    fn test_extract_measurement_overrides_profile_weight() {
        let profile = UserProfile {
            height: Some(180.0),
            weight: Some(90.0),
            birth_date: Some("1960-01-01".to_string()),
            ..Default::default()
        };
        let measurements = vec![measurement(100.0, 2), measurement(97.0, 0)];
        let features = extract(&profile, &measurements, &[], now());
        assert_eq!(features.weight, 97.0);
        assert_eq!(features.bmi, 29.9);
        assert_eq!(features.bmi_band, BmiBand::Overweight);
        assert_eq!(features.age, 66);
        assert_eq!(features.age_band, AgeBand::Senior);
        assert_eq!(features.weight_trend, WeightTrend::Losing);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let profile = UserProfile { goal: Some(Goal::Gain), ..Default::default() };
        let measurements = vec![measurement(70.0, 5), measurement(71.0, 1)];
        let exercises = vec![exercise("yoga"), exercise("gym")];
        let a = extract(&profile, &measurements, &exercises, now());
        let b = extract(&profile, &measurements, &exercises, now());
        assert_eq!(a, b);
    }
}
