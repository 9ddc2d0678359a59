//! Recommendation engine
//!
//! Features:
//! - Feature extraction from profile, measurements and exercise logs
//! - Calorie and macronutrient targets with a templated meal plan
//! - Exercise category ratios, weekly schedule and a templated workout plan
//!
//! Everything here is a pure function of its inputs plus an explicit clock.

pub mod diet;
pub mod features;
pub mod schedule;
pub mod workout;

pub use diet::{DietRecommendation, plan_diet};
pub use features::{FeatureSet, WeightTrend, extract};
pub use schedule::{DayType, WeeklySchedule};
pub use workout::{WorkoutRecommendation, plan_workout};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::EngineError;
use crate::records::{ExerciseRecord, MeasurementRecord, RecommendationRequest, UserProfile};

/// Diet plan for one user at `now`
pub fn compute_diet_plan(
    profile: &UserProfile,
    measurements: &[MeasurementRecord],
    exercises: &[ExerciseRecord],
    now: DateTime<Utc>,
) -> DietRecommendation {
    plan_diet(&extract(profile, measurements, exercises, now))
}

/// Workout plan for one user at `now`
pub fn compute_workout_plan(
    profile: &UserProfile,
    measurements: &[MeasurementRecord],
    exercises: &[ExerciseRecord],
    now: DateTime<Utc>,
) -> WorkoutRecommendation {
    plan_workout(&extract(profile, measurements, exercises, now))
}

/// Extracts features once and runs both planners against them
pub struct Recommender {
    features: FeatureSet,
}

impl Recommender {
    pub fn new(
        profile: &UserProfile,
        measurements: &[MeasurementRecord],
        exercises: &[ExerciseRecord],
        now: DateTime<Utc>,
    ) -> Self {
        Self { features: extract(profile, measurements, exercises, now) }
    }

    /// Fails only when the request carries no profile
    pub fn from_request(
        request: &RecommendationRequest,
        now: DateTime<Utc>,
    ) -> Result<Self, EngineError> {
        let profile = request.profile()?;
        debug!(
            "Building recommender from request with {} measurements, {} exercises",
            request.measurements.len(),
            request.exercises.len()
        );
        Ok(Self::new(profile, &request.measurements, &request.exercises, now))
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn diet(&self) -> DietRecommendation {
        plan_diet(&self.features)
    }

    pub fn workout(&self) -> WorkoutRecommendation {
        plan_workout(&self.features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::BmiBand;
    use crate::records::{ActivityLevel, Gender, Goal};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
    }

    fn profile(goal: Goal) -> UserProfile {
        UserProfile {
            gender: Some(Gender::Male),
            height: Some(175.0),
            weight: Some(80.0),
            activity_level: Some(ActivityLevel::Medium),
            goal: Some(goal),
            ..Default::default()
        }
    }

    #[test]
    fn test_compute_diet_plan_reference() {
        let rec = compute_diet_plan(&profile(Goal::Lose), &[], &[], now());
        assert_eq!(rec.daily_calories, 2111);
        assert_eq!((rec.protein, rec.fat, rec.carbs), (160, 70, 209));
    }

    #[test]
    fn test_default_profile_normal_band() {
        let recommender = Recommender::new(&UserProfile::default(), &[], &[], now());
        assert_eq!(recommender.features().bmi, 24.2);
        assert_eq!(recommender.features().bmi_band, BmiBand::Normal);

        let diet = recommender.diet();
        assert_eq!(
            diet.meal_plan.breakfast.description,
            crate::templates::diet::NORMAL_DESCRIPTIONS.breakfast
        );
        let workout = recommender.workout();
        assert_eq!(
            workout.workout_plan.exercises[0].description,
            crate::templates::workout::NORMAL_DESCRIPTIONS.cardio
        );
    }

    #[test]
    fn test_recommender_matches_free_functions() {
        let measurements = vec![
            MeasurementRecord {
                weight: Some(82.0),
                recorded_at: Some(now() - Duration::days(12)),
                ..Default::default()
            },
            MeasurementRecord {
                weight: Some(80.5),
                recorded_at: Some(now() - Duration::days(1)),
                ..Default::default()
            },
        ];
        let exercises = vec![ExerciseRecord {
            exercise_type: "cycling".to_string(),
            ..Default::default()
        }];
        let p = profile(Goal::Lose);

        let recommender = Recommender::new(&p, &measurements, &exercises, now());
        assert_eq!(recommender.diet(), compute_diet_plan(&p, &measurements, &exercises, now()));
        assert_eq!(
            recommender.workout(),
            compute_workout_plan(&p, &measurements, &exercises, now())
        );
        assert_eq!(recommender.features().weight_trend, WeightTrend::Losing);
    }

    #[test]
    fn test_stored_plans_read_back() {
        let recommender = Recommender::new(&profile(Goal::Gain), &[], &[], now());
        let diet = recommender.diet();
        let workout = recommender.workout();

        let stored = serde_json::to_string(&workout).unwrap();
        assert_eq!(serde_json::from_str::<WorkoutRecommendation>(&stored).unwrap(), workout);
        let stored = serde_json::to_string(&diet).unwrap();
        assert_eq!(serde_json::from_str::<DietRecommendation>(&stored).unwrap(), diet);
    }

    #[test]
    fn test_from_request_requires_profile() {
        let request = RecommendationRequest::default();
        assert!(matches!(
            Recommender::from_request(&request, now()),
            Err(EngineError::MissingProfile)
        ));
    }

    #[test]
    fn test_from_request_json() {
        let raw = r#"{
            "profile": {
                "gender": "female",
                "birth_date": "1961-02-20",
                "height": 160,
                "weight": 62,
                "activity_level": "high",
                "goal": "gain"
            },
            "exercises": [{"exercise_type": "瑜伽"}, {"exercise_type": "yoga"}]
        }"#;
        let request = RecommendationRequest::from_json(raw).unwrap();
        let recommender = Recommender::from_request(&request, now()).unwrap();
        assert_eq!(recommender.features().age, 65);
        assert_eq!(recommender.features().exercise_preferences.flexibility, 1.0);

        let workout = recommender.workout();
        assert!(workout.workout_plan.exercises[0]
            .options
            .iter()
            .all(|o| !o.contains("HIIT")));
        assert_eq!(workout.weekly_schedule.iter().count(), 7);
    }

    #[test]
    fn test_clock_drives_trend() {
        let measurements = vec![
            MeasurementRecord {
                weight: Some(70.0),
                recorded_at: Some(now() - Duration::days(10)),
                ..Default::default()
            },
            MeasurementRecord {
                weight: Some(72.0),
                recorded_at: Some(now() - Duration::days(2)),
                ..Default::default()
            },
        ];
        let p = profile(Goal::Maintain);
        let today = Recommender::new(&p, &measurements, &[], now());
        let later = Recommender::new(&p, &measurements, &[], now() + Duration::days(60));
        assert_eq!(today.features().weight_trend, WeightTrend::Gaining);
        assert_eq!(later.features().weight_trend, WeightTrend::Stable);
    }
}
