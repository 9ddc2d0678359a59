//! vitaplan - Personalized diet and workout recommendations
//!
//! Takes a user profile plus body-measurement and exercise history and
//! produces a diet plan and a workout plan.

pub mod bands;
pub mod engine;
pub mod error;
pub mod exercises;
pub mod records;
pub mod report;
pub mod templates;
pub mod tui;

pub use engine::{Recommender, compute_diet_plan, compute_workout_plan};
pub use error::EngineError;
