//! vitaplan - Personalized diet and workout plans

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vitaplan::engine::Recommender;
use vitaplan::records::{RecommendationRequest, parse_clock};
use vitaplan::tui::App;

#[derive(Parser)]
#[command(name = "vitaplan")]
#[command(author, version, about = "Personalized diet and workout plans")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Clock reading in RFC 3339 (defaults to now)
    #[arg(long, global = true, env = "VITAPLAN_NOW")]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily calorie, macronutrient and meal plan
    Diet {
        /// Request file with profile, measurements and exercises
        #[arg(env = "VITAPLAN_REQUEST")]
        request: PathBuf,
    },

    /// Exercise plan and weekly schedule
    Workout {
        #[arg(env = "VITAPLAN_REQUEST")]
        request: PathBuf,
    },

    /// Both plans
    Plan {
        #[arg(env = "VITAPLAN_REQUEST")]
        request: PathBuf,
    },

    /// Show the derived features
    Features {
        #[arg(env = "VITAPLAN_REQUEST")]
        request: PathBuf,
    },

    /// Open TUI dashboard
    Tui {
        #[arg(env = "VITAPLAN_REQUEST")]
        request: PathBuf,
    },
}

#[derive(Serialize)]
struct FullPlan {
    diet: vitaplan::engine::DietRecommendation,
    workout: vitaplan::engine::WorkoutRecommendation,
}

fn load_request(path: &Path) -> Result<RecommendationRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))?;
    let request = RecommendationRequest::from_json(&raw)
        .with_context(|| format!("failed to parse request {}", path.display()))?;
    info!(
        "Loaded request {} ({} measurements, {} exercises)",
        path.display(),
        request.measurements.len(),
        request.exercises.len()
    );
    Ok(request)
}

fn recommender(path: &Path, now: DateTime<Utc>) -> Result<Recommender> {
    let request = load_request(path)?;
    Ok(Recommender::from_request(&request, now)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let now = match cli.now.as_deref() {
        Some(raw) => parse_clock(raw)?,
        None => Utc::now(),
    };

    match cli.command {
        Commands::Diet { request } => {
            let diet = recommender(&request, now)?.diet();
            if cli.json {
                print_json(&diet)?;
            } else {
                println!("{}", diet.format());
            }
        }

        Commands::Workout { request } => {
            let workout = recommender(&request, now)?.workout();
            if cli.json {
                print_json(&workout)?;
            } else {
                println!("{}", workout.format());
            }
        }

        Commands::Plan { request } => {
            let recommender = recommender(&request, now)?;
            let plan = FullPlan {
                diet: recommender.diet(),
                workout: recommender.workout(),
            };
            if cli.json {
                print_json(&plan)?;
            } else {
                println!("Diet plan");
                println!("{:-<60}", "");
                println!("{}", plan.diet.format());
                println!();
                println!("Workout plan");
                println!("{:-<60}", "");
                println!("{}", plan.workout.format());
            }
        }

        Commands::Features { request } => {
            let recommender = recommender(&request, now)?;
            if cli.json {
                print_json(recommender.features())?;
            } else {
                println!("{}", recommender.features().format());
            }
        }

        Commands::Tui { request } => {
            let recommender = recommender(&request, now)?;
            let mut app = App::new(&recommender);
            app.run()?;
        }
    }

    Ok(())
}
