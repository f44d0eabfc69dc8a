//! PackPal planner library exports.

pub mod cli;
pub mod config;
pub mod error;
pub mod persistence;
pub mod render;
pub mod state;
pub mod telemetry;
pub mod weather;

pub use config::PlannerConfig;
pub use error::PlannerError;
pub use state::{Planner, PlannerEvent, PlannerState, PlannerStatus, TransitionError};
pub use weather::WeatherApiClient;
