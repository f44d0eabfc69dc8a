//! PackPal planner entry point.

use packpal_planner::cli::{self, CliArgs, Command};
use packpal_planner::render::{render_forecast, render_list, render_saved_trips};
use packpal_planner::telemetry::init_tracing;
use packpal_planner::{Planner, PlannerConfig, PlannerError, WeatherApiClient};

#[tokio::main]
async fn main() -> Result<(), PlannerError> {
    let args = CliArgs::from_env()?;
    let config = PlannerConfig::load(args.config.as_deref())?;
    init_tracing(&config.logging)?;

    let client = WeatherApiClient::new(&config.weather)?;
    let mut planner = Planner::new(client, config.storage.saved_trips_path.clone());

    match args.command {
        Command::Plan { trip_path, save } => {
            let trip = cli::load_trip_draft(&trip_path)?.validate()?;
            planner.submit_trip(trip).await?;
            let list = planner.require_list()?;
            if let Some(forecast) = planner.state().forecast() {
                println!("{}\n", render_forecast(forecast));
            }
            println!("{}", render_list(list));
            if save {
                let saved = planner.save_current_trip()?;
                println!("\nSaved ({} trips on file)", saved.len());
            }
        }
        Command::Saved => {
            println!("{}", render_saved_trips(&planner.saved_trips()?));
        }
        Command::Forget { city, start } => {
            if planner.forget_saved_trip(&city, start)? {
                println!("Removed {} ({})", city, start);
            } else {
                println!("No saved trip to {} starting {}", city, start);
            }
        }
    }

    Ok(())
}
