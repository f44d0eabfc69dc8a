//! Command-line arguments for the `packpal` binary.

use crate::error::PlannerError;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use packpal_core::TripDraft;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a list for the trip in a TOML file.
    Plan { trip_path: PathBuf, save: bool },
    /// Print the saved trips.
    Saved,
    /// Delete a saved trip.
    Forget { city: String, start: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub command: Command,
}

/// PackPal packing-list planner.
#[derive(Parser, Debug)]
#[command(name = "packpal", about = "Weather-aware packing lists")]
#[command(group(ArgGroup::new("command").required(true).args(["trip", "saved", "forget"])))]
struct RawArgs {
    /// Planner config file (defaults to packpal.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trip file to plan.
    #[arg(long)]
    trip: Option<PathBuf>,

    /// Save the planned trip.
    #[arg(long, requires = "trip")]
    save: bool,

    /// List saved trips.
    #[arg(long)]
    saved: bool,

    /// Delete the saved trip to CITY starting on the given date.
    #[arg(long, num_args = 2, value_names = ["CITY", "YYYY-MM-DD"])]
    forget: Option<Vec<String>>,
}

impl CliArgs {
    /// Parse the process arguments, exiting with clap's usage message on error.
    pub fn from_env() -> Result<Self, PlannerError> {
        Self::from_raw(RawArgs::parse())
    }

    /// Parse arguments, program name first.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, PlannerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw = RawArgs::try_parse_from(args).map_err(|e| PlannerError::Usage(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawArgs) -> Result<Self, PlannerError> {
        let command = match (raw.trip, raw.saved, raw.forget) {
            (Some(trip_path), _, _) => Command::Plan {
                trip_path,
                save: raw.save,
            },
            (None, true, _) => Command::Saved,
            (None, false, Some(values)) => {
                let [city, date] = <[String; 2]>::try_from(values).map_err(|values| {
                    PlannerError::Usage(format!("--forget expects 2 values, got {}", values.len()))
                })?;
                let start = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                    PlannerError::Usage(format!("'{}' is not an ISO date: {}", date, e))
                })?;
                Command::Forget { city, start }
            }
            (None, false, None) => {
                return Err(PlannerError::Usage(
                    "one of --trip, --saved or --forget is required".to_string(),
                ))
            }
        };
        Ok(Self {
            config: raw.config,
            command,
        })
    }
}

/// Read and validate a trip file.
pub fn load_trip_draft(path: &Path) -> Result<TripDraft, PlannerError> {
    let contents = std::fs::read_to_string(path)?;
    let draft: TripDraft = toml::from_str(&contents)?;
    Ok(draft)
}
