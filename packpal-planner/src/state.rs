//! Planner state machine.
//!
//! `PlannerState::apply` is the transition table. `Planner` drives it with a
//! weather provider, the rule catalog and the saved-trips file.

use crate::error::PlannerError;
use crate::persistence;
use chrono::NaiveDate;
use packpal_core::{
    generate_with_catalog, Catalog, ItemPatch, PackingCategory, PackingItemId, PackingList,
    PackingProgress, PackpalError, TripDetails, WeatherForecast, WeatherProvider,
};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerState {
    Idle,
    AwaitingWeather {
        trip: TripDetails,
    },
    Generating {
        trip: TripDetails,
        forecast: WeatherForecast,
    },
    Ready {
        trip: TripDetails,
        forecast: WeatherForecast,
        list: PackingList,
    },
    WeatherFailed {
        trip: TripDetails,
        message: String,
    },
    GenerationFailed {
        trip: TripDetails,
        forecast: WeatherForecast,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    TripSubmitted(TripDetails),
    WeatherArrived(WeatherForecast),
    WeatherFailed(String),
    ListGenerated(PackingList),
    GenerationFailed(String),
    Regenerate,
    ListEdited(PackingList),
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot apply {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },
    #[error("No trip has been submitted")]
    NoActiveTrip,
}

impl PlannerState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingWeather { .. } => "awaiting-weather",
            Self::Generating { .. } => "generating",
            Self::Ready { .. } => "ready",
            Self::WeatherFailed { .. } => "weather-failed",
            Self::GenerationFailed { .. } => "generation-failed",
        }
    }

    pub fn trip(&self) -> Option<&TripDetails> {
        match self {
            Self::Idle => None,
            Self::AwaitingWeather { trip }
            | Self::Generating { trip, .. }
            | Self::Ready { trip, .. }
            | Self::WeatherFailed { trip, .. }
            | Self::GenerationFailed { trip, .. } => Some(trip),
        }
    }

    pub fn forecast(&self) -> Option<&WeatherForecast> {
        match self {
            Self::Generating { forecast, .. }
            | Self::Ready { forecast, .. }
            | Self::GenerationFailed { forecast, .. } => Some(forecast),
            _ => None,
        }
    }

    pub fn list(&self) -> Option<&PackingList> {
        match self {
            Self::Ready { list, .. } => Some(list),
            _ => None,
        }
    }

    /// Next state for `event`, or `InvalidTransition` when the pair is not in the table.
    pub fn apply(&self, event: PlannerEvent) -> Result<PlannerState, TransitionError> {
        let event_name = event.name();
        let next = match (self, event) {
            (_, PlannerEvent::TripSubmitted(trip)) => PlannerState::AwaitingWeather { trip },
            (_, PlannerEvent::Cleared) => PlannerState::Idle,
            (PlannerState::AwaitingWeather { trip }, PlannerEvent::WeatherArrived(forecast)) => {
                PlannerState::Generating {
                    trip: trip.clone(),
                    forecast,
                }
            }
            (PlannerState::AwaitingWeather { trip }, PlannerEvent::WeatherFailed(message)) => {
                PlannerState::WeatherFailed {
                    trip: trip.clone(),
                    message,
                }
            }
            (PlannerState::Generating { trip, forecast }, PlannerEvent::ListGenerated(list)) => {
                PlannerState::Ready {
                    trip: trip.clone(),
                    forecast: forecast.clone(),
                    list,
                }
            }
            (
                PlannerState::Generating { trip, forecast },
                PlannerEvent::GenerationFailed(message),
            ) => PlannerState::GenerationFailed {
                trip: trip.clone(),
                forecast: forecast.clone(),
                message,
            },
            (
                PlannerState::Ready { trip, forecast, .. }
                | PlannerState::GenerationFailed { trip, forecast, .. },
                PlannerEvent::Regenerate,
            ) => PlannerState::Generating {
                trip: trip.clone(),
                forecast: forecast.clone(),
            },
            (PlannerState::Ready { trip, forecast, .. }, PlannerEvent::ListEdited(list)) => {
                PlannerState::Ready {
                    trip: trip.clone(),
                    forecast: forecast.clone(),
                    list,
                }
            }
            (state, _) => {
                return Err(TransitionError::InvalidTransition {
                    state: state.name(),
                    event: event_name,
                })
            }
        };
        tracing::debug!(from = self.name(), to = next.name(), event = event_name, "Planner transition");
        Ok(next)
    }
}

impl PlannerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TripSubmitted(_) => "trip-submitted",
            Self::WeatherArrived(_) => "weather-arrived",
            Self::WeatherFailed(_) => "weather-failed",
            Self::ListGenerated(_) => "list-generated",
            Self::GenerationFailed(_) => "generation-failed",
            Self::Regenerate => "regenerate",
            Self::ListEdited(_) => "list-edited",
            Self::Cleared => "cleared",
        }
    }
}

/// What the traveler should be shown for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerStatus {
    Idle,
    Loading { stage: &'static str },
    Error { message: String },
    Ready { progress: PackingProgress },
}

impl fmt::Display for PlannerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Enter trip details to get started"),
            Self::Loading { stage } => write!(f, "Loading {}...", stage),
            Self::Error { message } => write!(f, "Error: {}", message),
            Self::Ready { progress } => write!(
                f,
                "{}/{} packed ({}%)",
                progress.checked, progress.total, progress.percent
            ),
        }
    }
}

impl From<&PlannerState> for PlannerStatus {
    fn from(state: &PlannerState) -> Self {
        match state {
            PlannerState::Idle => Self::Idle,
            PlannerState::AwaitingWeather { .. } => Self::Loading { stage: "weather" },
            PlannerState::Generating { .. } => Self::Loading {
                stage: "packing list",
            },
            PlannerState::WeatherFailed { message, .. }
            | PlannerState::GenerationFailed { message, .. } => Self::Error {
                message: message.clone(),
            },
            PlannerState::Ready { list, .. } => Self::Ready {
                progress: list.progress(),
            },
        }
    }
}

// ============================================================================
// PLANNER
// ============================================================================

pub struct Planner<P: WeatherProvider> {
    provider: P,
    catalog: Catalog,
    saved_trips_path: PathBuf,
    state: PlannerState,
}

impl<P: WeatherProvider> Planner<P> {
    pub fn new(provider: P, saved_trips_path: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            catalog: Catalog::standard().clone(),
            saved_trips_path: saved_trips_path.into(),
            state: PlannerState::Idle,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn status(&self) -> PlannerStatus {
        PlannerStatus::from(&self.state)
    }

    pub fn list(&self) -> Option<&PackingList> {
        self.state.list()
    }

    /// The generated list, or the reason there is none.
    pub fn require_list(&self) -> Result<&PackingList, PlannerError> {
        match &self.state {
            PlannerState::Ready { list, .. } => Ok(list),
            PlannerState::WeatherFailed { message, .. } => Err(PlannerError::WeatherUnavailable {
                message: message.clone(),
            }),
            PlannerState::GenerationFailed { message, .. } => Err(PlannerError::ListUnavailable {
                message: message.clone(),
            }),
            other => Err(TransitionError::InvalidTransition {
                state: other.name(),
                event: "list-generated",
            }
            .into()),
        }
    }

    /// Fetch weather for `trip` and generate its list.
    ///
    /// Weather and generation failures end in their failed states rather than
    /// in an `Err`; inspect [`Planner::status`] afterwards.
    pub async fn submit_trip(&mut self, trip: TripDetails) -> Result<&PlannerState, PlannerError> {
        self.fire(PlannerEvent::TripSubmitted(trip.clone()))?;
        tracing::info!(
            provider = self.provider.provider_id(),
            city = %trip.destination.city,
            country = %trip.destination.country,
            "Fetching weather"
        );
        match self
            .provider
            .fetch_forecast(&trip.destination.city, &trip.destination.country)
            .await
        {
            Ok(forecast) => {
                self.fire(PlannerEvent::WeatherArrived(forecast))?;
                self.generate()?;
            }
            Err(err) => {
                self.fire(PlannerEvent::WeatherFailed(err.to_string()))?;
            }
        }
        Ok(&self.state)
    }

    /// Rebuild the list from the current trip and forecast, dropping edits.
    pub fn regenerate(&mut self) -> Result<&PlannerState, PlannerError> {
        self.fire(PlannerEvent::Regenerate)?;
        self.generate()?;
        Ok(&self.state)
    }

    pub fn clear(&mut self) -> Result<(), PlannerError> {
        self.fire(PlannerEvent::Cleared)?;
        Ok(())
    }

    pub fn update_item(
        &mut self,
        item_id: PackingItemId,
        patch: &ItemPatch,
    ) -> Result<&PackingList, PlannerError> {
        let next = self
            .ready_list()?
            .update_item(item_id, patch)
            .map_err(PackpalError::from)?;
        self.edit(next)
    }

    pub fn toggle_item(&mut self, item_id: PackingItemId) -> Result<&PackingList, PlannerError> {
        let next = self.ready_list()?.toggle_item(item_id);
        self.edit(next)
    }

    pub fn add_custom_item(
        &mut self,
        name: &str,
        category: PackingCategory,
    ) -> Result<&PackingList, PlannerError> {
        let next = self
            .ready_list()?
            .add_custom_item(name, category)
            .map_err(PackpalError::from)?;
        self.edit(next)
    }

    pub fn remove_item(&mut self, item_id: PackingItemId) -> Result<&PackingList, PlannerError> {
        let next = self.ready_list()?.remove_item(item_id);
        self.edit(next)
    }

    pub fn saved_trips(&self) -> Result<Vec<TripDetails>, PlannerError> {
        Ok(persistence::load(&self.saved_trips_path)?)
    }

    /// Persist the current trip, replacing any saved trip with the same city and start date.
    pub fn save_current_trip(&self) -> Result<Vec<TripDetails>, PlannerError> {
        let trip = self.state.trip().ok_or(TransitionError::NoActiveTrip)?;
        Ok(persistence::save_trip(&self.saved_trips_path, trip)?)
    }

    /// Submit a previously saved trip as if it had just been entered.
    pub async fn load_saved_trip(
        &mut self,
        city: &str,
        start: NaiveDate,
    ) -> Result<&PlannerState, PlannerError> {
        let trip = self
            .saved_trips()?
            .into_iter()
            .find(|trip| trip.destination.city == city && trip.dates.start == start)
            .ok_or_else(|| PlannerError::SavedTripNotFound {
                city: city.to_string(),
                start,
            })?;
        self.clear()?;
        self.submit_trip(trip).await
    }

    pub fn forget_saved_trip(&self, city: &str, start: NaiveDate) -> Result<bool, PlannerError> {
        Ok(persistence::remove_trip(&self.saved_trips_path, city, start)?)
    }

    fn fire(&mut self, event: PlannerEvent) -> Result<(), TransitionError> {
        self.state = self.state.apply(event)?;
        Ok(())
    }

    fn generate(&mut self) -> Result<(), TransitionError> {
        let (trip, forecast) = match &self.state {
            PlannerState::Generating { trip, forecast } => (trip, forecast),
            other => {
                return Err(TransitionError::InvalidTransition {
                    state: other.name(),
                    event: "list-generated",
                })
            }
        };
        let event = match generate_with_catalog(&self.catalog, trip, forecast) {
            Ok(list) => PlannerEvent::ListGenerated(list),
            Err(err) => {
                tracing::warn!(error = %err, "Packing list generation failed");
                PlannerEvent::GenerationFailed(err.to_string())
            }
        };
        self.fire(event)
    }

    fn ready_list(&self) -> Result<&PackingList, TransitionError> {
        self.state
            .list()
            .ok_or(TransitionError::InvalidTransition {
                state: self.state.name(),
                event: "list-edited",
            })
    }

    fn edit(&mut self, next: PackingList) -> Result<&PackingList, PlannerError> {
        self.fire(PlannerEvent::ListEdited(next))?;
        self.ready_list().map_err(PlannerError::from)
    }
}
