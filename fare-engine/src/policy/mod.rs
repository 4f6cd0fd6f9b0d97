use crate::error::BookingError;
use crate::models::TripRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod bus;
pub mod plane;
pub mod train;

pub use bus::BusPolicy;
pub use plane::PlanePolicy;
pub use train::TrainPolicy;

/// Pricing strategy for one mode of transport.
///
/// Implementations are stateless: the variant alone determines the rate
/// card, and the whole quote is derived from the [`TripRequest`].
pub trait CostPolicy: Send + Sync {
    /// Returns the name of the policy for logging purposes.
    fn name(&self) -> &str;

    /// Quotes the trip. All variants compose the same way: distance rate,
    /// business multiplier, flat baggage surcharge, discount factor, then
    /// the passenger count last.
    fn calculate_cost(&self, trip: &TripRequest) -> f64;
}

/// The three transports offered on the booking menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    Plane,
    Train,
    Bus,
}

impl TransportMode {
    /// Maps a menu choice (1 Plane, 2 Train, 3 Bus) to a transport.
    pub fn from_choice(choice: u32) -> Result<Self, BookingError> {
        match choice {
            1 => Ok(TransportMode::Plane),
            2 => Ok(TransportMode::Train),
            3 => Ok(TransportMode::Bus),
            other => Err(BookingError::InvalidTransport(other)),
        }
    }

    /// Builds the cost policy for this transport.
    pub fn policy(&self) -> Box<dyn CostPolicy> {
        match self {
            TransportMode::Plane => Box::new(PlanePolicy),
            TransportMode::Train => Box::new(TrainPolicy),
            TransportMode::Bus => Box::new(BusPolicy),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Plane => write!(f, "Plane"),
            TransportMode::Train => write!(f, "Train"),
            TransportMode::Bus => write!(f, "Bus"),
        }
    }
}
