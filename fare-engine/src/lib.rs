//! # Fare Engine
//!
//! Cost calculation for travel bookings. Each transport (plane, train, bus)
//! prices a trip with its own rate card; a [`booking::BookingContext`] holds
//! whichever policy the caller selected and quotes trips through it.
//!
//! ## Modules
//! - `models`: Trip parameter records (`TripRequest`, `ServiceClass`).
//! - `policy`: The `CostPolicy` trait, its three variants, and the menu mapping.
//! - `booking`: `BookingContext`, the policy holder/delegator.
//! - `error`: Typed errors of the booking boundary.

pub mod booking;
pub mod error;
pub mod models;
pub mod policy;

pub use booking::BookingContext;
pub use error::BookingError;
pub use models::{ServiceClass, TripRequest};
pub use policy::{BusPolicy, CostPolicy, PlanePolicy, TrainPolicy, TransportMode};
