use serde::{Deserialize, Serialize};
use std::fmt;

/// Service class of a trip.
///
/// Built from free-form user input: anything that is not "business"
/// (ASCII case-insensitive) quotes as economy. There is no invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceClass {
    Economy,
    Business,
}

impl Default for ServiceClass {
    fn default() -> Self {
        ServiceClass::Economy
    }
}

impl From<&str> for ServiceClass {
    fn from(input: &str) -> Self {
        if input.eq_ignore_ascii_case("business") {
            ServiceClass::Business
        } else {
            ServiceClass::Economy
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceClass::Economy => write!(f, "economy"),
            ServiceClass::Business => write!(f, "business"),
        }
    }
}

/// Parameters of a single quote request.
///
/// Built for one `calculate` call and dropped. Inputs are taken as-is: a
/// negative distance or a zero passenger count flows through the
/// arithmetic and produces the corresponding total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    distance: f64,
    service_class: ServiceClass,
    passengers: u32,
    discount: bool,
    baggage: bool,
}

impl TripRequest {
    /// Creates a request with no discount and no baggage.
    pub fn new(distance: f64, service_class: ServiceClass, passengers: u32) -> Self {
        Self {
            distance,
            service_class,
            passengers,
            discount: false,
            baggage: false,
        }
    }

    pub fn with_discount(mut self, discount: bool) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_baggage(mut self, baggage: bool) -> Self {
        self.baggage = baggage;
        self
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn service_class(&self) -> ServiceClass {
        self.service_class
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn has_discount(&self) -> bool {
        self.discount
    }

    pub fn has_baggage(&self) -> bool {
        self.baggage
    }
}
