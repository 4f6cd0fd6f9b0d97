use super::CostPolicy;
use crate::models::{ServiceClass, TripRequest};

/// Quotes plane travel: 0.5 per unit of distance, doubled for business
/// class, 50.0 flat baggage fee, 20% discount when eligible.
pub struct PlanePolicy;

impl CostPolicy for PlanePolicy {
    fn name(&self) -> &str {
        "Plane"
    }

    fn calculate_cost(&self, trip: &TripRequest) -> f64 {
        let mut base = trip.distance() * 0.5;

        if trip.service_class() == ServiceClass::Business {
            base *= 2.0;
        }

        if trip.has_baggage() {
            base += 50.0;
        }

        if trip.has_discount() {
            base *= 0.8;
        }

        base * f64::from(trip.passengers())
    }
}
