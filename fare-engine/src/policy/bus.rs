use super::CostPolicy;
use crate::models::{ServiceClass, TripRequest};

/// Quotes bus travel: 0.2 per unit of distance, 1.2x for business class,
/// 10.0 flat baggage fee, 10% discount when eligible.
pub struct BusPolicy;

impl CostPolicy for BusPolicy {
    fn name(&self) -> &str {
        "Bus"
    }

    fn calculate_cost(&self, trip: &TripRequest) -> f64 {
        let mut base = trip.distance() * 0.2;

        if trip.service_class() == ServiceClass::Business {
            base *= 1.2;
        }

        if trip.has_baggage() {
            base += 10.0;
        }

        if trip.has_discount() {
            base *= 0.9;
        }

        base * f64::from(trip.passengers())
    }
}
