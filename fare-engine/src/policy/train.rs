use super::CostPolicy;
use crate::models::{ServiceClass, TripRequest};

/// Quotes train travel: 0.3 per unit of distance, 1.5x for business class,
/// 20.0 flat baggage fee, 15% discount when eligible.
pub struct TrainPolicy;

impl CostPolicy for TrainPolicy {
    fn name(&self) -> &str {
        "Train"
    }

    fn calculate_cost(&self, trip: &TripRequest) -> f64 {
        let mut base = trip.distance() * 0.3;

        if trip.service_class() == ServiceClass::Business {
            base *= 1.5;
        }

        if trip.has_baggage() {
            base += 20.0;
        }

        if trip.has_discount() {
            base *= 0.85;
        }

        base * f64::from(trip.passengers())
    }
}
