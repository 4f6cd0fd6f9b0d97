use crate::error::BookingError;
use crate::models::TripRequest;
use crate::policy::CostPolicy;
use log::warn;

/// Holder/delegator that applies the currently selected cost policy.
///
/// Holds zero or one policy at a time; selecting a new one replaces the
/// previous with no history kept.
pub struct BookingContext {
    policy: Option<Box<dyn CostPolicy>>,
}

impl Default for BookingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingContext {
    pub fn new() -> Self {
        Self { policy: None }
    }

    /// Replaces the active cost policy.
    pub fn set_policy(&mut self, policy: Box<dyn CostPolicy>) {
        self.policy = Some(policy);
    }

    /// Name of the active policy, if one has been selected.
    pub fn policy_name(&self) -> Option<&str> {
        self.policy.as_deref().map(|policy| policy.name())
    }

    /// Quotes the trip under the active policy, or reports that none has
    /// been selected yet.
    pub fn try_calculate(&self, trip: &TripRequest) -> Result<f64, BookingError> {
        match &self.policy {
            Some(policy) => Ok(policy.calculate_cost(trip)),
            None => Err(BookingError::NoPolicySelected),
        }
    }

    /// Quotes the trip under the active policy.
    ///
    /// A missing policy is a recoverable condition, not a fault: the call
    /// logs a warning and yields 0.0 instead of failing the caller.
    pub fn calculate(&self, trip: &TripRequest) -> f64 {
        match self.try_calculate(trip) {
            Ok(cost) => cost,
            Err(err) => {
                warn!("{}, quoting 0", err);
                0.0
            }
        }
    }
}
