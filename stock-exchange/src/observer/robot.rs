use super::Observer;
use crate::models::Symbol;
use log::info;
use serde::{Deserialize, Serialize};

/// What the robot does with one price update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotAction {
    Buy,
    Monitor,
}

/// Automated buyer with a fixed entry threshold.
pub struct TradingRobot {
    buy_threshold: f64,
}

impl TradingRobot {
    pub fn new(buy_threshold: f64) -> Self {
        Self { buy_threshold }
    }

    /// Buys strictly below the threshold, keeps monitoring otherwise.
    pub fn decide(&self, price: f64) -> RobotAction {
        if price < self.buy_threshold {
            RobotAction::Buy
        } else {
            RobotAction::Monitor
        }
    }
}

impl Observer for TradingRobot {
    fn name(&self) -> &str {
        "TradingRobot"
    }

    fn on_price(&self, symbol: &Symbol, price: f64) {
        match self.decide(price) {
            RobotAction::Buy => info!("robot buying {} at {}", symbol, price),
            RobotAction::Monitor => info!("robot monitoring {} at {}", symbol, price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buys_strictly_below_threshold() {
        let robot = TradingRobot::new(100.0);
        assert_eq!(robot.decide(90.0), RobotAction::Buy);
        assert_eq!(robot.decide(120.0), RobotAction::Monitor);
    }

    #[test]
    fn threshold_price_is_monitored_not_bought() {
        let robot = TradingRobot::new(100.0);
        assert_eq!(robot.decide(100.0), RobotAction::Monitor);
    }
}
