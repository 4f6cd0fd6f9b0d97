use crate::models::Symbol;

pub mod mobile;
pub mod robot;
pub mod trader;

pub use mobile::MobileApp;
pub use robot::{RobotAction, TradingRobot};
pub use trader::Trader;

/// Reaction to price updates of subscribed symbols.
///
/// Delivery is synchronous: the exchange calls `on_price` on the announcing
/// thread, in subscription order, and a panicking implementation aborts the
/// rest of the fan-out. The exchange shares observers through `Arc` handles;
/// whoever created the observer keeps owning it.
pub trait Observer: Send + Sync {
    /// Returns the name of the observer for logging purposes.
    fn name(&self) -> &str;

    /// Called once per announced price of a subscribed symbol.
    fn on_price(&self, symbol: &Symbol, price: f64);
}
