use super::Observer;
use crate::models::Symbol;
use log::info;

/// Push-notification channel for price updates.
pub struct MobileApp;

impl Observer for MobileApp {
    fn name(&self) -> &str {
        "MobileApp"
    }

    fn on_price(&self, symbol: &Symbol, price: f64) {
        info!("mobile notification: {} = {}", symbol, price);
    }
}
