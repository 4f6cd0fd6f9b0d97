use super::Observer;
use crate::models::Symbol;
use log::info;

/// Named human trader; reports every update of the symbols they follow.
pub struct Trader {
    name: String,
}

impl Trader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for Trader {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_price(&self, symbol: &Symbol, price: f64) {
        info!(
            "trader {} received update: {} = {}",
            self.name, symbol, price
        );
    }
}
