//! Price publication and subscriber fan-out.
//!
//! The exchange keeps one subscriber list per symbol and walks it in
//! subscription order whenever a new price is announced. Delivery is
//! synchronous on the announcing thread.

use crate::models::{Quote, Quotes, Symbol};
use crate::observer::Observer;
use chrono::Utc;
use log::info;
use std::collections::HashMap;
use std::sync::Arc;


/// Central registry of symbols, their subscribers and their latest quotes.
pub struct StockExchange {
    observers: HashMap<Symbol, Vec<Arc<dyn Observer>>>,
    quotes: Quotes,
}

impl StockExchange {
    pub fn new() -> Self {
        Self {
            observers: HashMap::new(),
            quotes: Quotes::default(),
        }
    }

    /// Registers an observer for a symbol, creating the symbol's list on
    /// first use. The same observer may subscribe more than once and will
    /// then be notified once per registration.
    pub fn subscribe(&mut self, symbol: impl Into<Symbol>, observer: Arc<dyn Observer>) {
        let symbol = symbol.into();
        info!("{} subscribed to {}", observer.name(), symbol);
        self.observers.entry(symbol).or_default().push(observer);
    }

    /// Removes the first registration of `observer` for `symbol`, matching
    /// by handle identity. Unknown symbols and unregistered observers are
    /// ignored.
    pub fn unsubscribe(&mut self, symbol: &Symbol, observer: &Arc<dyn Observer>) {
        if let Some(subscribers) = self.observers.get_mut(symbol) {
            if let Some(index) = subscribers.iter().position(|s| Arc::ptr_eq(s, observer)) {
                subscribers.remove(index);
            }
        }
    }

    /// Announces a new price: records it as the symbol's latest quote and
    /// notifies every subscriber in subscription order.
    pub fn set_price(&mut self, symbol: impl Into<Symbol>, price: f64) {
        let symbol = symbol.into();
        info!("stock updated: {} price = {}", symbol, price);
        let quote = Quote::new(symbol.clone(), price, Utc::now().timestamp_millis());
        self.quotes.insert(symbol.clone(), quote);
        self.notify_observers(&symbol, price);
    }

    /// Delivers a price to every subscriber of the symbol, in subscription
    /// order, on the calling thread. Symbols without subscribers are
    /// skipped. Unlike [`StockExchange::set_price`] this records nothing.
    pub fn notify_observers(&self, symbol: &Symbol, price: f64) {
        if let Some(subscribers) = self.observers.get(symbol) {
            for subscriber in subscribers {
                subscriber.on_price(symbol, price);
            }
        }
    }

    /// Latest announced quote for a symbol, if any price was ever set.
    pub fn last_quote(&self, symbol: &Symbol) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    /// Number of active registrations for a symbol. Duplicate
    /// subscriptions count once per registration.
    pub fn subscriber_count(&self, symbol: &Symbol) -> usize {
        self.observers.get(symbol).map_or(0, Vec::len)
    }
}

impl Default for StockExchange {
    fn default() -> Self {
        Self::new()
    }
}
