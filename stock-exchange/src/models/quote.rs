use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Ticker symbol of one listed stock, e.g. "AAPL".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Symbol {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One announced price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    symbol: Symbol,
    price: f64,
    /// Announcement time (Unix timestamp, milliseconds).
    timestamp: i64,
}

impl Quote {
    pub fn new(symbol: Symbol, price: f64, timestamp: i64) -> Self {
        Self {
            symbol,
            price,
            timestamp,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Most recent announcement per symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quotes {
    quotes: HashMap<Symbol, Quote>,
}

impl Quotes {
    pub fn insert(&mut self, symbol: Symbol, quote: Quote) {
        self.quotes.insert(symbol, quote);
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    pub fn contains_key(&self, symbol: &Symbol) -> bool {
        self.quotes.contains_key(symbol)
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, Symbol, Quote> {
        self.quotes.iter()
    }
}
