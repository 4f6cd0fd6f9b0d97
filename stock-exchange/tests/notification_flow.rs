use std::sync::{Arc, Mutex};

use stock_exchange::{MobileApp, Observer, StockExchange, Symbol, Trader, TradingRobot};

type SeenLog = Arc<Mutex<Vec<(String, f64)>>>;

/// Forwards every delivery to the wrapped observer while keeping a record
/// the test can inspect.
struct Tap {
    inner: Box<dyn Observer>,
    seen: SeenLog,
}

impl Tap {
    fn new(inner: Box<dyn Observer>, seen: &SeenLog) -> Arc<dyn Observer> {
        Arc::new(Self {
            inner,
            seen: Arc::clone(seen),
        })
    }
}

impl Observer for Tap {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn on_price(&self, symbol: &Symbol, price: f64) {
        self.seen
            .lock()
            .unwrap()
            .push((format!("{}:{}", self.name(), symbol), price));
        self.inner.on_price(symbol, price);
    }
}

#[test]
fn mixed_subscribers_hear_announcements_in_order() {
    let seen = SeenLog::default();
    let mut exchange = StockExchange::new();

    exchange.subscribe("AAPL", Tap::new(Box::new(Trader::new("Ali")), &seen));
    exchange.subscribe("AAPL", Tap::new(Box::new(TradingRobot::new(100.0)), &seen));
    exchange.subscribe("GOOG", Tap::new(Box::new(MobileApp), &seen));

    exchange.set_price("AAPL", 90.0);
    exchange.set_price("GOOG", 150.0);
    exchange.set_price("AAPL", 120.0);

    let deliveries = seen.lock().unwrap();
    let expected = vec![
        ("Ali:AAPL".to_string(), 90.0),
        ("TradingRobot:AAPL".to_string(), 90.0),
        ("MobileApp:GOOG".to_string(), 150.0),
        ("Ali:AAPL".to_string(), 120.0),
        ("TradingRobot:AAPL".to_string(), 120.0),
    ];
    assert_eq!(*deliveries, expected);

    let latest = exchange.last_quote(&Symbol::from("AAPL")).unwrap();
    assert!((latest.price() - 120.0).abs() < 1e-9);
}

#[test]
fn an_unsubscribed_trader_misses_later_updates() {
    let seen = SeenLog::default();
    let mut exchange = StockExchange::new();
    let trader = Tap::new(Box::new(Trader::new("Ali")), &seen);

    exchange.subscribe("AAPL", Arc::clone(&trader));
    exchange.set_price("AAPL", 90.0);

    exchange.unsubscribe(&Symbol::from("AAPL"), &trader);
    exchange.set_price("AAPL", 120.0);

    let deliveries = seen.lock().unwrap();
    assert_eq!(*deliveries, vec![("Ali:AAPL".to_string(), 90.0)]);
}
