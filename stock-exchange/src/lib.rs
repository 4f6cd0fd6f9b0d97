//! # Stock Exchange
//!
//! Publish/subscribe price notification. A [`exchange::StockExchange`] maps
//! ticker symbols to subscribed observers and fans every announced price out
//! to them synchronously, in subscription order.
//!
//! ## Modules
//! - `models`: Symbols and announced quotes.
//! - `observer`: The `Observer` trait and the bundled reactions (trader,
//!   trading robot, mobile app).
//! - `exchange`: The subscription registry and dispatcher.

pub mod exchange;
pub mod models;
pub mod observer;

pub use exchange::StockExchange;
pub use models::{Quote, Quotes, Symbol};
pub use observer::{MobileApp, Observer, RobotAction, Trader, TradingRobot};
