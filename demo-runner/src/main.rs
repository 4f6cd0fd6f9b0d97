use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use fare_engine::{BookingContext, ServiceClass, TransportMode, TripRequest};
use stock_exchange::{MobileApp, Observer, StockExchange, Trader, TradingRobot};

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_flag(input: &str) -> anyhow::Result<bool> {
    input
        .to_ascii_lowercase()
        .parse()
        .with_context(|| format!("expected true or false, got {:?}", input))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("demo runner starting");

    println!("=== TRAVEL BOOKING SYSTEM ===");

    let mut context = BookingContext::new();

    println!("Choose transport:");
    println!("1 Plane");
    println!("2 Train");
    println!("3 Bus");

    let choice: u32 = prompt("")?
        .parse()
        .context("transport choice must be a number")?;
    let mode = match TransportMode::from_choice(choice) {
        Ok(mode) => mode,
        Err(err) => {
            log::warn!("{}", err);
            println!("Invalid choice");
            return Ok(());
        }
    };
    context.set_policy(mode.policy());

    let distance: f64 = prompt("Distance: ")?
        .parse()
        .context("distance must be a number")?;
    let passengers: u32 = prompt("Passengers: ")?
        .parse()
        .context("passengers must be a whole number")?;
    let service_class =
        ServiceClass::from(prompt("Service class (economy/business): ")?.as_str());
    let discount = parse_flag(&prompt("Discount? (true/false): ")?)?;
    let baggage = parse_flag(&prompt("Baggage? (true/false): ")?)?;

    let trip = TripRequest::new(distance, service_class, passengers)
        .with_discount(discount)
        .with_baggage(baggage);

    let cost = context.calculate(&trip);
    println!("Total cost: {}", cost);

    println!();
    println!("=== STOCK EXCHANGE SYSTEM ===");

    let mut exchange = StockExchange::new();

    let trader: Arc<dyn Observer> = Arc::new(Trader::new("Ali"));
    let robot: Arc<dyn Observer> = Arc::new(TradingRobot::new(100.0));
    let mobile: Arc<dyn Observer> = Arc::new(MobileApp);

    exchange.subscribe("AAPL", trader);
    exchange.subscribe("AAPL", robot);
    exchange.subscribe("GOOG", mobile);

    exchange.set_price("AAPL", 90.0);
    exchange.set_price("GOOG", 150.0);
    exchange.set_price("AAPL", 120.0);

    Ok(())
}
