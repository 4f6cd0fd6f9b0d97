use super::*;

#[test]
fn symbol_displays_its_ticker() {
    let symbol = Symbol::new("AAPL");
    assert_eq!(symbol.as_str(), "AAPL");
    assert_eq!(symbol.to_string(), "AAPL");
    assert_eq!(Symbol::from("AAPL"), symbol);
    assert_eq!(Symbol::from("AAPL".to_string()), symbol);
}

#[test]
fn quotes_keep_the_latest_announcement() {
    let mut quotes = Quotes::default();
    let aapl = Symbol::new("AAPL");

    quotes.insert(aapl.clone(), Quote::new(aapl.clone(), 90.0, 1));
    quotes.insert(aapl.clone(), Quote::new(aapl.clone(), 120.0, 2));

    let quote = quotes.get(&aapl).unwrap();
    assert_eq!(quote.symbol(), &aapl);
    assert_eq!(quote.price(), 120.0);
    assert_eq!(quote.timestamp(), 2);
    assert_eq!(quotes.iter().count(), 1);
}

#[test]
fn unknown_symbol_has_no_quote() {
    let quotes = Quotes::default();
    assert!(!quotes.contains_key(&Symbol::new("GOOG")));
    assert!(quotes.get(&Symbol::new("GOOG")).is_none());
}
