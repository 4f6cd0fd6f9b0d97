use super::*;

#[test]
fn service_class_input_is_case_insensitive() {
    assert_eq!(ServiceClass::from("business"), ServiceClass::Business);
    assert_eq!(ServiceClass::from("Business"), ServiceClass::Business);
    assert_eq!(ServiceClass::from("BUSINESS"), ServiceClass::Business);
}

#[test]
fn unknown_service_class_quotes_as_economy() {
    assert_eq!(ServiceClass::from("economy"), ServiceClass::Economy);
    assert_eq!(ServiceClass::from("first"), ServiceClass::Economy);
    assert_eq!(ServiceClass::from(""), ServiceClass::Economy);
}

#[test]
fn trip_extras_default_off() {
    let trip = TripRequest::new(120.0, ServiceClass::Economy, 2);
    assert!(!trip.has_discount());
    assert!(!trip.has_baggage());
    assert_eq!(trip.passengers(), 2);
}

#[test]
fn trip_builders_set_extras() {
    let trip = TripRequest::new(120.0, ServiceClass::Business, 1)
        .with_discount(true)
        .with_baggage(true);
    assert!(trip.has_discount());
    assert!(trip.has_baggage());
    assert_eq!(trip.service_class(), ServiceClass::Business);
}
