//! Minor-unit rounding integration tests for billing-core.

mod common;

use billing_core::error::BillingError;
use billing_core::models::RoundingMode;
use billing_core::services::format_minor_units;
use common::TestApp;
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn configured_mode_drives_rounding() {
    let half_up = TestApp::spawn(RoundingMode::HalfUp).app.money_rounding();
    let half_even = TestApp::spawn(RoundingMode::HalfEven).app.money_rounding();

    assert_eq!(half_up.round_to_minor_unit(Some(d("234.5"))).unwrap(), 235);
    assert_eq!(half_even.round_to_minor_unit(Some(d("234.5"))).unwrap(), 234);
    assert_eq!(half_even.round_to_minor_unit(Some(d("235.5"))).unwrap(), 236);
}

#[test]
fn absent_amount_is_rejected() {
    let money = TestApp::spawn(RoundingMode::HalfUp).app.money_rounding();

    let result = money.round_to_minor_unit(None);
    assert!(
        matches!(result, Err(BillingError::InvalidArgument(_))),
        "Expected InvalidArgument, got {:?}",
        result
    );
}

#[test]
fn overflow_is_reported_not_truncated() {
    let money = TestApp::spawn(RoundingMode::Down).app.money_rounding();

    let result = money.round_to_minor_unit(Some(d("10000000000000000000")));
    assert!(
        matches!(result, Err(BillingError::ArithmeticOverflow(_))),
        "Expected ArithmeticOverflow, got {:?}",
        result
    );
}

#[test]
fn price_to_minor_units_and_back() {
    let app = TestApp::spawn(RoundingMode::HalfUp);
    let money = app.app.money_rounding();

    let minor = money.to_minor_units(d("149.995")).unwrap();
    assert_eq!(minor, 15000);
    assert_eq!(format_minor_units(minor, money.currency()), "150.00 TRY");
}
