//! Package comparison tests.

mod common;

use common::{catalog, dec, flat, manual_line};
use quoting_service::error::PricingError;
use quoting_service::models::{QualityTier, Quote, Recommendation, WorkCategory};
use quoting_service::services::Comparator;

fn quote_costing(amount: &str) -> Quote {
    let mut quote = Quote::new(flat("5"));
    quote.add_line(manual_line(WorkCategory::Plumbing, "1", amount));
    quote
}

#[test]
fn package_cheaper_than_items_is_recommended() {
    let comparator = Comparator::new(catalog());
    let quote = quote_costing("6875.00");

    let result = comparator
        .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    assert_eq!(result.current_price, dec("6875.00"));
    assert_eq!(result.package_price, dec("5500.00"));
    assert_eq!(result.savings, dec("1375.00"));
    assert_eq!(result.savings_percentage, dec("20.0"));
    assert_eq!(result.recommendation, Recommendation::Package);
}

#[test]
fn items_cheaper_than_package_keep_current() {
    let comparator = Comparator::new(catalog());
    let quote = quote_costing("4000");

    let result = comparator
        .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    assert_eq!(result.savings, dec("-1500.00"));
    assert_eq!(result.savings_percentage, dec("-37.5"));
    assert_eq!(result.recommendation, Recommendation::KeepCurrent);
}

#[test]
fn equal_prices_keep_current() {
    let comparator = Comparator::new(catalog());
    let quote = quote_costing("5500");

    let result = comparator
        .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    assert_eq!(result.savings, dec("0"));
    assert_eq!(result.recommendation, Recommendation::KeepCurrent);
}

#[test]
fn savings_sign_drives_recommendation() {
    let comparator = Comparator::new(catalog());

    for amount in ["0.01", "3499.99", "3500", "3500.01", "12000"] {
        let quote = quote_costing(amount);
        let result = comparator
            .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Basic, dec("4"))
            .unwrap();

        if result.savings > dec("0") {
            assert_eq!(result.recommendation, Recommendation::Package);
        } else {
            assert_eq!(result.recommendation, Recommendation::KeepCurrent);
        }
    }
}

#[test]
fn empty_quote_has_zero_percentage() {
    let comparator = Comparator::new(catalog());
    let quote = Quote::new(flat("5"));

    let result = comparator
        .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    assert_eq!(result.current_price, dec("0"));
    assert_eq!(result.savings_percentage, dec("0"));
    assert_eq!(result.recommendation, Recommendation::KeepCurrent);
}

#[test]
fn percentage_is_rounded_to_one_decimal() {
    let comparator = Comparator::new(catalog());
    let quote = quote_costing("6000");

    let result = comparator
        .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    // 500 / 6000 = 8.333...%
    assert_eq!(result.savings_percentage, dec("8.3"));
}

#[test]
fn comparison_does_not_touch_the_quote() {
    let comparator = Comparator::new(catalog());
    let quote = quote_costing("6000");
    let before = quote.clone();

    comparator
        .compare_items_vs_package(&quote, "full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    assert_eq!(quote, before);
}

#[test]
fn unknown_package_is_not_found() {
    let comparator = Comparator::new(catalog());
    let quote = quote_costing("6000");

    let err = comparator
        .compare_items_vs_package(&quote, "attic_conversion", QualityTier::Standard, dec("5"))
        .unwrap_err();

    assert!(matches!(err, PricingError::NotFound { kind: "Package", .. }));
}
