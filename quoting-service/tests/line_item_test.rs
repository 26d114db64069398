//! Line-item builder tests.

mod common;

use common::{builder, catalog, dec, manual_line};
use quoting_service::error::PricingError;
use quoting_service::models::{
    CreateLineItem, LineItem, PropertyCondition, QualityTier, ValidationWarning, WorkCategory,
};
use quoting_service::money::round_money;
use quoting_service::services::{LineItemBuilder, PACKAGE_UNIT};
use service_core::error::AppError;

#[test]
fn tiling_line_applies_markup_and_rounds_to_cents() {
    let line = builder()
        .build_item_line(
            WorkCategory::Masonry,
            "wall_tiling",
            dec("25"),
            QualityTier::Standard,
            true,
        )
        .unwrap();

    // 47.50 * 1.15 = 54.625
    assert_eq!(line.unit_price(), dec("54.63"));
    assert_eq!(line.subtotal(), dec("1365.75"));
    assert_eq!(line.unit(), "m²");
    assert!(!line.is_package());
    assert!(line.included_items().is_empty());
}

#[test]
fn markup_can_be_skipped() {
    let line = builder()
        .build_item_line(
            WorkCategory::Electrical,
            "light_point",
            dec("10"),
            QualityTier::Premium,
            false,
        )
        .unwrap();

    assert_eq!(line.unit_price(), dec("100"));
    assert_eq!(line.subtotal(), dec("1000.00"));
}

#[test]
fn item_unit_price_is_catalog_price_with_markup() {
    let catalog = catalog();
    let builder = LineItemBuilder::new(catalog.clone(), dec("15"));

    for entry in catalog.items() {
        for (tier, price) in &entry.prices {
            let line = builder
                .build_item_line(entry.category, &entry.code, dec("1"), *tier, true)
                .unwrap();
            assert_eq!(line.unit_price(), round_money(*price * dec("1.15")));
        }
    }
}

#[test]
fn zero_or_negative_quantity_is_rejected_before_lookup() {
    let builder = builder();

    let err = builder
        .build_item_line(
            WorkCategory::Masonry,
            "wall_tiling",
            dec("0"),
            QualityTier::Standard,
            true,
        )
        .unwrap_err();
    assert_eq!(err, PricingError::InvalidQuantity(dec("0")));

    // Unknown code, but the quantity check comes first
    let err = builder
        .build_item_line(
            WorkCategory::Masonry,
            "no_such_item",
            dec("-2"),
            QualityTier::Standard,
            true,
        )
        .unwrap_err();
    assert_eq!(err, PricingError::InvalidQuantity(dec("-2")));
}

#[test]
fn tiny_quantity_is_computable() {
    let line = builder()
        .build_item_line(
            WorkCategory::Masonry,
            "wall_tiling",
            dec("0.0001"),
            QualityTier::Standard,
            true,
        )
        .unwrap();

    assert_eq!(line.quantity(), dec("0.0001"));
    assert_eq!(line.subtotal(), dec("0.01"));
}

#[test]
fn tier_fallback_is_reported() {
    let (line, warning) = builder()
        .build_item_line_reporting(
            WorkCategory::Masonry,
            "demolition",
            dec("10"),
            QualityTier::Basic,
            true,
        )
        .unwrap();

    assert_eq!(line.unit_price(), dec("20.13")); // 17.50 * 1.15 = 20.125
    assert!(line.notes().is_some());
    assert_eq!(
        warning,
        Some(ValidationWarning::QualityFallback {
            category: WorkCategory::Masonry,
            code: "demolition".to_string(),
            requested: QualityTier::Basic,
        })
    );
}

#[test]
fn unknown_item_is_not_found() {
    let err = builder()
        .build_item_line(
            WorkCategory::Kitchen,
            "wine_cellar",
            dec("1"),
            QualityTier::Standard,
            true,
        )
        .unwrap_err();

    assert!(matches!(err, PricingError::NotFound { .. }));
}

#[test]
fn bathroom_package_is_one_line_without_markup() {
    let builder = builder();

    let lines = builder
        .build_package_lines("full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();

    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.is_package());
    assert_eq!(line.category(), WorkCategory::Package);
    assert_eq!(line.unit(), PACKAGE_UNIT);
    assert_eq!(line.quantity(), dec("1"));
    assert_eq!(line.unit_price(), dec("5500.00"));
    assert_eq!(line.subtotal(), dec("5500.00"));
    assert_eq!(line.included_items().len(), 12);
}

#[test]
fn package_price_equals_catalog_price_exactly() {
    let catalog = catalog();
    let builder = LineItemBuilder::new(catalog.clone(), dec("15"));

    for package in catalog.packages() {
        for tier in package.pricing.tiers() {
            let area = dec("23.7");
            let lines = builder.build_package_lines(&package.code, tier, area).unwrap();
            let expected = catalog.price_for_package(&package.code, tier, area).unwrap();
            assert_eq!(lines[0].unit_price(), expected);
        }
    }
}

#[test]
fn package_with_bad_area_fails() {
    let err = builder()
        .build_package_lines("whole_home_renovation", QualityTier::Standard, dec("-5"))
        .unwrap_err();

    assert_eq!(err, PricingError::InvalidArea(dec("-5")));
}

#[test]
fn condition_factor_scales_items_but_not_packages() {
    let builder = builder();
    let mut lines = vec![manual_line(WorkCategory::Masonry, "2", "100.00")];
    lines.extend(
        builder
            .build_package_lines("full_bathroom", QualityTier::Basic, dec("5"))
            .unwrap(),
    );

    let old = builder
        .apply_condition_factor(&lines, PropertyCondition::Old)
        .unwrap();
    assert_eq!(old[0].unit_price(), dec("110.00"));
    assert_eq!(old[1].unit_price(), dec("3500.00"));

    let new = builder
        .apply_condition_factor(&lines, PropertyCondition::New)
        .unwrap();
    assert_eq!(new[0].unit_price(), dec("95.00"));

    let normal = builder
        .apply_condition_factor(&lines, PropertyCondition::Normal)
        .unwrap();
    assert_eq!(normal, lines);
}

#[test]
fn condition_factor_result_is_rounded() {
    let lines = vec![manual_line(WorkCategory::Plumbing, "1", "54.63")];

    let adjusted = builder()
        .apply_condition_factor(&lines, PropertyCondition::Derelict)
        .unwrap();

    // 54.63 * 1.25 = 68.2875
    assert_eq!(adjusted[0].unit_price(), dec("68.29"));
}

#[test]
fn line_item_rejects_invalid_input() {
    let base = CreateLineItem {
        category: WorkCategory::Masonry,
        code: "painting".to_string(),
        description: "Painting".to_string(),
        unit: "m²".to_string(),
        quantity: dec("1"),
        unit_price: dec("10"),
        quality: QualityTier::Standard,
        is_package: false,
        included_items: vec!["ignored".to_string()],
        notes: None,
    };

    let line = LineItem::new(base.clone()).unwrap();
    assert!(line.included_items().is_empty());

    let err = LineItem::new(CreateLineItem {
        unit_price: dec("-0.01"),
        ..base.clone()
    })
    .unwrap_err();
    assert_eq!(err, PricingError::InvalidUnitPrice(dec("-0.01")));

    let err = LineItem::new(CreateLineItem {
        quantity: dec("0"),
        ..base
    })
    .unwrap_err();
    assert_eq!(err, PricingError::InvalidQuantity(dec("0")));
}

#[test]
fn subtotal_is_always_rounded_product() {
    let cases = [("3", "19.99"), ("2.5", "33.33"), ("0.333", "10"), ("7", "0")];

    for (quantity, price) in cases {
        let line = manual_line(WorkCategory::Carpentry, quantity, price);
        assert_eq!(line.subtotal(), round_money(dec(quantity) * dec(price)));
    }
}

#[test]
fn oversized_quantity_is_an_amount_error_not_a_panic() {
    let err = builder()
        .build_item_line(
            WorkCategory::Masonry,
            "wall_tiling",
            dec("79228162514264337593543950"),
            QualityTier::Standard,
            true,
        )
        .unwrap_err();

    assert!(matches!(err, PricingError::AmountOverflow(_)));
    assert_eq!(err.error_type(), "amount_overflow");
    assert_eq!(
        AppError::from(err).status_code(),
        axum::http::StatusCode::BAD_REQUEST
    );
}

#[test]
fn line_amount_is_capped_at_construction() {
    let input = CreateLineItem {
        category: WorkCategory::Masonry,
        code: "manual".to_string(),
        description: "Manual line".to_string(),
        unit: "ud".to_string(),
        quantity: dec("1000000"),
        unit_price: dec("1000000"),
        quality: QualityTier::Standard,
        is_package: false,
        included_items: Vec::new(),
        notes: None,
    };
    let at_cap = LineItem::new(input.clone()).unwrap();
    assert_eq!(at_cap.subtotal(), dec("1000000000000.00"));

    let over = LineItem::new(CreateLineItem {
        unit_price: dec("1000000.01"),
        ..input
    });
    assert!(matches!(over, Err(PricingError::AmountOverflow(_))));
}
