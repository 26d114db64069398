//! Catalog lookup and loading tests.

mod common;

use common::{catalog, dec};
use quoting_service::error::{CatalogError, PricingError};
use quoting_service::models::{QualityTier, WorkCategory};
use quoting_service::services::Catalog;
use std::io::Write;

#[test]
fn item_price_for_requested_tier() {
    let catalog = catalog();

    let lookup = catalog
        .price_for_item(WorkCategory::Masonry, "wall_tiling", QualityTier::Standard)
        .unwrap();

    assert_eq!(lookup.price, dec("47.50"));
    assert_eq!(lookup.tier, QualityTier::Standard);
    assert!(!lookup.fallback_used);

    let premium = catalog
        .price_for_item(WorkCategory::Plumbing, "shower_tray", QualityTier::Premium)
        .unwrap();
    assert_eq!(premium.price, dec("1600"));
}

#[test]
fn missing_tier_falls_back_to_standard_and_says_so() {
    let catalog = catalog();

    let lookup = catalog
        .price_for_item(WorkCategory::Masonry, "demolition", QualityTier::Premium)
        .unwrap();

    assert_eq!(lookup.price, dec("17.50"));
    assert_eq!(lookup.tier, QualityTier::Standard);
    assert!(lookup.fallback_used);
}

#[test]
fn unknown_item_is_not_found() {
    let catalog = catalog();

    let err = catalog
        .price_for_item(WorkCategory::Masonry, "marble_cladding", QualityTier::Standard)
        .unwrap_err();
    assert!(matches!(err, PricingError::NotFound { kind: "Item", .. }));

    // Right code, wrong category
    let err = catalog
        .price_for_item(WorkCategory::Electrical, "wall_tiling", QualityTier::Standard)
        .unwrap_err();
    assert!(matches!(err, PricingError::NotFound { .. }));
}

#[test]
fn base_plus_overage_within_reference_area_is_base_price() {
    let catalog = catalog();

    let price = catalog
        .price_for_package("full_bathroom", QualityTier::Standard, dec("5"))
        .unwrap();
    assert_eq!(price, dec("5500.00"));

    let smaller = catalog
        .price_for_package("full_bathroom", QualityTier::Standard, dec("3.5"))
        .unwrap();
    assert_eq!(smaller, dec("5500.00"));
}

#[test]
fn base_plus_overage_charges_extra_area() {
    let catalog = catalog();

    let price = catalog
        .price_for_package("full_bathroom", QualityTier::Standard, dec("8"))
        .unwrap();
    assert_eq!(price, dec("7000.00"));

    let kitchen = catalog
        .price_for_package("full_kitchen", QualityTier::Premium, dec("10.5"))
        .unwrap();
    // 18000 + 2.5 * 900
    assert_eq!(kitchen, dec("20250.00"));
}

#[test]
fn per_area_package_scales_with_area() {
    let catalog = catalog();

    let price = catalog
        .price_for_package("whole_home_renovation", QualityTier::Standard, dec("80"))
        .unwrap();
    assert_eq!(price, dec("76000.00"));

    let office = catalog
        .price_for_package("whole_premises_renovation", QualityTier::Basic, dec("120.5"))
        .unwrap();
    assert_eq!(office, dec("54225.00"));
}

#[test]
fn package_errors() {
    let catalog = catalog();

    let err = catalog
        .price_for_package("sauna", QualityTier::Standard, dec("10"))
        .unwrap_err();
    assert!(matches!(err, PricingError::NotFound { kind: "Package", .. }));

    let err = catalog
        .price_for_package("full_bathroom", QualityTier::Standard, dec("0"))
        .unwrap_err();
    assert_eq!(err, PricingError::InvalidArea(dec("0")));
}

#[test]
fn oversized_package_area_is_an_amount_error() {
    let catalog = catalog();
    let area = dec("79228162514264337593543950");

    for package in catalog.packages() {
        let err = catalog
            .price_for_package(&package.code, QualityTier::Standard, area)
            .unwrap_err();
        assert!(matches!(err, PricingError::AmountOverflow(_)), "{}", package.code);
    }
}

#[test]
fn included_items_prefer_tier_specific_list() {
    let catalog = catalog();

    let standard = catalog
        .included_items("full_bathroom", QualityTier::Standard)
        .unwrap();
    let basic = catalog.included_items("full_bathroom", QualityTier::Basic).unwrap();
    let generic = &catalog.package("full_bathroom").unwrap().includes;

    assert_eq!(standard.len(), 12);
    assert_eq!(&basic, generic);
    assert_ne!(standard, basic);
}

#[test]
fn included_items_fall_back_to_fixed_list() {
    let raw = r#"{
        "items": [],
        "packages": [{
            "code": "bare",
            "name": "Bare package",
            "description": "No inclusion lists at all",
            "pricing": { "shape": "per_area", "rates": { "standard": "100" } }
        }]
    }"#;
    let catalog = Catalog::from_json(raw).unwrap();

    let items = catalog.included_items("bare", QualityTier::Premium).unwrap();
    assert_eq!(
        items,
        vec![
            "All materials and labour required",
            "Transport of materials",
            "Final site cleaning"
        ]
    );
}

#[test]
fn items_are_listed_in_category_order() {
    let catalog = catalog();

    let categories: Vec<WorkCategory> = catalog.items().map(|e| e.category).collect();
    let mut sorted = categories.clone();
    sorted.sort();

    assert_eq!(categories, sorted);
    assert_eq!(catalog.items().count(), 31);
    assert_eq!(catalog.packages().count(), 4);
}

#[test]
fn duplicate_items_are_rejected() {
    let raw = r#"{
        "items": [
            { "category": "masonry", "code": "painting", "description": "a", "unit": "m²", "prices": { "standard": "10" } },
            { "category": "masonry", "code": "painting", "description": "b", "unit": "m²", "prices": { "standard": "12" } }
        ],
        "packages": []
    }"#;

    let err = Catalog::from_json(raw).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[test]
fn negative_prices_and_bad_reference_areas_are_rejected() {
    let negative = r#"{
        "items": [
            { "category": "masonry", "code": "painting", "description": "a", "unit": "m²", "prices": { "standard": "-1" } }
        ],
        "packages": []
    }"#;
    assert!(matches!(
        Catalog::from_json(negative),
        Err(CatalogError::Invalid(_))
    ));

    let zero_reference = r#"{
        "items": [],
        "packages": [{
            "code": "bad", "name": "Bad", "description": "x",
            "pricing": { "shape": "base_plus_overage", "tiers": {
                "standard": { "base_price": "100", "reference_area": "0", "extra_price_per_area": "10" }
            } }
        }]
    }"#;
    assert!(matches!(
        Catalog::from_json(zero_reference),
        Err(CatalogError::Invalid(_))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn loads_external_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "items": [
                {{ "category": "carpentry", "code": "skirting", "description": "Skirting board", "unit": "ml", "prices": {{ "standard": "12.40" }} }}
            ],
            "packages": []
        }}"#
    )
    .unwrap();

    let catalog = Catalog::load(file.path().to_str()).unwrap();

    let lookup = catalog
        .price_for_item(WorkCategory::Carpentry, "skirting", QualityTier::Standard)
        .unwrap();
    assert_eq!(lookup.price, dec("12.40"));
    assert!(catalog.item(WorkCategory::Masonry, "wall_tiling").is_none());
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let err = Catalog::load(Some("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
