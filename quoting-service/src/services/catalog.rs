//! Catalog service: read-only price tables loaded once at startup.
//!
//! Resolves (category, code, tier) to a unit price and (package, tier, area)
//! to a package price. The catalog is immutable after loading and is shared
//! by reference (`Arc<Catalog>`) with whoever needs it.

use crate::error::{CatalogError, PricingError};
use crate::models::{
    CatalogDocument, CatalogEntry, PackageEntry, PackagePricing, QualityTier, WorkCategory,
};
use crate::money::{bounded_product, bounded_sum, round_money, MAX_LINE_AMOUNT};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Built-in catalog with the 2024 reference prices.
const DEFAULT_CATALOG: &str = include_str!("../../catalog/default.json");

/// Used when a package has neither a tier-specific nor a generic list.
const GENERIC_INCLUDED_ITEMS: [&str; 3] = [
    "All materials and labour required",
    "Transport of materials",
    "Final site cleaning",
];

/// Unit price resolved for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLookup {
    pub price: Decimal,
    /// Tier whose price was actually used.
    pub tier: QualityTier,
    /// True when the requested tier was missing and standard was used.
    pub fallback_used: bool,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: BTreeMap<(WorkCategory, String), CatalogEntry>,
    packages: BTreeMap<String, PackageEntry>,
}

impl Catalog {
    /// Load the catalog from `path`, or the built-in one when no path is given.
    #[instrument]
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::load_from_path(Path::new(path))?,
            None => Self::load_default()?,
        };

        info!(
            items = catalog.items.len(),
            packages = catalog.packages.len(),
            source = path.unwrap_or("built-in"),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    /// Build a catalog, rejecting duplicates and nonsensical prices.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut items = BTreeMap::new();
        for entry in document.items {
            validate_item(&entry)?;
            let key = (entry.category, entry.code.clone());
            if items.insert(key, entry.clone()).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate item {}/{}",
                    entry.category, entry.code
                )));
            }
        }

        let mut packages = BTreeMap::new();
        for entry in document.packages {
            validate_package(&entry)?;
            let code = entry.code.clone();
            if packages.insert(code.clone(), entry).is_some() {
                return Err(CatalogError::Invalid(format!("duplicate package {}", code)));
            }
        }

        Ok(Self { items, packages })
    }

    pub fn item(&self, category: WorkCategory, code: &str) -> Option<&CatalogEntry> {
        self.items.get(&(category, code.to_string()))
    }

    /// All items, in category order then code order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.items.values()
    }

    pub fn package(&self, code: &str) -> Option<&PackageEntry> {
        self.packages.get(code)
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageEntry> {
        self.packages.values()
    }

    /// Unit price of an item for a tier.
    ///
    /// Falls back to the standard tier when the requested one is absent; the
    /// fallback is reported in the result and logged, never silent.
    pub fn price_for_item(
        &self,
        category: WorkCategory,
        code: &str,
        quality: QualityTier,
    ) -> Result<PriceLookup, PricingError> {
        let entry = self
            .item(category, code)
            .ok_or_else(|| PricingError::item_not_found(category, code))?;

        if let Some(price) = entry.prices.get(&quality) {
            debug!(
                category = %category,
                code = %code,
                quality = %quality,
                price = %price,
                "Item price resolved"
            );
            return Ok(PriceLookup {
                price: *price,
                tier: quality,
                fallback_used: false,
            });
        }

        let price = entry
            .prices
            .get(&QualityTier::Standard)
            .ok_or_else(|| PricingError::tier_not_found(code, quality))?;

        warn!(
            category = %category,
            code = %code,
            requested = %quality,
            price = %price,
            "Quality tier missing for item, using standard price"
        );

        Ok(PriceLookup {
            price: *price,
            tier: QualityTier::Standard,
            fallback_used: true,
        })
    }

    /// Price of a package for a tier and area, rounded to cents.
    ///
    /// Per-area packages charge `rate * area`. Base-plus-overage packages charge
    /// the base price up to the reference area and the extra rate beyond it.
    pub fn price_for_package(
        &self,
        package: &str,
        quality: QualityTier,
        area: Decimal,
    ) -> Result<Decimal, PricingError> {
        if area <= Decimal::ZERO {
            return Err(PricingError::InvalidArea(area));
        }

        let entry = self
            .package(package)
            .ok_or_else(|| PricingError::package_not_found(package))?;

        let price = match &entry.pricing {
            PackagePricing::PerArea { rates } => {
                let rate = rates
                    .get(&quality)
                    .ok_or_else(|| PricingError::tier_not_found(package, quality))?;
                bounded_product(*rate, area)
            }
            PackagePricing::BasePlusOverage { tiers } => {
                let tier = tiers
                    .get(&quality)
                    .ok_or_else(|| PricingError::tier_not_found(package, quality))?;
                let overage = (area - tier.reference_area).max(Decimal::ZERO);
                bounded_product(overage, tier.extra_price_per_area)
                    .and_then(|extra| bounded_sum(tier.base_price, extra))
            }
        };
        let price = price
            .map(round_money)
            .ok_or_else(|| PricingError::AmountOverflow(format!("Package {}", package)))?;

        debug!(
            package = %package,
            quality = %quality,
            area = %area,
            shape = entry.pricing.as_str(),
            price = %price,
            "Package price resolved"
        );

        Ok(price)
    }

    /// Human-readable list of what a package covers for a tier.
    pub fn included_items(
        &self,
        package: &str,
        quality: QualityTier,
    ) -> Result<Vec<String>, PricingError> {
        let entry = self
            .package(package)
            .ok_or_else(|| PricingError::package_not_found(package))?;

        if let Some(items) = entry.included_by_tier.get(&quality).filter(|l| !l.is_empty()) {
            return Ok(items.clone());
        }
        if !entry.includes.is_empty() {
            return Ok(entry.includes.clone());
        }
        Ok(GENERIC_INCLUDED_ITEMS.iter().map(|s| s.to_string()).collect())
    }
}

fn validate_item(entry: &CatalogEntry) -> Result<(), CatalogError> {
    if entry.category == WorkCategory::Package {
        return Err(CatalogError::Invalid(format!(
            "item {} cannot use the package category",
            entry.code
        )));
    }
    if entry.prices.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "item {}/{} has no prices",
            entry.category, entry.code
        )));
    }
    if entry.prices.values().any(|p| *p < Decimal::ZERO) {
        return Err(CatalogError::Invalid(format!(
            "item {}/{} has a negative price",
            entry.category, entry.code
        )));
    }
    if entry.prices.values().any(|p| *p > MAX_LINE_AMOUNT) {
        return Err(CatalogError::Invalid(format!(
            "item {}/{} has a price above {}",
            entry.category, entry.code, MAX_LINE_AMOUNT
        )));
    }
    Ok(())
}

fn validate_package(entry: &PackageEntry) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::Invalid(format!("package {} {}", entry.code, reason));

    match &entry.pricing {
        PackagePricing::PerArea { rates } => {
            if rates.is_empty() {
                return Err(invalid("has no rates"));
            }
            if rates.values().any(|r| *r < Decimal::ZERO) {
                return Err(invalid("has a negative rate"));
            }
        }
        PackagePricing::BasePlusOverage { tiers } => {
            if tiers.is_empty() {
                return Err(invalid("has no tiers"));
            }
            for tier in tiers.values() {
                if tier.reference_area <= Decimal::ZERO {
                    return Err(invalid("has a non-positive reference area"));
                }
                if tier.base_price < Decimal::ZERO || tier.extra_price_per_area < Decimal::ZERO
                {
                    return Err(invalid("has a negative price"));
                }
            }
        }
    }
    Ok(())
}
