use crate::models::{CatalogEntry, PackageEntry, QualityTier, WorkCategory};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct CatalogItemResponse {
    pub category: WorkCategory,
    pub category_name: &'static str,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub prices: BTreeMap<QualityTier, Decimal>,
}

impl From<&CatalogEntry> for CatalogItemResponse {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            category: entry.category,
            category_name: entry.category.display_name(),
            code: entry.code.clone(),
            description: entry.description.clone(),
            unit: entry.unit.clone(),
            prices: entry.prices.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub code: String,
    pub name: String,
    pub description: String,
    pub pricing_shape: &'static str,
    pub tiers: Vec<QualityTier>,
}

impl From<&PackageEntry> for PackageResponse {
    fn from(entry: &PackageEntry) -> Self {
        Self {
            code: entry.code.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            pricing_shape: entry.pricing.as_str(),
            tiers: entry.pricing.tiers(),
        }
    }
}
