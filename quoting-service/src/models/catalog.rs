//! Catalog document model: item and package price tables.

use super::{QualityTier, WorkCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized catalog as shipped in `catalog/default.json` or an external file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub items: Vec<CatalogEntry>,
    pub packages: Vec<PackageEntry>,
}

/// Individually priced work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: WorkCategory,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub prices: BTreeMap<QualityTier, Decimal>,
}

/// Bundled set of work sold at a single price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub code: String,
    pub name: String,
    pub description: String,
    /// Generic list of what the package covers.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Tier-specific lists, preferred over `includes` when present.
    #[serde(default)]
    pub included_by_tier: BTreeMap<QualityTier, Vec<String>>,
    pub pricing: PackagePricing,
}

/// The two package pricing shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum PackagePricing {
    /// price = rate[tier] * area
    PerArea { rates: BTreeMap<QualityTier, Decimal> },
    /// price = base[tier] + max(0, area - reference_area) * extra[tier]
    BasePlusOverage {
        tiers: BTreeMap<QualityTier, OverageTier>,
    },
}

impl PackagePricing {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagePricing::PerArea { .. } => "per_area",
            PackagePricing::BasePlusOverage { .. } => "base_plus_overage",
        }
    }

    pub fn tiers(&self) -> Vec<QualityTier> {
        match self {
            PackagePricing::PerArea { rates } => rates.keys().copied().collect(),
            PackagePricing::BasePlusOverage { tiers } => tiers.keys().copied().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverageTier {
    pub base_price: Decimal,
    pub reference_area: Decimal,
    pub extra_price_per_area: Decimal,
}
