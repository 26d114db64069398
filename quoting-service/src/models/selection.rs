//! Selections handed to the pricing core by the form layer.

use super::{ProjectParameters, QualityTier, WorkCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An individual work item to price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSelection {
    pub category: WorkCategory,
    pub code: String,
    pub quantity: Decimal,
    /// Falls back to the project tier when absent.
    #[serde(default)]
    pub quality: Option<QualityTier>,
    #[serde(default = "default_apply_markup")]
    pub apply_markup: bool,
}

/// A package to price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSelection {
    pub code: String,
    #[serde(default)]
    pub quality: Option<QualityTier>,
    /// Falls back to the project floor area when absent.
    #[serde(default)]
    pub area: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub project: ProjectParameters,
    #[serde(default)]
    pub items: Vec<ItemSelection>,
    #[serde(default)]
    pub packages: Vec<PackageSelection>,
    #[serde(default)]
    pub discount_percentage: Decimal,
}

fn default_apply_markup() -> bool {
    true
}

impl ItemSelection {
    pub fn new(category: WorkCategory, code: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            category,
            code: code.into(),
            quantity,
            quality: None,
            apply_markup: true,
        }
    }

    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn without_markup(mut self) -> Self {
        self.apply_markup = false;
        self
    }
}

impl PackageSelection {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            quality: None,
            area: None,
        }
    }

    pub fn with_quality(mut self, quality: QualityTier) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_area(mut self, area: Decimal) -> Self {
        self.area = Some(area);
        self
    }
}

impl QuoteRequest {
    pub fn new(project: ProjectParameters) -> Self {
        Self {
            project,
            items: Vec::new(),
            packages: Vec::new(),
            discount_percentage: Decimal::ZERO,
        }
    }

    pub fn with_item(mut self, item: ItemSelection) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_package(mut self, package: PackageSelection) -> Self {
        self.packages.push(package);
        self
    }

    pub fn with_discount(mut self, discount_percentage: Decimal) -> Self {
        self.discount_percentage = discount_percentage;
        self
    }
}
