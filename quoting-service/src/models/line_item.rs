//! Line item model for quoting-service.

use super::{QualityTier, WorkCategory};
use crate::error::PricingError;
use crate::money::{bounded_product, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced row of a quote: an individual work item or a package.
///
/// Immutable once built. The subtotal is always derived from quantity and
/// unit price; replacing a line means building a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CreateLineItem", into = "CreateLineItem")]
pub struct LineItem {
    category: WorkCategory,
    code: String,
    description: String,
    unit: String,
    quantity: Decimal,
    unit_price: Decimal,
    quality: QualityTier,
    is_package: bool,
    included_items: Vec<String>,
    notes: Option<String>,
}

/// Input for creating a line item. Also the persisted shape of a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLineItem {
    pub category: WorkCategory,
    pub code: String,
    pub description: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub quality: QualityTier,
    #[serde(default)]
    pub is_package: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LineItem {
    /// Build a line, rejecting non-positive quantities, negative prices and
    /// lines whose amount would exceed `MAX_LINE_AMOUNT`.
    ///
    /// [`MAX_LINE_AMOUNT`]: crate::money::MAX_LINE_AMOUNT
    pub fn new(input: CreateLineItem) -> Result<Self, PricingError> {
        if input.quantity <= Decimal::ZERO {
            return Err(PricingError::InvalidQuantity(input.quantity));
        }
        if input.unit_price < Decimal::ZERO {
            return Err(PricingError::InvalidUnitPrice(input.unit_price));
        }
        if bounded_product(input.quantity, input.unit_price).is_none() {
            return Err(PricingError::AmountOverflow(format!(
                "Line {}/{}",
                input.category, input.code
            )));
        }

        // Included items only make sense on packages.
        let included_items = if input.is_package {
            input.included_items
        } else {
            Vec::new()
        };

        Ok(Self {
            category: input.category,
            code: input.code,
            description: input.description,
            unit: input.unit,
            quantity: input.quantity,
            unit_price: input.unit_price,
            quality: input.quality,
            is_package: input.is_package,
            included_items,
            notes: input.notes,
        })
    }

    /// A copy of this line at a different unit price.
    pub fn with_unit_price(&self, unit_price: Decimal) -> Result<Self, PricingError> {
        let mut input = CreateLineItem::from(self.clone());
        input.unit_price = unit_price;
        Self::new(input)
    }

    pub fn category(&self) -> WorkCategory {
        self.category
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quality(&self) -> QualityTier {
        self.quality
    }

    pub fn is_package(&self) -> bool {
        self.is_package
    }

    pub fn included_items(&self) -> &[String] {
        &self.included_items
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// quantity * unit price, rounded to cents. Bounded by construction.
    pub fn subtotal(&self) -> Decimal {
        round_money(self.quantity * self.unit_price)
    }
}

impl TryFrom<CreateLineItem> for LineItem {
    type Error = PricingError;

    fn try_from(input: CreateLineItem) -> Result<Self, Self::Error> {
        LineItem::new(input)
    }
}

impl From<LineItem> for CreateLineItem {
    fn from(line: LineItem) -> Self {
        Self {
            category: line.category,
            code: line.code,
            description: line.description,
            unit: line.unit,
            quantity: line.quantity,
            unit_price: line.unit_price,
            quality: line.quality,
            is_package: line.is_package,
            included_items: line.included_items,
            notes: line.notes,
        }
    }
}
