//! Line-item builder: turns catalog selections into priced lines.

use crate::error::PricingError;
use crate::models::{
    CreateLineItem, LineItem, PropertyCondition, QualityTier, ValidationWarning, WorkCategory,
};
use crate::money::{round_money, uplift_factor};
use crate::services::Catalog;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

/// Unit shown on package lines.
pub const PACKAGE_UNIT: &str = "set";

/// Builds priced lines from catalog data. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct LineItemBuilder {
    catalog: Arc<Catalog>,
    markup_percentage: Decimal,
}

impl LineItemBuilder {
    pub fn new(catalog: Arc<Catalog>, markup_percentage: Decimal) -> Self {
        Self {
            catalog,
            markup_percentage,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn markup_percentage(&self) -> Decimal {
        self.markup_percentage
    }

    /// Price an individual work item.
    ///
    /// The markup, when applied, multiplies the catalog price and the result
    /// is rounded to cents immediately.
    pub fn build_item_line(
        &self,
        category: WorkCategory,
        code: &str,
        quantity: Decimal,
        quality: QualityTier,
        apply_markup: bool,
    ) -> Result<LineItem, PricingError> {
        self.build_item_line_reporting(category, code, quantity, quality, apply_markup)
            .map(|(line, _)| line)
    }

    /// Same as [`build_item_line`](Self::build_item_line), also returning the
    /// tier-fallback warning when the standard price had to be used.
    pub fn build_item_line_reporting(
        &self,
        category: WorkCategory,
        code: &str,
        quantity: Decimal,
        quality: QualityTier,
        apply_markup: bool,
    ) -> Result<(LineItem, Option<ValidationWarning>), PricingError> {
        if quantity <= Decimal::ZERO {
            return Err(PricingError::InvalidQuantity(quantity));
        }

        let lookup = self.catalog.price_for_item(category, code, quality)?;
        let entry = self
            .catalog
            .item(category, code)
            .ok_or_else(|| PricingError::item_not_found(category, code))?;

        let unit_price = if apply_markup {
            round_money(lookup.price * uplift_factor(self.markup_percentage))
        } else {
            round_money(lookup.price)
        };

        let (notes, warning) = if lookup.fallback_used {
            (
                Some(format!("{} price not available; standard price applied", quality.display_name())),
                Some(ValidationWarning::QualityFallback {
                    category,
                    code: code.to_string(),
                    requested: quality,
                }),
            )
        } else {
            (None, None)
        };

        let line = LineItem::new(CreateLineItem {
            category,
            code: entry.code.clone(),
            description: entry.description.clone(),
            unit: entry.unit.clone(),
            quantity,
            unit_price,
            quality,
            is_package: false,
            included_items: Vec::new(),
            notes,
        })?;

        debug!(
            code = %code,
            quantity = %quantity,
            unit_price = %unit_price,
            markup = apply_markup,
            "Item line built"
        );

        Ok((line, warning))
    }

    /// Price a package as a single synthetic line. Packages never carry markup.
    pub fn build_package_lines(
        &self,
        package: &str,
        quality: QualityTier,
        area: Decimal,
    ) -> Result<Vec<LineItem>, PricingError> {
        let price = self.catalog.price_for_package(package, quality, area)?;
        let included_items = self.catalog.included_items(package, quality)?;
        let entry = self
            .catalog
            .package(package)
            .ok_or_else(|| PricingError::package_not_found(package))?;

        let line = LineItem::new(CreateLineItem {
            category: WorkCategory::Package,
            code: entry.code.clone(),
            description: entry.name.clone(),
            unit: PACKAGE_UNIT.to_string(),
            quantity: Decimal::ONE,
            unit_price: price,
            quality,
            is_package: true,
            included_items,
            notes: Some(format!(
                "Complete package for {} m² - {} quality",
                area.normalize(),
                quality.display_name()
            )),
        })?;

        info!(
            package = %package,
            quality = %quality,
            area = %area,
            price = %price,
            included = line.included_items().len(),
            "Package line built"
        );

        Ok(vec![line])
    }

    /// Scale individually priced lines by the property-condition factor.
    ///
    /// Package lines are returned unchanged: their price is fixed by the
    /// catalog.
    pub fn apply_condition_factor(
        &self,
        lines: &[LineItem],
        condition: PropertyCondition,
    ) -> Result<Vec<LineItem>, PricingError> {
        let factor = condition.factor();
        if factor == Decimal::ONE {
            return Ok(lines.to_vec());
        }

        let adjusted = lines
            .iter()
            .map(|line| {
                if line.is_package() {
                    Ok(line.clone())
                } else {
                    line.with_unit_price(round_money(line.unit_price() * factor))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            condition = condition.as_str(),
            factor = %factor,
            lines = adjusted.len(),
            "Condition factor applied"
        );

        Ok(adjusted)
    }
}
