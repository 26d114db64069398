//! Quote orchestration: selections in, priced quote and read models out.

use crate::error::PricingError;
use crate::models::{
    ComparisonResult, LineSummary, ProjectParameters, QualityTier, Quote, QuoteRecord,
    QuoteRequest, QuoteSummary, QuoteTotals, QuoteValidation, ValidationWarning,
    DEFAULT_VALIDITY_DAYS,
};
use crate::services::{
    Catalog, Comparator, LineItemBuilder, TaxRatePolicy, TotalsCalculator, UniformTaxRate,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Pricing knobs, usually read from configuration.
#[derive(Debug, Clone)]
pub struct PricingSettings {
    pub markup_percentage: Decimal,
    pub rounding_percentage: Decimal,
    pub validity_days: u32,
    pub minimum_total: Decimal,
    pub tax_policy: Arc<dyn TaxRatePolicy>,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            markup_percentage: Decimal::from(15),
            rounding_percentage: Decimal::from(5),
            validity_days: DEFAULT_VALIDITY_DAYS,
            minimum_total: Decimal::from(600),
            tax_policy: Arc::new(UniformTaxRate {
                rate: Decimal::from(21),
            }),
        }
    }
}

/// A quote together with the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct PricedQuote {
    pub quote: Quote,
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Clone)]
pub struct QuoteService {
    catalog: Arc<Catalog>,
    builder: LineItemBuilder,
    totals: TotalsCalculator,
    comparator: Comparator,
    validity_days: u32,
    minimum_total: Decimal,
}

impl QuoteService {
    pub fn new(catalog: Arc<Catalog>, settings: PricingSettings) -> Self {
        Self {
            builder: LineItemBuilder::new(catalog.clone(), settings.markup_percentage),
            totals: TotalsCalculator::new(settings.rounding_percentage, settings.tax_policy),
            comparator: Comparator::new(catalog.clone()),
            catalog,
            validity_days: settings.validity_days,
            minimum_total: settings.minimum_total,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn builder(&self) -> &LineItemBuilder {
        &self.builder
    }

    pub fn calculator(&self) -> &TotalsCalculator {
        &self.totals
    }

    pub fn new_quote(&self, project: ProjectParameters) -> Quote {
        Quote::new(project).with_validity_days(self.validity_days)
    }

    /// Price every selection of `request` into a new quote.
    ///
    /// Item lines get the markup and then the condition factor; package lines
    /// get neither. Item lines come first, then packages, each in request order.
    #[instrument(skip(self, request), fields(items = request.items.len(), packages = request.packages.len()))]
    pub fn build_quote(&self, request: &QuoteRequest) -> Result<PricedQuote, PricingError> {
        let project = &request.project;
        let mut quote = self.new_quote(project.clone());
        let mut warnings = Vec::new();

        let mut item_lines = Vec::with_capacity(request.items.len());
        for selection in &request.items {
            let (line, warning) = self.builder.build_item_line_reporting(
                selection.category,
                &selection.code,
                selection.quantity,
                selection.quality.unwrap_or(project.quality),
                selection.apply_markup,
            )?;
            item_lines.push(line);
            warnings.extend(warning);
        }
        quote.add_lines(
            self.builder
                .apply_condition_factor(&item_lines, project.condition)?,
        );

        for selection in &request.packages {
            let lines = self.builder.build_package_lines(
                &selection.code,
                selection.quality.unwrap_or(project.quality),
                selection.area.unwrap_or(project.floor_area),
            )?;
            quote.add_lines(lines);
        }

        warnings.extend(quote.set_discount_percentage(request.discount_percentage));

        info!(
            quote_id = %quote.quote_id(),
            lines = quote.lines().len(),
            subtotal = %quote.subtotal(),
            warnings = warnings.len(),
            "Quote built"
        );

        Ok(PricedQuote { quote, warnings })
    }

    /// One package covering the whole property at the project tier.
    pub fn quick_quote(
        &self,
        project: ProjectParameters,
        package_code: &str,
    ) -> Result<Quote, PricingError> {
        let lines =
            self.builder
                .build_package_lines(package_code, project.quality, project.floor_area)?;
        let mut quote = self.new_quote(project);
        quote.add_lines(lines);

        info!(
            quote_id = %quote.quote_id(),
            package = %package_code,
            subtotal = %quote.subtotal(),
            "Quick quote built"
        );

        Ok(quote)
    }

    pub fn totals(&self, quote: &Quote) -> QuoteTotals {
        self.totals.compute(quote)
    }

    pub fn summarize(&self, quote: &Quote) -> QuoteSummary {
        QuoteSummary {
            quote_id: quote.quote_id(),
            quote_number: quote.quote_number(),
            created_utc: quote.created_utc(),
            valid_until: quote.valid_until(),
            lines: quote.lines().iter().map(LineSummary::from).collect(),
            breakdown: quote.breakdown_by_category(),
            totals: self.totals(quote),
        }
    }

    /// Business-rule check: a quote needs at least one line, and totals under
    /// the configured minimum are flagged.
    pub fn validate_quote(&self, quote: &Quote) -> QuoteValidation {
        let mut validation = QuoteValidation::default();

        if quote.is_empty() {
            validation.errors.push("Quote has no lines".to_string());
        }

        let totals = self.totals(quote);
        validation
            .warnings
            .extend(totals.warnings.iter().map(ToString::to_string));
        if !quote.is_empty() && totals.total < self.minimum_total {
            validation.warnings.push(format!(
                "Quote total {} is below the minimum of {}",
                totals.total, self.minimum_total
            ));
        }

        validation.valid = validation.errors.is_empty();
        validation
    }

    pub fn compare_with_package(
        &self,
        quote: &Quote,
        package_code: &str,
        quality: QualityTier,
        area: Decimal,
    ) -> Result<ComparisonResult, PricingError> {
        self.comparator
            .compare_items_vs_package(quote, package_code, quality, area)
    }

    /// Snapshot for persistence, stamped with the current totals.
    pub fn to_record(&self, quote: &Quote) -> QuoteRecord {
        quote.to_record(&self.totals(quote))
    }

    /// Rebuild a persisted quote, checking the recomputed total to the cent.
    ///
    /// The total is recomputed with the rounding and tax percentages stored in
    /// the record, so a later pricing change does not invalidate saved quotes.
    /// Only a record whose contents no longer add up fails.
    #[instrument(skip(self, record), fields(quote_id = %record.quote_id, tax_policy = %record.tax_policy))]
    pub fn restore_quote(&self, record: QuoteRecord) -> Result<PricedQuote, PricingError> {
        let persisted = record.total;
        let calculator = TotalsCalculator::new(
            record.rounding_percentage,
            Arc::new(UniformTaxRate {
                rate: record.tax_percentage,
            }),
        );
        let (quote, warning) = Quote::from_record(record);
        let recomputed = calculator.compute(&quote).total;

        if recomputed != persisted {
            warn!(
                quote_id = %quote.quote_id(),
                persisted = %persisted,
                recomputed = %recomputed,
                "Restored quote total does not match"
            );
            return Err(PricingError::RecordMismatch {
                persisted,
                recomputed,
            });
        }

        Ok(PricedQuote {
            quote,
            warnings: warning.into_iter().collect(),
        })
    }
}
