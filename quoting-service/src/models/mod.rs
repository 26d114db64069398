//! Domain models for quoting-service.

mod catalog;
mod category;
mod estimate;
mod line_item;
mod project;
mod quote;
mod selection;
mod summary;
mod totals;
mod warning;

pub use catalog::{CatalogDocument, CatalogEntry, OverageTier, PackageEntry, PackagePricing};
pub use category::{QualityTier, WorkCategory};
pub use estimate::{EstimateConfidence, QuantityEstimate};
pub use line_item::{CreateLineItem, LineItem};
pub use project::{ProjectParameters, PropertyCondition, PropertyType};
pub use quote::{CategorySubtotal, Quote, QuoteRecord, DEFAULT_VALIDITY_DAYS};
pub use selection::{ItemSelection, PackageSelection, QuoteRequest};
pub use summary::{LineSummary, QuoteSummary, QuoteValidation};
pub use totals::{ComparisonResult, QuoteTotals, Recommendation, RoundingMode};
pub use warning::ValidationWarning;
