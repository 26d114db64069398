//! Services module for quoting-service.

pub mod catalog;
pub mod comparator;
pub mod estimates;
pub mod line_items;
pub mod metrics;
pub mod quote_service;
pub mod totals;

pub use catalog::{Catalog, PriceLookup};
pub use comparator::Comparator;
pub use estimates::estimate_quantities;
pub use line_items::{LineItemBuilder, PACKAGE_UNIT};
pub use metrics::{get_metrics, init_metrics};
pub use quote_service::{PricedQuote, PricingSettings, QuoteService};
pub use totals::{ReducedResidentialTaxRate, TaxRatePolicy, TotalsCalculator, UniformTaxRate};
