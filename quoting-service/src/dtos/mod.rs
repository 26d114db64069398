pub mod catalog;
pub mod quote;

pub use catalog::{CatalogItemResponse, PackageResponse};
pub use quote::{
    CompareRequest, CreateQuoteRequest, EstimateRequest, ItemSelectionDto, PackageSelectionDto,
    ProjectDto, QuickQuoteRequest, QuoteResponse,
};
