//! Pricing and catalog errors.

use rust_decimal::Decimal;
use service_core::error::AppError;
use thiserror::Error;

/// Errors raised by pricing operations. Always propagated to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("{kind} '{key}' not found in catalog")]
    NotFound { kind: &'static str, key: String },

    #[error("Quantity must be greater than zero (got {0})")]
    InvalidQuantity(Decimal),

    #[error("Unit price must not be negative (got {0})")]
    InvalidUnitPrice(Decimal),

    #[error("Area must be greater than zero (got {0})")]
    InvalidArea(Decimal),

    #[error("{0} exceeds the supported amount range")]
    AmountOverflow(String),

    #[error("Recomputed total {recomputed} does not match persisted total {persisted}")]
    RecordMismatch {
        persisted: Decimal,
        recomputed: Decimal,
    },
}

impl PricingError {
    pub fn item_not_found(category: impl std::fmt::Display, code: &str) -> Self {
        PricingError::NotFound {
            kind: "Item",
            key: format!("{}/{}", category, code),
        }
    }

    pub fn package_not_found(code: &str) -> Self {
        PricingError::NotFound {
            kind: "Package",
            key: code.to_string(),
        }
    }

    pub fn tier_not_found(owner: &str, tier: impl std::fmt::Display) -> Self {
        PricingError::NotFound {
            kind: "Quality tier",
            key: format!("{}/{}", owner, tier),
        }
    }

    /// Short label for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::NotFound { .. } => "not_found",
            PricingError::InvalidQuantity(_) => "invalid_quantity",
            PricingError::InvalidUnitPrice(_) => "invalid_unit_price",
            PricingError::InvalidArea(_) => "invalid_area",
            PricingError::AmountOverflow(_) => "amount_overflow",
            PricingError::RecordMismatch { .. } => "record_mismatch",
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::NotFound { .. } => AppError::NotFound(anyhow::Error::new(err)),
            PricingError::InvalidQuantity(_)
            | PricingError::InvalidUnitPrice(_)
            | PricingError::InvalidArea(_)
            | PricingError::AmountOverflow(_) => AppError::BadRequest(anyhow::Error::new(err)),
            PricingError::RecordMismatch { .. } => AppError::InternalError(anyhow::Error::new(err)),
        }
    }
}

/// Errors raised while loading the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}
