//! Configuration module for quoting-service.

use crate::models::DEFAULT_VALIDITY_DAYS;
use crate::services::{PricingSettings, ReducedResidentialTaxRate, TaxRatePolicy, UniformTaxRate};
use rust_decimal::Decimal;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct QuotingConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    /// External catalog file; the built-in catalog is used when absent.
    pub catalog_path: Option<String>,
    pub pricing: PricingConfig,
    pub quote: QuotePolicyConfig,
}

#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub markup_percentage: Decimal,
    pub rounding_percentage: Decimal,
    pub general_tax_percentage: Decimal,
    pub reduced_tax_percentage: Decimal,
    pub tax_policy: TaxPolicyKind,
}

#[derive(Debug, Clone)]
pub struct QuotePolicyConfig {
    pub validity_days: u32,
    pub minimum_total: Decimal,
}

/// Which tax-rate rule to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaxPolicyKind {
    #[default]
    Uniform,
    ReducedResidential,
}

impl FromStr for TaxPolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(TaxPolicyKind::Uniform),
            "reduced_residential" => Ok(TaxPolicyKind::ReducedResidential),
            _ => Err(format!("Invalid tax policy: {}", s)),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            markup_percentage: Decimal::from(15),
            rounding_percentage: Decimal::from(5),
            general_tax_percentage: Decimal::from(21),
            reduced_tax_percentage: Decimal::from(10),
            tax_policy: TaxPolicyKind::default(),
        }
    }
}

impl Default for QuotePolicyConfig {
    fn default() -> Self {
        Self {
            validity_days: DEFAULT_VALIDITY_DAYS,
            minimum_total: Decimal::from(600),
        }
    }
}

impl QuotingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let pricing_defaults = PricingConfig::default();
        let quote_defaults = QuotePolicyConfig::default();

        let pricing = PricingConfig {
            markup_percentage: percentage_var(
                "PRICING_MARKUP_PERCENTAGE",
                pricing_defaults.markup_percentage,
            )?,
            rounding_percentage: percentage_var(
                "PRICING_ROUNDING_PERCENTAGE",
                pricing_defaults.rounding_percentage,
            )?,
            general_tax_percentage: percentage_var(
                "PRICING_GENERAL_TAX_PERCENTAGE",
                pricing_defaults.general_tax_percentage,
            )?,
            reduced_tax_percentage: percentage_var(
                "PRICING_REDUCED_TAX_PERCENTAGE",
                pricing_defaults.reduced_tax_percentage,
            )?,
            tax_policy: parse_var("PRICING_TAX_POLICY", pricing_defaults.tax_policy)?,
        };

        let validity_days: u32 = parse_var("QUOTE_VALIDITY_DAYS", quote_defaults.validity_days)?;
        if validity_days == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "QUOTE_VALIDITY_DAYS must be at least 1"
            )));
        }
        let minimum_total: Decimal = parse_var("QUOTE_MINIMUM_TOTAL", quote_defaults.minimum_total)?;
        if minimum_total < Decimal::ZERO {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "QUOTE_MINIMUM_TOTAL must not be negative"
            )));
        }

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "quoting-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            catalog_path: env::var("CATALOG_PATH").ok().filter(|s| !s.is_empty()),
            pricing,
            quote: QuotePolicyConfig {
                validity_days,
                minimum_total,
            },
        })
    }

    pub fn tax_policy(&self) -> Arc<dyn TaxRatePolicy> {
        match self.pricing.tax_policy {
            TaxPolicyKind::Uniform => Arc::new(UniformTaxRate {
                rate: self.pricing.general_tax_percentage,
            }),
            TaxPolicyKind::ReducedResidential => Arc::new(ReducedResidentialTaxRate {
                general_rate: self.pricing.general_tax_percentage,
                reduced_rate: self.pricing.reduced_tax_percentage,
            }),
        }
    }

    pub fn pricing_settings(&self) -> PricingSettings {
        PricingSettings {
            markup_percentage: self.pricing.markup_percentage,
            rounding_percentage: self.pricing.rounding_percentage,
            validity_days: self.quote.validity_days,
            minimum_total: self.quote.minimum_total,
            tax_policy: self.tax_policy(),
        }
    }
}

/// Read `name`, falling back to `default` when unset. A value that is set but
/// does not parse is a configuration error.
fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|e: T::Err| {
            AppError::ConfigError(anyhow::anyhow!("Invalid value for {}: {}", name, e))
        }),
        _ => Ok(default),
    }
}

fn percentage_var(name: &str, default: Decimal) -> Result<Decimal, AppError> {
    let value: Decimal = parse_var(name, default)?;
    check_percentage(name, value)
}

fn check_percentage(name: &str, value: Decimal) -> Result<Decimal, AppError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "{} must be between 0 and 100 (got {})",
            name,
            value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_policy_kind_parsing() {
        assert_eq!("uniform".parse::<TaxPolicyKind>(), Ok(TaxPolicyKind::Uniform));
        assert_eq!(
            "Reduced_Residential".parse::<TaxPolicyKind>(),
            Ok(TaxPolicyKind::ReducedResidential)
        );
        assert!("flat_rate".parse::<TaxPolicyKind>().is_err());
    }

    #[test]
    fn test_check_percentage_bounds() {
        assert!(check_percentage("X", Decimal::ZERO).is_ok());
        assert!(check_percentage("X", Decimal::ONE_HUNDRED).is_ok());
        assert!(check_percentage("X", Decimal::from(101)).is_err());
        assert!(check_percentage("X", Decimal::from(-1)).is_err());
    }
}
