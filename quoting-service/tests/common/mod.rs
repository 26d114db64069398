//! Test helper module for quoting-service integration tests.

#![allow(dead_code)]

use quoting_service::config::{PricingConfig, QuotePolicyConfig, QuotingConfig, TaxPolicyKind};
use quoting_service::models::{
    CreateLineItem, LineItem, ProjectParameters, PropertyType, QualityTier, WorkCategory,
};
use quoting_service::services::{
    Catalog, LineItemBuilder, PricingSettings, QuoteService, TotalsCalculator, UniformTaxRate,
};
use quoting_service::startup::Application;
use rust_decimal::Decimal;
use service_core::config::Config as CoreConfig;
use std::str::FromStr;
use std::sync::Arc;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::load_default().expect("built-in catalog loads"))
}

/// Builder with the default 15% markup.
pub fn builder() -> LineItemBuilder {
    LineItemBuilder::new(catalog(), dec("15"))
}

/// Calculator with 5% rounding surcharge and uniform 21% tax.
pub fn calculator() -> TotalsCalculator {
    TotalsCalculator::new(dec("5"), Arc::new(UniformTaxRate { rate: dec("21") }))
}

pub fn service() -> QuoteService {
    QuoteService::new(catalog(), PricingSettings::default())
}

pub fn flat(area: &str) -> ProjectParameters {
    ProjectParameters::new(PropertyType::Flat, dec(area))
}

/// A bare item line with a hand-picked price, bypassing the catalog.
pub fn manual_line(category: WorkCategory, quantity: &str, unit_price: &str) -> LineItem {
    LineItem::new(CreateLineItem {
        category,
        code: "manual".to_string(),
        description: "Manual line".to_string(),
        unit: "ud".to_string(),
        quantity: dec(quantity),
        unit_price: dec(unit_price),
        quality: QualityTier::Standard,
        is_package: false,
        included_items: Vec::new(),
        notes: None,
    })
    .expect("valid manual line")
}

pub fn test_config() -> QuotingConfig {
    QuotingConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        service_name: "quoting-service-test".to_string(),
        service_version: "0.1.0".to_string(),
        log_level: "warn".to_string(),
        otlp_endpoint: None,
        catalog_path: None,
        pricing: PricingConfig {
            tax_policy: TaxPolicyKind::Uniform,
            ..PricingConfig::default()
        },
        quote: QuotePolicyConfig::default(),
    }
}

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: QuotingConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }

        Self {
            http_address,
            http_port,
        }
    }
}
