//! quoting-service: renovation quote pricing engine.
//!
//! The pricing core (`models`, `services`) is plain synchronous Rust over an
//! immutable catalog. `handlers` and `startup` expose it over HTTP.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod money;
pub mod services;
pub mod startup;
