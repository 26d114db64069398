//! HTTP handlers for quoting-service.

pub mod catalog;
pub mod estimates;
pub mod quotes;
