//! API Client
//!
//! HTTP access to the REST Countries and World Bank APIs.

pub mod client;

pub use client::{fetch_country_detail, fetch_dashboard};
