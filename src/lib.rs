#![allow(missing_docs)]
//! # Janice Appraisal Engine
//!
//! Rust implementation of the EVE Online item appraisal interaction engine,
//! backed by the [Janice](https://janice.e-351.com) pricing API.
//!
//! This crate provides:
//! - Free-form item/quantity text parsing into canonical appraisal payloads
//! - Paired full / 90% pricing queries against the Janice API
//! - A bounded token cache linking interactive controls back to item lists
//! - Display-ready result assembly (values, volumes, breakdown, controls)
//!
//! The chat gateway, message rendering and command registration live in the
//! host bot; this crate is the engine the host dispatches into.
//!
//! ## Example
//!
//! ```rust,no_run
//! use janice_appraisal::actions::appraise_items;
//! use janice_appraisal::JaniceService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = JaniceService::start("my-api-key").await?;
//!
//!     let result = appraise_items(&service, "Tritanium 100\nPLEX 5", None).await?;
//!     println!("Buy value: {} ISK at {}", result.totals.buy, result.market_name);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod actions;
pub mod cache;
pub mod client;
pub mod constants;
pub mod display;
pub mod error;
pub mod markets;
pub mod parser;
pub mod providers;
pub mod service;
pub mod types;

/// The canonical plugin identifier the host bot uses to refer to this engine.
pub const PLUGIN_NAME: &str = "janice-appraisal";

/// The plugin crate version (from `CARGO_PKG_VERSION`).
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use service::JaniceService;
