//! `contract-ledger` - a contract and license management dashboard backend.
//!
//! Payment contracts and license agreements are persisted as flat CSV files;
//! a pure aggregation engine derives dashboard metrics, time-bucketed revenue
//! rollups, company rankings, and a recent-activity feed from the contract
//! list; a small facade validates and normalizes inbound records before they
//! reach the stores. A thin HTTP layer exposes the whole thing as JSON.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::match_same_arms,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions, // Common pattern in Rust
    clippy::missing_errors_doc,      // Will add gradually
    clippy::missing_panics_doc       // Will add gradually
)]

/// Configuration management for store paths and dashboard settings
pub mod config;
/// Core business logic - pure aggregation over contract records
pub mod core;
/// Record types persisted in the CSV-backed stores
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// HTTP transport shell
pub mod http;
/// CRUD facade - validation and normalization in front of the stores
pub mod service;
/// Flat-file record store for contracts and licenses
pub mod store;

#[cfg(test)]
pub mod test_utils;
