//! Contract entity - one scheduled or recorded payment event.
//!
//! Contracts are anonymous append-only rows: there is no identifier, and a
//! row is distinguished only by (company, payment date, amount, position).
//! `year` and `month` are denormalized from `payment_date` at creation time
//! for fast filtering and display.

use serde::{Deserialize, Serialize};

/// A single payment record tied to a company and a calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Company display name
    pub company: String,
    /// Payment month in `YYYY-MM` form
    pub payment_date: String,
    /// Payment amount in dollars, always positive for facade-created rows
    pub amount: f64,
    /// Calendar year, derived from `payment_date`
    pub year: i32,
    /// Full English month name (e.g. "January"), derived from `payment_date`
    pub month: String,
}

/// Inbound fields for creating a contract. `year` and `month` are never
/// accepted from callers; the facade derives them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInput {
    /// Company display name
    pub company: String,
    /// Payment month in `YYYY-MM` form
    pub payment_date: String,
    /// Payment amount in dollars
    pub amount: f64,
}
