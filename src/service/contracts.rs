//! Contract operations - validation, derivation of denormalized fields, and
//! delegation to the append-only store.

use crate::core::month;
use crate::entities::{Contract, ContractInput};
use crate::errors::{Error, Result};
use crate::store::ContractStore;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

/// Payment months are `YYYY-MM` with a real month number.
static PAYMENT_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("payment month pattern"));

/// Lists all stored contracts in file order.
pub async fn list_contracts(store: &ContractStore) -> Result<Vec<Contract>> {
    store.read_all().await
}

/// Validates the input, derives `year` and the full month name from the
/// payment date, and appends the new contract.
///
/// Requires a non-empty company, a `YYYY-MM` payment date with a month in
/// 01-12, and a positive finite amount.
pub async fn create_contract(store: &ContractStore, input: ContractInput) -> Result<Contract> {
    let company = input.company.trim();
    if company.is_empty() {
        return Err(Error::Validation {
            field: "company",
            message: "Company name is required".to_string(),
        });
    }

    if !PAYMENT_MONTH.is_match(&input.payment_date) {
        return Err(Error::Validation {
            field: "paymentDate",
            message: "Invalid payment date format. Use YYYY-MM".to_string(),
        });
    }

    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(Error::Validation {
            field: "amount",
            message: "Amount must be a positive number".to_string(),
        });
    }

    let (year, month_num) =
        month::split_period(&input.payment_date).ok_or_else(|| Error::Validation {
            field: "paymentDate",
            message: "Invalid payment date format. Use YYYY-MM".to_string(),
        })?;
    let month_name = month::month_name(month_num).unwrap_or_default().to_string();

    let contract = Contract {
        company: company.to_string(),
        payment_date: input.payment_date,
        amount: input.amount,
        year,
        month: month_name,
    };

    store.append(&contract).await?;
    info!(company = %contract.company, payment_date = %contract.payment_date, "Added contract");
    Ok(contract)
}
