//! Shared test utilities for `contract-ledger`.
//!
//! Provides tempdir-backed store constructors and sample-record helpers so
//! individual tests stay focused on behavior.

use crate::core::month;
use crate::entities::{Contract, LicenseDraft};
use crate::errors::Result;
use crate::store::{ContractStore, LicenseStore};
use tempfile::TempDir;

/// Header row of the contracts file.
pub const CONTRACT_HEADER: &str = "Company,Payment_Date,Amount,Year,Month\n";

/// Creates a contract store over a fresh temp directory with seeded
/// header-only primary and mirror files, the way a deployment ships them.
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_contract_store() -> Result<(TempDir, ContractStore)> {
    let dir = tempfile::tempdir()?;
    let data_dir = dir.path().join("data");
    let public_dir = dir.path().join("public");
    std::fs::create_dir_all(&data_dir)?;
    std::fs::create_dir_all(&public_dir)?;

    let path = data_dir.join("contracts.csv");
    let mirror = public_dir.join("contracts.csv");
    std::fs::write(&path, CONTRACT_HEADER)?;
    std::fs::write(&mirror, CONTRACT_HEADER)?;

    Ok((dir, ContractStore::new(path, mirror)))
}

/// Creates a license store over a fresh temp directory. The backing file is
/// not pre-created; the store bootstraps it on first use.
pub fn temp_license_store() -> (TempDir, LicenseStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = LicenseStore::new(dir.path().join("data").join("licenses.csv"));
    (dir, store)
}

/// Builds a contract with `year` and `month` derived from the payment date,
/// as the facade would produce it.
pub fn sample_contract(company: &str, payment_date: &str, amount: f64) -> Contract {
    let (year, month_num) =
        month::split_period(payment_date).expect("valid sample payment date");
    Contract {
        company: company.to_string(),
        payment_date: payment_date.to_string(),
        amount,
        year,
        month: month::month_name(month_num).unwrap_or_default().to_string(),
    }
}

/// Builds a license draft with only the company set.
pub fn sample_draft(company: &str) -> LicenseDraft {
    LicenseDraft {
        company: company.to_string(),
        ..LicenseDraft::default()
    }
}
