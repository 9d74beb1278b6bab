//! Contract store - append-only CSV persistence for payment records.
//!
//! The on-disk header names (`Company`, `Payment_Date`, ...) differ from the
//! in-memory field names, so rows go through a dedicated row struct with
//! explicit renames. Reads are lenient: rows missing a required cell are
//! dropped silently, rows with a non-numeric amount are dropped with a
//! warning, and a missing or unusable `Year`/`Month` cell is re-derived from
//! the payment date rather than dropping the row.

use crate::core::month;
use crate::entities::Contract;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Raw CSV row as persisted. All cells are strings; numeric interpretation
/// happens on the way in to `Contract`.
#[derive(Debug, Serialize, Deserialize)]
struct ContractRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Payment_Date")]
    payment_date: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Month", default)]
    month: String,
}

impl ContractRow {
    fn from_contract(contract: &Contract) -> Self {
        Self {
            company: contract.company.clone(),
            payment_date: contract.payment_date.clone(),
            amount: format!("{:.2}", contract.amount),
            year: contract.year.to_string(),
            month: contract.month.clone(),
        }
    }
}

/// Append-only store for payment contracts, mirrored to a second copy
/// consumed as a static asset.
#[derive(Clone, Debug)]
pub struct ContractStore {
    path: PathBuf,
    mirror_path: PathBuf,
}

impl ContractStore {
    /// Creates a store over the given primary file and public mirror copy.
    #[must_use]
    pub fn new(path: PathBuf, mirror_path: PathBuf) -> Self {
        Self { path, mirror_path }
    }

    /// Reads and parses the full contract file.
    ///
    /// Fails with a store-read error when the file is missing or unreadable;
    /// individual bad rows never fail the read (see module docs for the
    /// skipping rules).
    pub async fn read_all(&self) -> Result<Vec<Contract>> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::StoreRead {
                path: self.path.clone(),
                source,
            })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut contracts = Vec::new();
        for result in reader.deserialize::<ContractRow>() {
            let row = match result {
                Ok(row) => row,
                Err(err) => {
                    warn!(error = %err, "Skipping unparseable contract row");
                    continue;
                }
            };

            if row.company.is_empty() || row.payment_date.is_empty() || row.amount.is_empty() {
                continue;
            }

            let Ok(amount) = row.amount.parse::<f64>() else {
                warn!(
                    company = %row.company,
                    amount = %row.amount,
                    "Skipping contract row with non-numeric amount"
                );
                continue;
            };
            if !amount.is_finite() {
                warn!(company = %row.company, "Skipping contract row with non-finite amount");
                continue;
            }

            // Year and month are denormalized; the payment date is the
            // authoritative field when a cell is missing or unusable.
            let year = match row.year.parse::<i32>() {
                Ok(year) => year,
                Err(_) => match month::split_period(&row.payment_date) {
                    Some((year, _)) => year,
                    None => {
                        warn!(
                            company = %row.company,
                            payment_date = %row.payment_date,
                            "Skipping contract row with unusable payment date"
                        );
                        continue;
                    }
                },
            };
            let month_name = if row.month.is_empty() {
                month::split_period(&row.payment_date)
                    .and_then(|(_, m)| month::month_name(m))
                    .unwrap_or_default()
                    .to_string()
            } else {
                row.month
            };

            contracts.push(Contract {
                company: row.company,
                payment_date: row.payment_date,
                amount,
                year,
                month: month_name,
            });
        }

        Ok(contracts)
    }

    /// Appends one contract row to the primary file and the public mirror.
    ///
    /// No uniqueness check is performed; duplicate rows are permitted. A
    /// failure on the mirror after the primary succeeded is not rolled back.
    pub async fn append(&self, contract: &Contract) -> Result<()> {
        let record = encode_row(contract)?;
        append_bytes(&self.path, &record).await?;
        append_bytes(&self.mirror_path, &record).await
    }
}

fn encode_row(contract: &Contract) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.serialize(ContractRow::from_contract(contract))?;
    writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))
}

async fn append_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let store_write = |source| Error::StoreWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await
        .map_err(store_write)?;
    file.write_all(bytes).await.map_err(store_write)?;
    file.flush().await.map_err(store_write)
}
