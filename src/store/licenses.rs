//! License store - CSV-backed CRUD for license agreement records.
//!
//! The backing file is created lazily with a header-only body the first time
//! it is touched, so a fresh deployment needs no seed data. Creates append a
//! single row; updates and deletes are read-modify-rewrite, with the rewrite
//! going to a temp file in the same directory followed by an atomic rename so
//! a crash mid-rewrite cannot truncate the store. Concurrent writers are not
//! coordinated; the later rewrite wins.

use crate::entities::{License, LicenseDraft, LicensePatch};
use crate::errors::{Error, Result};
use chrono::{SecondsFormat, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

const HEADERS: [&str; 9] = [
    "id",
    "company",
    "agreement_link",
    "key_account_manager",
    "valid_license_id",
    "valid_license_statement",
    "first_invoice_date",
    "created_at",
    "updated_at",
];

/// Raw CSV row; field order matches the header row.
#[derive(Debug, Serialize, Deserialize)]
struct LicenseRow {
    id: String,
    company: String,
    #[serde(default)]
    agreement_link: String,
    #[serde(default)]
    key_account_manager: String,
    #[serde(default)]
    valid_license_id: String,
    #[serde(default)]
    valid_license_statement: String,
    #[serde(default)]
    first_invoice_date: String,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

impl LicenseRow {
    fn from_license(license: &License) -> Self {
        Self {
            id: license.id.clone(),
            company: license.company.clone(),
            agreement_link: license.agreement_link.clone(),
            key_account_manager: license.key_account_manager.clone(),
            valid_license_id: license.valid_license_id.clone(),
            valid_license_statement: license.valid_license_statement.clone(),
            first_invoice_date: license.first_invoice_date.clone(),
            created_at: license.created_at.clone(),
            updated_at: license.updated_at.clone(),
        }
    }

    fn into_license(self) -> License {
        License {
            id: self.id,
            company: self.company,
            agreement_link: self.agreement_link,
            key_account_manager: self.key_account_manager,
            valid_license_id: self.valid_license_id,
            valid_license_statement: self.valid_license_statement,
            first_invoice_date: self.first_invoice_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// CRUD store for license records backed by a single CSV file.
#[derive(Clone, Debug)]
pub struct LicenseStore {
    path: PathBuf,
}

impl LicenseStore {
    /// Creates a store over the given file path. The file itself is created
    /// lazily on first use.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads all stored licenses, bootstrapping a header-only file if the
    /// backing file does not exist yet. Rows without an id or company are
    /// dropped.
    pub async fn read_all(&self) -> Result<Vec<License>> {
        self.ensure_file().await?;

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

        let mut licenses = Vec::new();
        for result in reader.deserialize::<LicenseRow>() {
            let row = match result {
                Ok(row) => row,
                Err(err) => {
                    warn!(error = %err, "Skipping unparseable license row");
                    continue;
                }
            };
            if row.id.is_empty() || row.company.is_empty() {
                continue;
            }
            licenses.push(row.into_license());
        }

        Ok(licenses)
    }

    /// Creates a new license from the draft, assigning the id and both
    /// timestamps, and appends it as a single row.
    pub async fn create(&self, draft: LicenseDraft) -> Result<License> {
        self.ensure_file().await?;

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let license = License {
            id: generate_id(),
            company: draft.company,
            agreement_link: draft.agreement_link,
            key_account_manager: draft.key_account_manager,
            valid_license_id: draft.valid_license_id,
            valid_license_statement: draft.valid_license_statement,
            first_invoice_date: draft.first_invoice_date,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(LicenseRow::from_license(&license))?;
        let record = writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))?;

        let store_write = |source| Error::StoreWrite {
            path: self.path.clone(),
            source,
        };
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .await
            .map_err(store_write)?;
        file.write_all(&record).await.map_err(store_write)?;
        file.flush().await.map_err(store_write)?;

        debug!(id = %license.id, "Created license");
        Ok(license)
    }

    /// Merges the provided fields over the stored record, bumps `updated_at`,
    /// and persists via full rewrite. Fails with `LicenseNotFound` when the
    /// id is not in the store.
    pub async fn update(&self, id: &str, patch: LicensePatch) -> Result<License> {
        let mut licenses = self.read_all().await?;
        let Some(license) = licenses.iter_mut().find(|l| l.id == id) else {
            return Err(Error::LicenseNotFound { id: id.to_string() });
        };

        if let Some(company) = patch.company {
            license.company = company;
        }
        if let Some(agreement_link) = patch.agreement_link {
            license.agreement_link = agreement_link;
        }
        if let Some(key_account_manager) = patch.key_account_manager {
            license.key_account_manager = key_account_manager;
        }
        if let Some(valid_license_id) = patch.valid_license_id {
            license.valid_license_id = valid_license_id;
        }
        if let Some(valid_license_statement) = patch.valid_license_statement {
            license.valid_license_statement = valid_license_statement;
        }
        if let Some(first_invoice_date) = patch.first_invoice_date {
            license.first_invoice_date = first_invoice_date;
        }
        license.updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let updated = license.clone();
        self.rewrite_all(&licenses).await?;

        debug!(id = %updated.id, "Updated license");
        Ok(updated)
    }

    /// Removes the license with the given id and persists via full rewrite.
    /// Fails with `LicenseNotFound` when the id is not in the store, leaving
    /// the file untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let licenses = self.read_all().await?;
        let before = licenses.len();
        let remaining: Vec<License> = licenses.into_iter().filter(|l| l.id != id).collect();
        if remaining.len() == before {
            return Err(Error::LicenseNotFound { id: id.to_string() });
        }

        self.rewrite_all(&remaining).await?;
        debug!(%id, "Deleted license");
        Ok(())
    }

    async fn ensure_file(&self) -> Result<()> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|source| Error::StoreRead {
                path: self.path.clone(),
                source,
            })?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| Error::StoreWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        self.rewrite_all(&[]).await
    }

    /// Writes the complete collection to a temp file and renames it into
    /// place, so readers never observe a partially written store.
    async fn rewrite_all(&self, licenses: &[License]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADERS)?;
        for license in licenses {
            writer.serialize(LicenseRow::from_license(license))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, &bytes)
            .await
            .map_err(|source| Error::StoreWrite {
                path: tmp.clone(),
                source,
            })?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| Error::StoreWrite {
                path: self.path.clone(),
                source,
            })
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

/// Process-unique license id: millisecond timestamp plus a random
/// alphanumeric suffix.
fn generate_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    format!("lic_{}_{}", Utc::now().timestamp_millis(), suffix)
}
