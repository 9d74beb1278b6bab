//! License operations - normalization and delegation to the license store,
//! which owns id and timestamp assignment.

use crate::entities::{License, LicenseDraft, LicensePatch};
use crate::errors::{Error, Result};
use crate::store::LicenseStore;
use tracing::info;

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// Lists all stored licenses in file order.
pub async fn list_licenses(store: &LicenseStore) -> Result<Vec<License>> {
    store.read_all().await
}

/// Validates that a company is present, trims every field, and delegates to
/// the store. Optional fields default to the empty string.
pub async fn create_license(store: &LicenseStore, draft: LicenseDraft) -> Result<License> {
    let company = draft.company.trim().to_string();
    if company.is_empty() {
        return Err(Error::Validation {
            field: "company",
            message: "Company name is required".to_string(),
        });
    }

    let license = store
        .create(LicenseDraft {
            company,
            agreement_link: trimmed(draft.agreement_link),
            key_account_manager: trimmed(draft.key_account_manager),
            valid_license_id: trimmed(draft.valid_license_id),
            valid_license_statement: trimmed(draft.valid_license_statement),
            first_invoice_date: trimmed(draft.first_invoice_date),
        })
        .await?;

    info!(id = %license.id, company = %license.company, "Added license");
    Ok(license)
}

/// Trims the provided fields and merges them over the stored record.
/// Absent fields are left untouched; `updated_at` is always refreshed.
pub async fn update_license(
    store: &LicenseStore,
    id: &str,
    patch: LicensePatch,
) -> Result<License> {
    let patch = LicensePatch {
        company: patch.company.map(trimmed),
        agreement_link: patch.agreement_link.map(trimmed),
        key_account_manager: patch.key_account_manager.map(trimmed),
        valid_license_id: patch.valid_license_id.map(trimmed),
        valid_license_statement: patch.valid_license_statement.map(trimmed),
        first_invoice_date: patch.first_invoice_date.map(trimmed),
    };

    let license = store.update(id, patch).await?;
    info!(id = %license.id, "Updated license");
    Ok(license)
}

/// Removes the license with the given id.
pub async fn delete_license(store: &LicenseStore, id: &str) -> Result<()> {
    store.delete(id).await?;
    info!(%id, "Deleted license");
    Ok(())
}
