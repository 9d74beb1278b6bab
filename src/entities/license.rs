//! License entity - a tracked agreement record with account-management and
//! compliance metadata, independent of payment contracts.
//!
//! Licenses carry a server-assigned id and timestamps. All optional fields
//! are stored as plain strings, empty when unset, so a round trip through the
//! store never turns an absent field into anything but `""`.

use serde::{Deserialize, Serialize};

/// A stored license agreement record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Process-unique identifier, assigned by the store on create, immutable
    pub id: String,
    /// Company display name, required
    pub company: String,
    /// Link to the signed agreement document
    pub agreement_link: String,
    /// Key account manager responsible for the relationship
    pub key_account_manager: String,
    /// External license identifier, if one exists
    pub valid_license_id: String,
    /// Free-text statement of license validity
    pub valid_license_statement: String,
    /// First invoice month in `YYYY-MM` form when present (not strictly validated)
    pub first_invoice_date: String,
    /// ISO-8601 creation timestamp, set once
    pub created_at: String,
    /// ISO-8601 timestamp of the last mutation
    pub updated_at: String,
}

/// Inbound fields for creating a license. The store assigns `id`,
/// `created_at` and `updated_at`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseDraft {
    /// Company display name, required
    pub company: String,
    pub agreement_link: String,
    pub key_account_manager: String,
    pub valid_license_id: String,
    pub valid_license_statement: String,
    pub first_invoice_date: String,
}

/// Partial update for a license. Only `Some` fields are merged over the
/// stored record; `id` and `created_at` can never be patched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicensePatch {
    pub company: Option<String>,
    pub agreement_link: Option<String>,
    pub key_account_manager: Option<String>,
    pub valid_license_id: Option<String>,
    pub valid_license_statement: Option<String>,
    pub first_invoice_date: Option<String>,
}

impl LicensePatch {
    /// True when no field is present, i.e. the patch would only bump
    /// `updated_at`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.agreement_link.is_none()
            && self.key_account_manager.is_none()
            && self.valid_license_id.is_none()
            && self.valid_license_statement.is_none()
            && self.first_invoice_date.is_none()
    }
}
