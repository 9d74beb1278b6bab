//! Entity module - the record types persisted in the CSV-backed stores.
//! Contracts are append-only payment rows; licenses are full CRUD records
//! with server-assigned identity and timestamps.

pub mod contract;
pub mod license;

// Re-export the record types under their plain names
pub use contract::{Contract, ContractInput};
pub use license::{License, LicenseDraft, LicensePatch};
