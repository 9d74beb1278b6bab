//! Flat-file record store - durable append/read/rewrite of the two
//! CSV-backed collections.
//!
//! Each store owns its file path(s) and performs a full read or rewrite per
//! operation; there is no cache shared across requests and no lock. The
//! contract collection is append-only, the license collection supports full
//! CRUD with rewrites going through a temp file and an atomic rename.

pub mod contracts;
pub mod licenses;

pub use contracts::ContractStore;
pub use licenses::LicenseStore;
