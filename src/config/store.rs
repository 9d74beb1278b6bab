//! Store file locations.
//!
//! The contracts file lives in the data directory and is mirrored into the
//! public directory, where an external static-asset consumer reads it. The
//! licenses file lives beside the contracts file.

use serde::Deserialize;
use std::path::PathBuf;

/// Locations of the two CSV-backed collections.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the primary data files
    pub data_dir: PathBuf,
    /// Directory the contracts mirror copy is written to
    pub public_dir: PathBuf,
    /// File name of the contracts collection
    pub contracts_file: String,
    /// File name of the licenses collection
    pub licenses_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
            contracts_file: "contracts.csv".to_string(),
            licenses_file: "licenses.csv".to_string(),
        }
    }
}

impl StoreConfig {
    /// Primary contracts file path.
    #[must_use]
    pub fn contracts_path(&self) -> PathBuf {
        self.data_dir.join(&self.contracts_file)
    }

    /// Public mirror copy of the contracts file.
    #[must_use]
    pub fn contracts_mirror_path(&self) -> PathBuf {
        self.public_dir.join(&self.contracts_file)
    }

    /// Licenses file path.
    #[must_use]
    pub fn licenses_path(&self) -> PathBuf {
        self.data_dir.join(&self.licenses_file)
    }
}
