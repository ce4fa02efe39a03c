//! The published schedule dataset.
//!
//! The batch job writes a single JSON document that the server (and the
//! PWA front end) read back. Publication is write-then-rename so a
//! failed run can never leave a half-written document where a good one
//! used to be.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Service;

use super::DatasetError;

/// The schedule dataset document.
///
/// Serialized as `{"lastUpdate": "<RFC 3339>", "services": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// When the batch job produced this document.
    pub last_update: DateTime<Utc>,
    /// Normalized services, sorted by trip id.
    pub services: Vec<Service>,
}

impl Dataset {
    /// Wrap freshly normalized services with the current timestamp.
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            last_update: Utc::now(),
            services,
        }
    }

    /// Read a dataset document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a dataset document from a file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Publish the dataset atomically.
    ///
    /// The document is written to a sibling temporary file and renamed
    /// into place. If anything fails before the rename, the previously
    /// published file is untouched.
    pub fn write_atomic(&self, path: &Path) -> Result<(), DatasetError> {
        let json = serde_json::to_vec_pretty(self)?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        Ok(())
    }
}
