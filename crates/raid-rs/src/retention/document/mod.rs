//! Persisted array state.
//!
//! ```json
//! { "raid_level": "5", "num_disks": 3, "disks": [["P(03)"], ["A"], ["B"]] }
//! ```


use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::RaidLevel;
use crate::error::{RaidError, Result};
use crate::layout::block::Block;

/// Snapshot is the immutable, serializable view of an array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub raid_level: RaidLevel,
    pub num_disks: usize,
    pub disks: Vec<Vec<Block>>,
}

impl Snapshot {
    /// # Errors
    /// Returns [`RaidError::Document`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RaidError::Document(e.to_string()))
    }

    /// # Errors
    /// Returns [`RaidError::Document`] for malformed JSON, unknown levels or bad block tokens.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RaidError::Document(e.to_string()))
    }
}

/// `save` writes `snapshot` to `path` as JSON.
///
/// # Errors
/// Fails if the document cannot be encoded or the file cannot be written.
pub fn save(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    let text = snapshot.to_json()?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// `load` reads a JSON document from `path`.
///
/// # Errors
/// Fails if the file cannot be read or does not decode as a [`Snapshot`].
pub fn load(path: &Path) -> anyhow::Result<Snapshot> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot =
        Snapshot::from_json(&text).with_context(|| format!("failed to decode {}", path.display()))?;
    Ok(snapshot)
}
