//! Error types shared by the layout and retention layers.

use thiserror::Error;

use crate::config::RaidLevel;

/// Result type alias using [`RaidError`].
pub type Result<T> = std::result::Result<T, RaidError>;

/// RaidError enumerates every way an array operation can be rejected.
///
/// Each error aborts only the operation that raised it. The one mutation that
/// survives a rejection is failure marking: see [`crate::retention::array::Array::recover`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaidError {
    /// The `(raid_level, num_disks)` combination is not a valid array.
    #[error("invalid array configuration: {0}")]
    Config(String),

    /// A write would push a disk past the per-disk block cap.
    #[error("write needs {requested} blocks on disk {disk}, but a disk holds at most {max}")]
    Capacity {
        disk: usize,
        requested: usize,
        max: usize,
    },

    /// A failure index outside `[0, num_disks)`.
    #[error("disk index out of range: {index} (num_disks={num_disks})")]
    InvalidIndex { index: usize, num_disks: usize },

    /// The failure set exceeds what the level can rebuild.
    #[error("RAID {level} cannot recover disks {failed:?}: {reason}")]
    ToleranceExceeded {
        level: RaidLevel,
        failed: Vec<usize>,
        reason: String,
    },

    /// The dual-data 2x2 system has a zero determinant.
    #[error("singular dual-parity system for coefficients {a:#04X} and {b:#04X}")]
    DegenerateSolve { a: u8, b: u8 },

    /// A persisted document or block token could not be decoded.
    #[error("malformed array document: {0}")]
    Document(String),
}

impl RaidError {
    pub(crate) fn tolerance(level: RaidLevel, failed: &[usize], reason: impl Into<String>) -> Self {
        Self::ToleranceExceeded {
            level,
            failed: failed.to_vec(),
            reason: reason.into(),
        }
    }
}
