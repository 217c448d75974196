//! Restoration hooks for rebuilding failed disks.

use crate::error::Result;
use crate::layout::block::Block;
use crate::retention::disk::Disk;
use crate::retention::failure::FailureSet;

/// Rebuilt is the full block sequence re-derived for one failed disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rebuilt {
    pub disk: usize,
    pub blocks: Vec<Block>,
}

/// Restore defines how a redundant level rebuilds failed disks.
pub trait Restore {
    /// check rejects failure sets the level cannot rebuild.
    ///
    /// # Errors
    /// Returns [`crate::error::RaidError::ToleranceExceeded`] when the set is too large
    /// or hits both copies of a mirror.
    fn check(&self, failed: &FailureSet) -> Result<()>;

    /// restore re-derives every block of every failed disk from the survivors.
    ///
    /// Nothing is written back; the caller commits the returned sequences.
    ///
    /// # Arguments
    /// * `disks` - The array's disks, failed ones holding placeholders.
    /// * `failed` - Disks to rebuild; already accepted by [`Restore::check`].
    ///
    /// # Errors
    /// Propagates solver errors from the parity codecs.
    fn restore(&self, disks: &[Disk], failed: &FailureSet) -> Result<Vec<Rebuilt>>;
}
