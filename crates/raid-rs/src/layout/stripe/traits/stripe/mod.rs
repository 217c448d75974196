//! Stripe trait definitions for laying symbols out across disks.

#[cfg(test)]
mod stripe_tests;

use crate::config::ArrayConfig;
use crate::error::Result;
use crate::layout::stripe::traits::restore::Restore;
use crate::retention::disk::Disk;

/// Stripe describes how a RAID level places input symbols onto disks.
pub trait Stripe {
    /// config returns the array shape the layout was built for.
    fn config(&self) -> &ArrayConfig;

    /// growth returns how many blocks each disk gains when `symbols` symbols are written.
    ///
    /// # Arguments
    /// * `symbols` - Number of input symbols, after the per-call cap.
    fn growth(&self, symbols: usize) -> Vec<usize>;

    /// write appends the blocks for `data` to `disks`.
    ///
    /// Callers have already checked capacity; `disks.len()` equals the configured disk count.
    ///
    /// # Arguments
    /// * `disks` - The array's disks, in index order.
    /// * `data` - Input symbols.
    fn write(&self, disks: &mut [Disk], data: &[u8]);

    /// validate checks loaded disks against the level's placement rules.
    ///
    /// # Errors
    /// Returns [`crate::error::RaidError::Document`] for a block in a slot the
    /// level never writes it to, or for mirrors that disagree.
    fn validate(&self, disks: &[Disk]) -> Result<()>;

    /// as_restore returns a restoration trait object if the level carries redundancy.
    fn as_restore(&self) -> Option<&dyn Restore> {
        None
    }
}
