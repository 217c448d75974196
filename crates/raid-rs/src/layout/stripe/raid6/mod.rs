//! RAID6 stripe layout implementation.

use crate::config::ArrayConfig;
use crate::layout::stripe::parity_slot;

mod restore_impl;
mod stripe_impl;
#[cfg(test)]
mod stripe_trait_tests;

/// RAID6 stores `num_disks - 2` data blocks plus P and Q parity per row.
///
/// P rotates like RAID5; Q sits on the disk after P.
pub struct RAID6 {
    config: ArrayConfig,
}

impl RAID6 {
    #[must_use]
    pub const fn new(config: ArrayConfig) -> Self {
        Self { config }
    }

    /// `parity_slots` returns the `(P, Q)` disks for a stripe row.
    #[must_use]
    pub const fn parity_slots(&self, row: usize) -> (usize, usize) {
        let n = self.config.num_disks();
        let p = parity_slot(row, n);
        (p, (p + 1) % n)
    }
}
