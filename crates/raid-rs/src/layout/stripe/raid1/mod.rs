//! RAID1 stripe layout implementation.

use crate::config::ArrayConfig;

mod restore_impl;
mod stripe_impl;

/// RAID1 stores a full copy of every symbol on every disk.
pub struct RAID1 {
    config: ArrayConfig,
}

impl RAID1 {
    #[must_use]
    pub const fn new(config: ArrayConfig) -> Self {
        Self { config }
    }

    /// `mirror_of` returns the disk a failed disk is rebuilt from: the next disk, wrapping.
    #[must_use]
    pub const fn mirror_of(&self, disk: usize) -> usize {
        (disk + 1) % self.config.num_disks()
    }
}
