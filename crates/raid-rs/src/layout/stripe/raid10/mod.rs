//! RAID10 stripe layout implementation.

use crate::config::ArrayConfig;

mod restore_impl;
mod stripe_impl;

/// RAID10 stripes across the first half of the disks and mirrors each onto the second half.
pub struct RAID10 {
    config: ArrayConfig,
}

impl RAID10 {
    #[must_use]
    pub const fn new(config: ArrayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn half(&self) -> usize {
        self.config.num_disks() / 2
    }

    /// `mirror_of` pairs disk `i` of the first half with disk `i + half`.
    #[must_use]
    pub const fn mirror_of(&self, disk: usize) -> usize {
        let half = self.half();
        if disk >= half { disk - half } else { disk + half }
    }
}
