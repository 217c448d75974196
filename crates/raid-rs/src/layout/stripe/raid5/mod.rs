//! RAID5 stripe layout implementation.

use crate::config::ArrayConfig;

mod restore_impl;
mod stripe_impl;

/// RAID5 stores `num_disks - 1` data blocks and one rotating XOR parity block per row.
pub struct RAID5 {
    config: ArrayConfig,
}

impl RAID5 {
    #[must_use]
    pub const fn new(config: ArrayConfig) -> Self {
        Self { config }
    }
}
