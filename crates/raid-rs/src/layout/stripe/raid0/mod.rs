//! RAID0 stripe layout implementation.

use crate::config::ArrayConfig;

mod stripe_impl;
#[cfg(test)]
mod stripe_trait_tests;

/// RAID0 stripes symbols round-robin across all disks without redundancy.
pub struct RAID0 {
    config: ArrayConfig,
}

impl RAID0 {
    #[must_use]
    pub const fn new(config: ArrayConfig) -> Self {
        Self { config }
    }
}
