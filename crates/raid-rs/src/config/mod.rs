//! Array configuration: RAID levels, disk counts and engine limits.

#[cfg(test)]
mod config_tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RaidError, Result};

/// Maximum number of blocks a single disk may hold.
pub const MAX_BLOCKS_PER_DISK: usize = 100;
/// Per-call write cap, in stripes of [`ArrayConfig::stripe_size`] symbols.
pub const WRITE_LIMIT_STRIPES: usize = 10;
/// Upper bound on RAID10 array width.
pub const MAX_RAID10_DISKS: usize = 32;
/// Upper bound on RAID6 array width; Q coefficients are `disk_index + 1` and must fit in a byte.
pub const MAX_RAID6_DISKS: usize = 255;

/// RaidLevel lists the supported redundancy schemes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RaidLevel {
    Raid0,
    Raid1,
    Raid5,
    Raid6,
    Raid10,
}

impl RaidLevel {
    pub const ALL: [Self; 5] = [
        Self::Raid0,
        Self::Raid1,
        Self::Raid5,
        Self::Raid6,
        Self::Raid10,
    ];

    /// `as_str` returns the canonical document form (`"0"`, `"1"`, `"5"`, `"6"`, `"10"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raid0 => "0",
            Self::Raid1 => "1",
            Self::Raid5 => "5",
            Self::Raid6 => "6",
            Self::Raid10 => "10",
        }
    }

    /// `min_disks` returns the smallest array this level can be built on.
    #[must_use]
    pub const fn min_disks(self) -> usize {
        match self {
            Self::Raid0 | Self::Raid1 => 2,
            Self::Raid5 => 3,
            Self::Raid6 | Self::Raid10 => 4,
        }
    }

    /// `max_disks` returns the widest array this level accepts.
    #[must_use]
    pub const fn max_disks(self) -> usize {
        match self {
            Self::Raid10 => MAX_RAID10_DISKS,
            Self::Raid6 => MAX_RAID6_DISKS,
            Self::Raid0 | Self::Raid1 | Self::Raid5 => usize::MAX,
        }
    }
}

impl fmt::Display for RaidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaidLevel {
    type Err = RaidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "0" => Ok(Self::Raid0),
            "1" => Ok(Self::Raid1),
            "5" => Ok(Self::Raid5),
            "6" => Ok(Self::Raid6),
            "10" => Ok(Self::Raid10),
            other => Err(RaidError::Config(format!(
                "unsupported RAID level {other:?}; choose 0, 1, 5, 6, or 10"
            ))),
        }
    }
}

impl TryFrom<String> for RaidLevel {
    type Error = RaidError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RaidLevel> for String {
    fn from(level: RaidLevel) -> Self {
        level.as_str().to_owned()
    }
}

/// ArrayConfig is a validated `(raid_level, num_disks)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    level: RaidLevel,
    num_disks: usize,
}

impl ArrayConfig {
    /// `new` validates the disk count against the level's requirements.
    ///
    /// # Errors
    /// Returns [`RaidError::Config`] when the combination cannot form an array.
    pub fn new(level: RaidLevel, num_disks: usize) -> Result<Self> {
        if num_disks < level.min_disks() {
            return Err(RaidError::Config(format!(
                "RAID {level} requires at least {} disks (got {num_disks})",
                level.min_disks()
            )));
        }
        if num_disks > level.max_disks() {
            return Err(RaidError::Config(format!(
                "RAID {level} supports at most {} disks (got {num_disks})",
                level.max_disks()
            )));
        }
        if level == RaidLevel::Raid10 && num_disks % 2 != 0 {
            return Err(RaidError::Config(format!(
                "RAID 10 requires an even number of disks (got {num_disks})"
            )));
        }
        Ok(Self { level, num_disks })
    }

    #[must_use]
    pub const fn level(&self) -> RaidLevel {
        self.level
    }

    #[must_use]
    pub const fn num_disks(&self) -> usize {
        self.num_disks
    }

    /// `stripe_size` returns how many input symbols one stripe row consumes.
    ///
    /// RAID0 and RAID1 share RAID5's `num_disks - 1`; only the write cap depends on it.
    #[must_use]
    pub const fn stripe_size(&self) -> usize {
        match self.level {
            RaidLevel::Raid0 | RaidLevel::Raid1 | RaidLevel::Raid5 => self.num_disks - 1,
            RaidLevel::Raid6 => self.num_disks - 2,
            RaidLevel::Raid10 => self.num_disks / 2,
        }
    }

    /// `write_limit` returns the per-call input cap; longer inputs are truncated.
    #[must_use]
    pub const fn write_limit(&self) -> usize {
        self.stripe_size() * WRITE_LIMIT_STRIPES
    }
}
