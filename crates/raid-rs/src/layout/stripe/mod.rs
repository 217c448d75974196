//! Stripe layout implementations for supported RAID modes.

pub mod raid0;
pub mod raid1;
pub mod raid10;
pub mod raid5;
pub mod raid6;
pub mod row;
pub mod traits;

use crate::config::{ArrayConfig, RaidLevel};
use crate::error::{RaidError, Result};
use crate::layout::block::Block;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

/// `for_config` returns the layout for a validated configuration.
#[must_use]
pub fn for_config(config: ArrayConfig) -> Box<dyn Stripe> {
    match config.level() {
        RaidLevel::Raid0 => Box::new(raid0::RAID0::new(config)),
        RaidLevel::Raid1 => Box::new(raid1::RAID1::new(config)),
        RaidLevel::Raid5 => Box::new(raid5::RAID5::new(config)),
        RaidLevel::Raid6 => Box::new(raid6::RAID6::new(config)),
        RaidLevel::Raid10 => Box::new(raid10::RAID10::new(config)),
    }
}

/// `parity_slot` returns the disk holding P for a stripe row; it rotates one disk per row.
#[must_use]
pub const fn parity_slot(row: usize, num_disks: usize) -> usize {
    row % num_disks
}

/// `striped_growth` counts how many of `symbols` round-robin positions land on
/// each of `width` disks.
pub(crate) fn striped_growth(symbols: usize, width: usize) -> Vec<usize> {
    (0..width)
        .map(|d| symbols / width + usize::from(d < symbols % width))
        .collect()
}

/// Slot is the kind of block a stripe cell may hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Data,
    /// Data, or padding closing a short row.
    PaddedData,
    P,
    Q,
}

impl Slot {
    const fn admits(self, block: &Block) -> bool {
        match self {
            Self::Data => block.is_data(),
            Self::PaddedData => block.is_data() || block.is_padding(),
            Self::P => matches!(block, Block::ParityP(_)),
            Self::Q => matches!(block, Block::ParityQ(_)),
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::PaddedData => "data or padding",
            Self::P => "P parity",
            Self::Q => "Q parity",
        }
    }
}

/// `check_slots` verifies every block of every healthy disk against `slot(disk, row)`.
///
/// Failed disks hold only placeholders and are skipped.
pub(crate) fn check_slots(disks: &[Disk], slot: impl Fn(usize, usize) -> Slot) -> Result<()> {
    for (d, disk) in disks.iter().enumerate().filter(|(_, disk)| !disk.is_failed()) {
        for (row, block) in disk.blocks().iter().enumerate() {
            let expected = slot(d, row);
            if !expected.admits(block) {
                return Err(RaidError::Document(format!(
                    "disk {d} row {row} holds {block}, expected {}",
                    expected.describe()
                )));
            }
        }
    }
    Ok(())
}

/// `check_mirror` requires disks `a` and `b` to hold the same bytes unless either is failed.
pub(crate) fn check_mirror(disks: &[Disk], a: usize, b: usize) -> Result<()> {
    let (x, y) = (&disks[a], &disks[b]);
    if x.is_failed() || y.is_failed() {
        return Ok(());
    }
    if x.blocks().iter().map(Block::value).eq(y.blocks().iter().map(Block::value)) {
        return Ok(());
    }
    Err(RaidError::Document(format!("disk {b} does not mirror disk {a}")))
}
