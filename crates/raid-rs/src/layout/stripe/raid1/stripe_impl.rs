use crate::config::ArrayConfig;
use crate::error::Result;
use crate::layout::block::Block;
use crate::layout::stripe::raid1::RAID1;
use crate::layout::stripe::{Slot, check_mirror, check_slots};
use crate::layout::stripe::traits::restore::Restore;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

impl Stripe for RAID1 {
    fn config(&self) -> &ArrayConfig {
        &self.config
    }

    fn growth(&self, symbols: usize) -> Vec<usize> {
        vec![symbols; self.config.num_disks()]
    }

    fn write(&self, disks: &mut [Disk], data: &[u8]) {
        for &byte in data {
            for disk in disks.iter_mut() {
                disk.push(Block::data(byte));
            }
        }
    }

    fn validate(&self, disks: &[Disk]) -> Result<()> {
        check_slots(disks, |_, _| Slot::Data)?;
        let Some(first) = disks.iter().position(|d| !d.is_failed()) else {
            return Ok(());
        };
        (first + 1..disks.len()).try_for_each(|d| check_mirror(disks, first, d))
    }

    fn as_restore(&self) -> Option<&dyn Restore> {
        Some(self)
    }
}
