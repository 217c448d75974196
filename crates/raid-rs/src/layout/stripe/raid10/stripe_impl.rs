use crate::config::ArrayConfig;
use crate::error::Result;
use crate::layout::block::Block;
use crate::layout::stripe::raid10::RAID10;
use crate::layout::stripe::{Slot, check_mirror, check_slots, striped_growth};
use crate::layout::stripe::traits::restore::Restore;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

impl Stripe for RAID10 {
    fn config(&self) -> &ArrayConfig {
        &self.config
    }

    fn growth(&self, symbols: usize) -> Vec<usize> {
        let primary = striped_growth(symbols, self.half());
        primary.iter().chain(primary.iter()).copied().collect()
    }

    fn write(&self, disks: &mut [Disk], data: &[u8]) {
        let half = self.half();
        for (i, &byte) in data.iter().enumerate() {
            let primary = i % half;
            disks[primary].push(Block::data(byte));
            disks[primary + half].push(Block::data(byte));
        }
    }

    fn validate(&self, disks: &[Disk]) -> Result<()> {
        check_slots(disks, |_, _| Slot::Data)?;
        (0..self.half()).try_for_each(|i| check_mirror(disks, i, self.mirror_of(i)))
    }

    fn as_restore(&self) -> Option<&dyn Restore> {
        Some(self)
    }
}
