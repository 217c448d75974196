use crate::config::ArrayConfig;
use crate::error::Result;
use crate::layout::block::Block;
use crate::layout::stripe::raid0::RAID0;
use crate::layout::stripe::{Slot, check_slots, striped_growth};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

impl Stripe for RAID0 {
    fn config(&self) -> &ArrayConfig {
        &self.config
    }

    fn growth(&self, symbols: usize) -> Vec<usize> {
        striped_growth(symbols, self.config.num_disks())
    }

    fn write(&self, disks: &mut [Disk], data: &[u8]) {
        let n = disks.len();
        for (i, &byte) in data.iter().enumerate() {
            disks[i % n].push(Block::data(byte));
        }
    }

    fn validate(&self, disks: &[Disk]) -> Result<()> {
        check_slots(disks, |_, _| Slot::Data)
    }
}
