use crate::config::ArrayConfig;
use crate::error::Result;
use crate::layout::block::Block;
use crate::layout::parity::xor_parity;
use crate::layout::stripe::raid5::RAID5;
use crate::layout::stripe::{Slot, check_slots, parity_slot};
use crate::layout::stripe::traits::restore::Restore;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

impl Stripe for RAID5 {
    fn config(&self) -> &ArrayConfig {
        &self.config
    }

    fn growth(&self, symbols: usize) -> Vec<usize> {
        let rows = symbols.div_ceil(self.config.stripe_size());
        vec![rows; self.config.num_disks()]
    }

    fn write(&self, disks: &mut [Disk], data: &[u8]) {
        let n = disks.len();
        let width = self.config.stripe_size();
        let mut row = disks.first().map_or(0, Disk::len);

        for chunk in data.chunks(width) {
            let mut cells: Vec<Block> = chunk.iter().map(|&b| Block::data(b)).collect();
            cells.resize(width, Block::Padding);
            let p = xor_parity(&cells);
            let p_slot = parity_slot(row, n);

            let mut cells = cells.into_iter();
            for (d, disk) in disks.iter_mut().enumerate() {
                let block = if d == p_slot {
                    Block::ParityP(p)
                } else {
                    cells.next().unwrap_or(Block::Padding)
                };
                disk.push(block);
            }
            row += 1;
        }
    }

    fn validate(&self, disks: &[Disk]) -> Result<()> {
        let n = self.config.num_disks();
        check_slots(disks, |d, row| {
            if d == parity_slot(row, n) {
                Slot::P
            } else {
                Slot::PaddedData
            }
        })
    }

    fn as_restore(&self) -> Option<&dyn Restore> {
        Some(self)
    }
}
