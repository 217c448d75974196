use crate::config::ArrayConfig;
use crate::error::Result;
use crate::layout::block::Block;
use crate::layout::parity::DualParity;
use crate::layout::stripe::raid6::RAID6;
use crate::layout::stripe::row::data_slots;
use crate::layout::stripe::{Slot, check_slots};
use crate::layout::stripe::traits::restore::Restore;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::retention::disk::Disk;

impl Stripe for RAID6 {
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
            let (p_slot, q_slot) = self.parity_slots(row);
            let slots = data_slots(n, &[p_slot, q_slot]);

            let mut cells = vec![Block::Padding; n];
            for (&d, &byte) in slots.iter().zip(chunk) {
                cells[d] = Block::data(byte);
            }
            let parity = DualParity::compute(slots.iter().map(|&d| (d, cells[d].xor_term())));
            cells[p_slot] = Block::ParityP(parity.p);
            cells[q_slot] = Block::ParityQ(parity.q);

            for (disk, block) in disks.iter_mut().zip(cells) {
                disk.push(block);
            }
            row += 1;
        }
    }

    fn validate(&self, disks: &[Disk]) -> Result<()> {
        check_slots(disks, |d, row| match self.parity_slots(row) {
            (p, _) if d == p => Slot::P,
            (_, q) if d == q => Slot::Q,
            _ => Slot::PaddedData,
        })
    }

    fn as_restore(&self) -> Option<&dyn Restore> {
        Some(self)
    }
}
