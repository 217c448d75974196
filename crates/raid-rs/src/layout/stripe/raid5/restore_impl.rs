use crate::error::{RaidError, Result};
use crate::layout::block::Block;
use crate::layout::parity::xor_parity;
use crate::layout::stripe::raid5::RAID5;
use crate::layout::stripe::parity_slot;
use crate::layout::stripe::row::{Row, data_slots, settle_data};
use crate::layout::stripe::traits::restore::{Rebuilt, Restore};
use crate::retention::disk::Disk;
use crate::retention::failure::FailureSet;

impl RAID5 {
    fn restore_cell(&self, row: &Row, index: usize, lost: usize) -> Block {
        let n = self.config.num_disks();
        let p_slot = parity_slot(index, n);
        let slots = data_slots(n, &[p_slot]);
        let survivors = slots.iter().filter_map(|&d| row.cell(d));

        if lost == p_slot {
            return Block::ParityP(xor_parity(survivors));
        }

        let p = row.cell(p_slot).and_then(Block::value).unwrap_or(0);
        let byte = xor_parity(survivors) ^ p;
        settle_data(&slots, row, &[(lost, byte)])
            .pop()
            .map_or(Block::recovered(byte), |(_, block)| block)
    }
}

impl Restore for RAID5 {
    fn check(&self, failed: &FailureSet) -> Result<()> {
        if failed.len() > 1 {
            return Err(RaidError::tolerance(
                self.config.level(),
                &failed.to_vec(),
                "RAID 5 can only tolerate 1 disk failure",
            ));
        }
        Ok(())
    }

    fn restore(&self, disks: &[Disk], failed: &FailureSet) -> Result<Vec<Rebuilt>> {
        let rows = disks.first().map_or(0, Disk::len);
        Ok(failed
            .iter()
            .map(|lost| Rebuilt {
                disk: lost,
                blocks: (0..rows)
                    .map(|index| {
                        let row = Row::gather(disks, failed, index);
                        self.restore_cell(&row, index, lost)
                    })
                    .collect(),
            })
            .collect())
    }
}
