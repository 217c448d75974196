use crate::error::{RaidError, Result};
use crate::layout::block::Block;
use crate::layout::parity::{self, DualParity};
use crate::layout::stripe::raid6::RAID6;
use crate::layout::stripe::row::{Row, data_slots, settle_data};
use crate::layout::stripe::traits::restore::{Rebuilt, Restore};
use crate::retention::disk::Disk;
use crate::retention::failure::FailureSet;

impl RAID6 {
    /// `restore_row` rebuilds the lost cells of one row, returning `(disk, block)` pairs.
    ///
    /// Lost data cells are solved first from whichever parity survives; lost
    /// parity cells are then recomputed from the completed data.
    fn restore_row(&self, row: &Row, index: usize) -> Result<Vec<(usize, Block)>> {
        let n = self.config.num_disks();
        let (p_slot, q_slot) = self.parity_slots(index);
        let slots = data_slots(n, &[p_slot, q_slot]);

        let known = DualParity::compute(row.surviving_data(&slots));
        let lost_data: Vec<usize> = slots.iter().copied().filter(|&d| row.is_lost(d)).collect();
        let stored_p = row.cell(p_slot).and_then(Block::value);
        let stored_q = row.cell(q_slot).and_then(Block::value);

        let solved: Vec<(usize, u8)> = match lost_data.as_slice() {
            [] => Vec::new(),
            [d] => {
                let byte = match (stored_p, stored_q) {
                    (Some(p), _) => p ^ known.p,
                    (None, Some(q)) => parity::solve_from_q(q ^ known.q, parity::coefficient(*d))?,
                    (None, None) => return Err(self.unsolvable(index)),
                };
                vec![(*d, byte)]
            }
            [d1, d2] => {
                let (Some(p), Some(q)) = (stored_p, stored_q) else {
                    return Err(self.unsolvable(index));
                };
                let residual = DualParity { p, q }.residual(&known);
                let (x, y) = parity::solve_two_data(
                    residual,
                    parity::coefficient(*d1),
                    parity::coefficient(*d2),
                )?;
                vec![(*d1, x), (*d2, y)]
            }
            _ => return Err(self.unsolvable(index)),
        };

        let mut full = known;
        for &(d, byte) in &solved {
            full.accumulate(d, byte);
        }

        let mut cells = settle_data(&slots, row, &solved);
        if row.is_lost(p_slot) {
            cells.push((p_slot, Block::ParityP(full.p)));
        }
        if row.is_lost(q_slot) {
            cells.push((q_slot, Block::ParityQ(full.q)));
        }
        Ok(cells)
    }

    fn unsolvable(&self, index: usize) -> RaidError {
        RaidError::tolerance(
            self.config.level(),
            &[],
            format!("stripe row {index} lost more cells than its parity covers"),
        )
    }
}

impl Restore for RAID6 {
    fn check(&self, failed: &FailureSet) -> Result<()> {
        if failed.len() > 2 {
            return Err(RaidError::tolerance(
                self.config.level(),
                &failed.to_vec(),
                "RAID 6 can only tolerate up to 2 disk failures",
            ));
        }
        Ok(())
    }

    fn restore(&self, disks: &[Disk], failed: &FailureSet) -> Result<Vec<Rebuilt>> {
        let rows = disks.first().map_or(0, Disk::len);
        let mut rebuilt: Vec<Rebuilt> = failed
            .iter()
            .map(|disk| Rebuilt {
                disk,
                blocks: Vec::with_capacity(rows),
            })
            .collect();

        for index in 0..rows {
            let row = Row::gather(disks, failed, index);
            for (disk, block) in self.restore_row(&row, index)? {
                if let Some(target) = rebuilt.iter_mut().find(|r| r.disk == disk) {
                    target.blocks.push(block);
                }
            }
        }
        Ok(rebuilt)
    }
}
