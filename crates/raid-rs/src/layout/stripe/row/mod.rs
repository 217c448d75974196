//! Stripe-row views used by the parity layouts during recovery.


use crate::layout::block::Block;
use crate::retention::disk::Disk;
use crate::retention::failure::FailureSet;

/// Row is one stripe row as seen by recovery: survivors' blocks, `None` for lost cells.
pub struct Row {
    cells: Vec<Option<Block>>,
}

impl Row {
    /// `gather` reads row `index` from every disk outside the failure set.
    ///
    /// # Arguments
    /// * `disks` - All disks of the array.
    /// * `failed` - Disks whose cells are lost.
    /// * `index` - Stripe row to read.
    #[must_use]
    pub fn gather(disks: &[Disk], failed: &FailureSet, index: usize) -> Self {
        let cells = disks
            .iter()
            .enumerate()
            .map(|(d, disk)| {
                if failed.contains(d) {
                    None
                } else {
                    Some(disk.get(index).copied().unwrap_or(Block::Padding))
                }
            })
            .collect();
        Self { cells }
    }

    #[must_use]
    pub fn cell(&self, disk: usize) -> Option<&Block> {
        self.cells.get(disk).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn is_lost(&self, disk: usize) -> bool {
        self.cell(disk).is_none()
    }

    /// `surviving_data` yields `(disk, byte)` for every readable cell in `slots`.
    ///
    /// Padding contributes a zero byte.
    pub fn surviving_data<'a>(
        &'a self,
        slots: &'a [usize],
    ) -> impl Iterator<Item = (usize, u8)> + 'a {
        slots
            .iter()
            .filter_map(move |&d| self.cell(d).map(|b| (d, b.xor_term())))
    }
}

/// `data_slots` lists the disks that carry data in a row, in ascending order.
#[must_use]
pub fn data_slots(num_disks: usize, parity: &[usize]) -> Vec<usize> {
    (0..num_disks).filter(|d| !parity.contains(d)).collect()
}

/// `settle_data` turns solved bytes for lost data cells back into blocks.
///
/// A row's padding always trails its data cells, and the first data cell is
/// always real data, so a lost cell is data when any later cell is data and
/// padding when any earlier survivor is padding. A lost cell with neither
/// neighbour as evidence is padding exactly when it solved to zero.
///
/// # Arguments
/// * `slots` - The row's data disks in ascending order.
/// * `row` - The row being rebuilt.
/// * `solved` - `(disk, byte)` for each lost data cell.
#[must_use]
pub fn settle_data(slots: &[usize], row: &Row, solved: &[(usize, u8)]) -> Vec<(usize, Block)> {
    let solved_byte = |disk: usize| solved.iter().find(|(d, _)| *d == disk).map(|(_, b)| *b);

    let mut settled = Vec::with_capacity(solved.len());
    let mut later_data = false;
    for (order, &disk) in slots.iter().enumerate().rev() {
        if let Some(block) = row.cell(disk) {
            later_data |= block.is_data();
            continue;
        }
        let Some(byte) = solved_byte(disk) else {
            continue;
        };
        let earlier_padding = slots[..order]
            .iter()
            .any(|&d| row.cell(d).is_some_and(Block::is_padding));

        let is_data = order == 0 || later_data || (!earlier_padding && byte != 0);
        let block = if is_data {
            later_data = true;
            Block::recovered(byte)
        } else {
            Block::Padding
        };
        settled.push((disk, block));
    }
    settled.reverse();
    settled
}
