
use crate::layout::block::Block;

/// Disk is an ordered sequence of blocks plus its failure state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disk {
    blocks: Vec<Block>,
    failed: bool,
}

impl Disk {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            failed: false,
        }
    }

    /// `from_blocks` rebuilds a disk from persisted blocks.
    ///
    /// A non-empty disk made only of placeholders is treated as failed.
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let failed = !blocks.is_empty() && blocks.iter().all(Block::is_failed);
        Self { blocks, failed }
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Block> {
        self.blocks.get(i)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.failed
    }

    /// Append a block. A failed disk stores a placeholder instead.
    pub fn push(&mut self, block: Block) {
        let block = if self.failed { Block::Failed } else { block };
        self.blocks.push(block);
    }

    /// Mark this disk as failed: every block becomes a placeholder, length is kept.
    pub fn fail(&mut self) {
        self.blocks.fill(Block::Failed);
        self.failed = true;
    }

    /// Replace the contents with a rebuilt sequence and bring the disk back online.
    pub fn replace(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
        self.failed = false;
    }

    /// `render` returns the text token of every block.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.blocks.iter().map(ToString::to_string).collect()
    }
}
