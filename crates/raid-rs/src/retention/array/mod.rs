
use std::fmt::Write;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::{ArrayConfig, MAX_BLOCKS_PER_DISK, RaidLevel};
use crate::error::{RaidError, Result};
use crate::layout::stripe::for_config;
use crate::layout::stripe::traits::restore::Rebuilt;
use crate::layout::stripe::traits::stripe::Stripe;
use crate::metrics::{self, ArrayOp, OpType};
use crate::retention::disk::Disk;
use crate::retention::document::Snapshot;
use crate::retention::failure::FailureSet;

/// WriteReport summarizes one accepted write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReport {
    /// Symbols laid out.
    pub accepted: usize,
    /// Trailing symbols dropped by the per-call cap.
    pub truncated: usize,
    /// Largest number of blocks any single disk gained.
    pub rows: usize,
    pub elapsed: Duration,
}

/// RecoveryReport lists every disk rebuilt by a recovery, with its new contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    pub rebuilt: Vec<Rebuilt>,
}

impl RecoveryReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rebuilt.is_empty()
    }
}

/// Array owns the disks of one simulation run and applies writes, failures and recovery.
pub struct Array {
    config: ArrayConfig,
    layout: Box<dyn Stripe>,
    disks: Vec<Disk>,
    last_write: Option<Duration>,
}

impl Array {
    /// `new` builds an empty array.
    ///
    /// # Errors
    /// Returns [`RaidError::Config`] for an invalid level/disk-count combination.
    pub fn new(level: RaidLevel, num_disks: usize) -> Result<Self> {
        Ok(Self::from_config(ArrayConfig::new(level, num_disks)?))
    }

    #[must_use]
    pub fn from_config(config: ArrayConfig) -> Self {
        Self {
            config,
            layout: for_config(config),
            disks: vec![Disk::new(); config.num_disks()],
            last_write: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ArrayConfig {
        &self.config
    }

    #[must_use]
    pub const fn level(&self) -> RaidLevel {
        self.config.level()
    }

    #[must_use]
    pub const fn num_disks(&self) -> usize {
        self.config.num_disks()
    }

    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Elapsed wall-clock time of the last successful write.
    #[must_use]
    pub const fn last_write_elapsed(&self) -> Option<Duration> {
        self.last_write
    }

    #[must_use]
    pub fn failure_set(&self) -> FailureSet {
        self.disks
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_failed())
            .map(|(i, _)| i)
            .collect()
    }

    /// `write` lays `data` out across the disks.
    ///
    /// Input beyond [`ArrayConfig::write_limit`] is dropped. Failed disks receive
    /// placeholders so that they stay aligned with the survivors.
    ///
    /// # Errors
    /// Returns [`RaidError::Capacity`] if any disk would exceed [`MAX_BLOCKS_PER_DISK`];
    /// the array is left untouched.
    pub fn write(&mut self, data: &[u8]) -> Result<WriteReport> {
        let start = Instant::now();
        let accepted = data.len().min(self.config.write_limit());
        let truncated = data.len() - accepted;
        if truncated > 0 {
            warn!(
                level = %self.level(),
                limit = accepted,
                dropped = truncated,
                "write input truncated to per-call limit"
            );
        }

        let growth = self.layout.growth(accepted);
        if let Err(err) = self.check_capacity(&growth) {
            self.record(OpType::Write, accepted, start, true);
            return Err(err);
        }

        self.layout.write(&mut self.disks, &data[..accepted]);
        let elapsed = start.elapsed();
        self.last_write = Some(elapsed);
        self.record(OpType::Write, accepted, start, false);

        let rows = growth.iter().copied().max().unwrap_or(0);
        debug!(level = %self.level(), disks = self.num_disks(), symbols = accepted, rows, "write");
        Ok(WriteReport {
            accepted,
            truncated,
            rows,
            elapsed,
        })
    }

    fn check_capacity(&self, growth: &[usize]) -> Result<()> {
        for (disk, (d, extra)) in self.disks.iter().zip(growth).enumerate() {
            let requested = d.len() + extra;
            if requested > MAX_BLOCKS_PER_DISK {
                return Err(RaidError::Capacity {
                    disk,
                    requested,
                    max: MAX_BLOCKS_PER_DISK,
                });
            }
        }
        Ok(())
    }

    /// `fail_disks` marks disks failed, replacing their blocks with placeholders.
    ///
    /// # Errors
    /// Returns [`RaidError::InvalidIndex`] before touching any disk if an index is out of range.
    pub fn fail_disks(&mut self, indices: &[usize]) -> Result<FailureSet> {
        let start = Instant::now();
        if let Some(&index) = indices.iter().find(|&&i| i >= self.num_disks()) {
            self.record(OpType::Fail, 0, start, true);
            return Err(RaidError::InvalidIndex {
                index,
                num_disks: self.num_disks(),
            });
        }

        let set: FailureSet = indices.iter().copied().collect();
        for i in set.iter() {
            self.disks[i].fail();
        }
        self.record(OpType::Fail, set.len(), start, false);
        debug!(level = %self.level(), failed = ?set.to_vec(), "disks marked failed");
        Ok(set)
    }

    /// `recover` rebuilds every failed disk from the survivors.
    ///
    /// Tolerance is checked against the current failure set. On rejection the
    /// disks stay marked failed.
    ///
    /// # Errors
    /// Returns [`RaidError::ToleranceExceeded`] when the level cannot rebuild the set,
    /// or a solver error from the parity codecs. No disk is replaced on error.
    pub fn recover(&mut self) -> Result<RecoveryReport> {
        let start = Instant::now();
        let failed = self.failure_set();
        let result = self.rebuild(&failed);
        let blocks = result
            .as_ref()
            .map_or(0, |r| r.rebuilt.iter().map(|b| b.blocks.len()).sum());
        self.record(OpType::Recover, blocks, start, result.is_err());
        result
    }

    /// `fail_and_recover` marks `indices` failed, then recovers.
    ///
    /// # Errors
    /// See [`Array::fail_disks`] and [`Array::recover`].
    pub fn fail_and_recover(&mut self, indices: &[usize]) -> Result<RecoveryReport> {
        self.fail_disks(indices)?;
        self.recover()
    }

    fn rebuild(&mut self, failed: &FailureSet) -> Result<RecoveryReport> {
        if failed.is_empty() {
            return Ok(RecoveryReport::default());
        }
        let level = self.level();
        let Some(restorer) = self.layout.as_restore() else {
            warn!(level = %level, failed = ?failed.to_vec(), "no redundancy; data lost");
            return Err(RaidError::tolerance(
                level,
                &failed.to_vec(),
                "RAID 0 has no redundancy; data on failed disks is permanently lost",
            ));
        };

        if let Err(err) = restorer.check(failed) {
            warn!(level = %level, failed = ?failed.to_vec(), %err, "recovery rejected");
            return Err(err);
        }
        let rebuilt = restorer.restore(&self.disks, failed)?;

        for r in &rebuilt {
            self.disks[r.disk].replace(r.blocks.clone());
        }
        debug!(
            level = %level,
            rebuilt = ?failed.to_vec(),
            rows = self.disks.first().map_or(0, Disk::len),
            "recovered"
        );
        Ok(RecoveryReport { rebuilt })
    }

    fn record(&self, op: OpType, units: usize, start: Instant, error: bool) {
        metrics::record_array_op(ArrayOp {
            op,
            level: self.level(),
            units: units as u64,
            latency_seconds: start.elapsed().as_secs_f64(),
            error,
        });
    }

    /// `render` returns every disk's block tokens, for display.
    #[must_use]
    pub fn render(&self) -> Vec<Vec<String>> {
        self.disks.iter().map(Disk::render).collect()
    }

    #[must_use]
    pub fn status_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "RAID {} with {} disks", self.level(), self.num_disks());
        for (i, d) in self.disks.iter().enumerate() {
            let state = if d.is_failed() { "FAILED" } else { "OK" };
            let _ = writeln!(out, "disk {i}: {state} (blocks={})", d.len());
        }
        out
    }

    /// `snapshot` captures the array as a persistable document.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            raid_level: self.level(),
            num_disks: self.num_disks(),
            disks: self.disks.iter().map(|d| d.blocks().to_vec()).collect(),
        }
    }

    /// `from_snapshot` rebuilds an array from a document.
    ///
    /// # Errors
    /// Returns [`RaidError::Config`] for an invalid shape, [`RaidError::Capacity`] for
    /// overfull disks and [`RaidError::Document`] for inconsistent disk lists, blocks
    /// outside their layout slot or mirrors that disagree.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let config = ArrayConfig::new(snapshot.raid_level, snapshot.num_disks)?;
        if snapshot.disks.len() != config.num_disks() {
            return Err(RaidError::Document(format!(
                "num_disks is {} but {} disk lists are present",
                config.num_disks(),
                snapshot.disks.len()
            )));
        }
        for (disk, blocks) in snapshot.disks.iter().enumerate() {
            if blocks.len() > MAX_BLOCKS_PER_DISK {
                return Err(RaidError::Capacity {
                    disk,
                    requested: blocks.len(),
                    max: MAX_BLOCKS_PER_DISK,
                });
            }
        }

        let striped = matches!(config.level(), RaidLevel::Raid0 | RaidLevel::Raid10);
        let first = snapshot.disks.first().map_or(0, Vec::len);
        if !striped && snapshot.disks.iter().any(|d| d.len() != first) {
            return Err(RaidError::Document(format!(
                "RAID {} disks must all have the same length",
                config.level()
            )));
        }

        let mut array = Self::from_config(config);
        array.disks = snapshot
            .disks
            .iter()
            .map(|blocks| Disk::from_blocks(blocks.clone()))
            .collect();
        array.layout.validate(&array.disks)?;
        Ok(array)
    }
}
