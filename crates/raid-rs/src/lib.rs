//! RAID 0/1/5/6/10 layout, parity and recovery engine used by the simulator.
#![allow(clippy::cargo_common_metadata)]

pub mod config;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod retention;

pub use config::{ArrayConfig, RaidLevel};
pub use error::{RaidError, Result};
pub use retention::array::{Array, RecoveryReport, WriteReport};
pub use retention::document::Snapshot;
