#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use raid_rs::RaidLevel;

#[derive(Parser, Debug)]
#[command(name = "raid-cli", author, version, about)]
pub struct Cli {
    /// Log every array operation (write, fail, recover) with its latency.
    #[arg(long, global = true, env = "RAID_TRACE_OPS")]
    pub trace_ops: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a fresh array, write once, optionally fail and recover disks.
    Simulate(SimulateArgs),

    /// Write an empty array document.
    Create(CreateArgs),

    /// Append data to a saved array.
    Write(WriteArgs),

    /// Fail disks of a saved array and try to recover them.
    Fail(FailArgs),

    /// Print the status and layout of a saved array.
    Show(StateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ArrayArgs {
    #[arg(long, env = "RAID_LEVEL", value_enum, default_value_t = RaidMode::Raid5)]
    pub raid: RaidMode,

    #[arg(long, env = "RAID_DISKS", default_value_t = 3)]
    pub disks: usize,
}

#[derive(Args, Debug, Clone)]
pub struct StateArgs {
    #[arg(long, env = "RAID_STATE_PATH", default_value = "raid-state.json")]
    pub state: PathBuf,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    #[arg(long)]
    pub data: String,

    /// Comma-separated disk indices to fail after the write.
    #[arg(long, value_delimiter = ',')]
    pub fail: Vec<usize>,

    /// Save the final state to this path.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    #[arg(long)]
    pub data: String,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args, Debug)]
pub struct FailArgs {
    /// Comma-separated disk indices.
    #[arg(long, value_delimiter = ',', required = true)]
    pub disks: Vec<usize>,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RaidMode {
    #[value(name = "0", alias = "raid0")]
    Raid0,
    #[value(name = "1", alias = "raid1")]
    Raid1,
    #[value(name = "5", alias = "raid5")]
    Raid5,
    #[value(name = "6", alias = "raid6")]
    Raid6,
    #[value(name = "10", alias = "raid10")]
    Raid10,
}

impl From<RaidMode> for RaidLevel {
    fn from(mode: RaidMode) -> Self {
        match mode {
            RaidMode::Raid0 => Self::Raid0,
            RaidMode::Raid1 => Self::Raid1,
            RaidMode::Raid5 => Self::Raid5,
            RaidMode::Raid6 => Self::Raid6,
            RaidMode::Raid10 => Self::Raid10,
        }
    }
}
