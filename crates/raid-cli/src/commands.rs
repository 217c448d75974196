#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;

use std::path::Path;

use anyhow::{Context, Result, bail};
use raid_rs::retention::array::Array;
use raid_rs::retention::document;
use tracing::info;

use crate::cli::{Command, CreateArgs, FailArgs, SimulateArgs, StateArgs, WriteArgs};
use crate::render;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Simulate(args) => simulate(&args),
        Command::Create(args) => create(&args),
        Command::Write(args) => write(&args),
        Command::Fail(args) => fail(&args),
        Command::Show(args) => show(&args),
    }
}

fn load(state: &StateArgs) -> Result<Array> {
    let snapshot = document::load(&state.state)?;
    Array::from_snapshot(&snapshot)
        .with_context(|| format!("invalid array document {}", state.state.display()))
}

fn save(path: &Path, array: &Array) -> Result<()> {
    document::save(path, &array.snapshot())?;
    info!(path = %path.display(), "array state saved");
    Ok(())
}

/// `symbols` maps each character of `text` to one symbol byte.
fn symbols(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| match u8::try_from(c) {
            Ok(byte) => Ok(byte),
            Err(_) => bail!("character {c:?} does not fit in one symbol (U+0000..=U+00FF)"),
        })
        .collect()
}

pub fn simulate(args: &SimulateArgs) -> Result<()> {
    let data = symbols(&args.data)?;
    let mut array = Array::new(args.array.raid.into(), args.array.disks)?;
    let report = array.write(&data)?;
    print!("{}", render::layout(&array));
    print!("{}", render::write_report(&report));

    let result = if args.fail.is_empty() {
        Ok(())
    } else {
        recover(&mut array, &args.fail)
    };

    if let Some(path) = &args.save {
        save(path, &array)?;
    }
    result
}

pub fn create(args: &CreateArgs) -> Result<()> {
    let array = Array::new(args.array.raid.into(), args.array.disks)?;
    save(&args.state.state, &array)?;
    print!("{}", array.status_string());
    Ok(())
}

pub fn write(args: &WriteArgs) -> Result<()> {
    let data = symbols(&args.data)?;
    let mut array = load(&args.state)?;
    let report = array.write(&data)?;
    save(&args.state.state, &array)?;
    print!("{}", render::layout(&array));
    print!("{}", render::write_report(&report));
    Ok(())
}

/// `fail` saves even when recovery is rejected; failure marking persists.
pub fn fail(args: &FailArgs) -> Result<()> {
    let mut array = load(&args.state)?;
    let result = recover(&mut array, &args.disks);
    save(&args.state.state, &array)?;
    result
}

pub fn show(args: &StateArgs) -> Result<()> {
    let array = load(args)?;
    print!("{}", array.status_string());
    print!("{}", render::layout(&array));
    Ok(())
}

fn recover(array: &mut Array, indices: &[usize]) -> Result<()> {
    match array.fail_and_recover(indices) {
        Ok(report) => {
            print!("{}", render::recovery(&report));
            print!("{}", render::layout(array));
            Ok(())
        }
        Err(err) => {
            print!("{}", render::layout(array));
            Err(err).context("recovery failed")
        }
    }
}
