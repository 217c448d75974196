use std::fmt::Write;

use raid_rs::retention::array::{Array, RecoveryReport, WriteReport};

/// `layout` prints one line per disk with its block tokens.
pub fn layout(array: &Array) -> String {
    let mut out = String::new();
    for (i, disk) in array.render().iter().enumerate() {
        let _ = writeln!(out, "Disk {i}: [{}]", disk.join(", "));
    }
    out
}

pub fn write_report(report: &WriteReport) -> String {
    let mut out = format!(
        "Write completed in {:.6} seconds ({} symbols, {} rows)\n",
        report.elapsed.as_secs_f64(),
        report.accepted,
        report.rows
    );
    if report.truncated > 0 {
        let _ = writeln!(out, "Input truncated: {} trailing symbols dropped", report.truncated);
    }
    out
}

pub fn recovery(report: &RecoveryReport) -> String {
    if report.is_empty() {
        return "No failed disks to recover\n".to_owned();
    }
    let mut out = String::new();
    for r in &report.rebuilt {
        let tokens: Vec<String> = r.blocks.iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "Disk {} recovered successfully! Recovered Data: [{}]",
            r.disk,
            tokens.join(", ")
        );
    }
    out
}
