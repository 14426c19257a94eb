//! Per-trial CSV report.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::experiment::TrialMetrics;

pub const CSV_HEADER: &str = "trial,execution_seconds,char_comparisons,hash_operations,token_checks,matches,true_positives,false_positives";

/// Write one header line and one line per trial (1-based).
pub fn write_csv<W: Write>(mut out: W, trials: &[TrialMetrics]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for (i, trial) in trials.iter().enumerate() {
        writeln!(
            out,
            "{},{:.6},{},{},{},{},{},{}",
            i + 1,
            trial.seconds,
            trial.counters.char_comparisons,
            trial.counters.hash_operations,
            trial.counters.token_checks,
            trial.matches,
            trial.true_positives,
            trial.false_positives()
        )?;
    }
    out.flush()
}

pub fn write_csv_file(path: &Path, trials: &[TrialMetrics]) -> io::Result<()> {
    write_csv(BufWriter::new(File::create(path)?), trials)
}
