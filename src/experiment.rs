//! Trial driver: prepare once, scan every row per trial, aggregate.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::dataset::{self, Dataset, RowSample};
use crate::engine::{Algorithm, Counters, PreparedIndex, scan};
use crate::error::LoadError;
use crate::signatures;

/// Everything needed to run one experiment.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub data_file: PathBuf,
    pub pattern_file: PathBuf,
    /// Row text budget in bytes; 0 means unlimited.
    pub text_bytes: usize,
    /// Keep at most this many patterns.
    pub pattern_count: Option<usize>,
    pub trials: usize,
    pub output_csv: Option<PathBuf>,
    pub algorithm: Algorithm,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("Friday-WorkingHours-Morning.pcap_ISCX.csv"),
            pattern_file: PathBuf::from("signatures.txt"),
            text_bytes: 1024 * 1024,
            pattern_count: None,
            trials: 5,
            output_csv: None,
            algorithm: Algorithm::BruteForce,
        }
    }
}

/// Results of one pass over every row.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrialMetrics {
    pub seconds: f64,
    pub counters: Counters,
    pub matches: u64,
    /// Matches on rows labelled malicious.
    pub true_positives: u64,
}

impl TrialMetrics {
    pub fn false_positives(&self) -> u64 {
        self.matches - self.true_positives
    }
}

impl fmt::Display for TrialMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} s, comparisons={}, hash_ops={}, token_checks={}, matches={}, true_positives={}, false_positives={}",
            self.seconds,
            self.counters.char_comparisons,
            self.counters.hash_operations,
            self.counters.token_checks,
            self.matches,
            self.true_positives,
            self.false_positives()
        )
    }
}

/// Scan every row once against `index`.
pub fn run_trial(index: &PreparedIndex, rows: &[RowSample]) -> TrialMetrics {
    let mut metrics = TrialMetrics::default();
    let start = Instant::now();
    for row in rows {
        let result = scan(&row.text, index);
        metrics.counters += result.counters;
        if result.matched {
            metrics.matches += 1;
            if row.malicious {
                metrics.true_positives += 1;
            }
        }
    }
    metrics.seconds = start.elapsed().as_secs_f64();
    metrics
}

/// Run `trials` trials over the same prepared index.
pub fn run_trials(index: &PreparedIndex, rows: &[RowSample], trials: usize) -> Vec<TrialMetrics> {
    (1..=trials)
        .map(|trial| {
            let metrics = run_trial(index, rows);
            info!("Trial {trial}: {metrics}");
            metrics
        })
        .collect()
}

/// Everything produced by [`run`].
#[derive(Debug)]
pub struct ExperimentOutcome {
    pub patterns: Vec<Vec<u8>>,
    pub dataset: Dataset,
    pub trials: Vec<TrialMetrics>,
}

/// Load inputs, prepare the index and run every trial.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentOutcome, LoadError> {
    let patterns = signatures::load_patterns(&config.pattern_file, config.pattern_count)?;
    info!(algorithm = %config.algorithm, "Algorithm selected");
    info!(count = patterns.len(), "Patterns loaded");

    let dataset = dataset::load_rows(&config.data_file, config.text_bytes)?;
    info!(
        "Running {} trial(s) with {} rows and {} pattern(s)",
        config.trials,
        dataset.rows.len(),
        patterns.len()
    );

    let index = PreparedIndex::new(config.algorithm, &patterns);
    let trials = run_trials(&index, &dataset.rows, config.trials);
    Ok(ExperimentOutcome {
        patterns,
        dataset,
        trials,
    })
}

/// Per-trial averages. Counts use integer division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub trials: usize,
    pub seconds: f64,
    pub char_comparisons: u64,
    pub hash_operations: u64,
    pub token_checks: u64,
    pub matches: u64,
    pub true_positives: u64,
    pub false_positives: u64,
}

impl Summary {
    /// `None` when no trial ran.
    pub fn from_trials(trials: &[TrialMetrics]) -> Option<Self> {
        if trials.is_empty() {
            return None;
        }
        let count = trials.len() as u64;
        let mut seconds = 0.0;
        let mut counters = Counters::new();
        let (mut matches, mut true_positives) = (0u64, 0u64);
        for trial in trials {
            seconds += trial.seconds;
            counters += trial.counters;
            matches += trial.matches;
            true_positives += trial.true_positives;
        }
        Some(Self {
            trials: trials.len(),
            seconds: seconds / trials.len() as f64,
            char_comparisons: counters.char_comparisons / count,
            hash_operations: counters.hash_operations / count,
            token_checks: counters.token_checks / count,
            matches: matches / count,
            true_positives: true_positives / count,
            false_positives: (matches - true_positives) / count,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Averages over {} trial(s):", self.trials)?;
        writeln!(f, "  Execution time (s): {:.4}", self.seconds)?;
        writeln!(f, "  Character comparisons: {} (avg)", self.char_comparisons)?;
        writeln!(f, "  Hash operations: {} (avg)", self.hash_operations)?;
        writeln!(f, "  Token checks: {} (avg)", self.token_checks)?;
        writeln!(f, "  Matches: {} (avg)", self.matches)?;
        writeln!(f, "  True positives: {} (avg)", self.true_positives)?;
        write!(f, "  False positives: {} (avg)", self.false_positives)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::engine::prepare;

    fn row(text: &str, malicious: bool) -> RowSample {
        RowSample {
            text: text.as_bytes().to_vec(),
            malicious,
        }
    }

    #[test]
    fn trial_counts_true_and_false_positives() {
        let rows = [
            row("GET /ADMIN", true),
            row("GET /ADMIN", false),
            row("GET /INDEX", true),
        ];
        let index = prepare(Algorithm::Kmp, &["ADMIN"]);
        let metrics = run_trial(&index, &rows);
        assert_eq!(metrics.matches, 2);
        assert_eq!(metrics.true_positives, 1);
        assert_eq!(metrics.false_positives(), 1);
        assert!(metrics.counters.char_comparisons > 0);
    }

    #[test]
    fn trial_counters_are_sum_of_row_scans() {
        let rows = [row("ABCABC", false), row("XYZ", false)];
        let index = prepare(Algorithm::RabinKarp, &["CAB", "ZZ"]);
        let expected = rows
            .iter()
            .map(|r| scan(&r.text, &index).counters)
            .fold(Counters::new(), |acc, c| acc + c);
        assert_eq!(run_trial(&index, &rows).counters, expected);
    }

    #[test]
    fn trials_repeat_identical_counts() {
        let rows = [row("UNION SELECT * FROM USERS", true)];
        let index = prepare(Algorithm::HashLexicon, &["UNION SELECT"]);
        let trials = run_trials(&index, &rows, 3);
        assert_eq!(trials.len(), 3);
        assert!(trials.iter().all(|t| t.counters == trials[0].counters));
        assert!(trials.iter().all(|t| t.matches == 1));
    }

    #[test]
    fn summary_uses_integer_averages() {
        let mk = |seconds, comparisons, matches, tp| TrialMetrics {
            seconds,
            counters: Counters {
                char_comparisons: comparisons,
                hash_operations: 0,
                token_checks: 0,
            },
            matches,
            true_positives: tp,
        };
        let summary = Summary::from_trials(&[mk(1.0, 10, 3, 1), mk(2.0, 5, 4, 2)]).unwrap();
        assert_eq!(summary.trials, 2);
        assert!((summary.seconds - 1.5).abs() < 1e-12);
        assert_eq!(summary.char_comparisons, 7);
        assert_eq!(summary.matches, 3);
        assert_eq!(summary.true_positives, 1);
        assert_eq!(summary.false_positives, 2);
        assert!(summary.to_string().starts_with("Averages over 2 trial(s):"));
    }

    #[test]
    fn summary_of_nothing() {
        assert!(Summary::from_trials(&[]).is_none());
    }

    #[test]
    fn run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let patterns = dir.path().join("signatures.txt");
        let data = dir.path().join("flows.csv");
        writeln!(std::fs::File::create(&patterns).unwrap(), "admin\n\nunion select").unwrap();
        write!(
            std::fs::File::create(&data).unwrap(),
            "Payload,Label\nGET /admin,Web Attack\nGET /index,BENIGN\nq=1 union select,BENIGN\n"
        )
        .unwrap();

        let config = ExperimentConfig {
            data_file: data,
            pattern_file: patterns,
            text_bytes: 0,
            trials: 2,
            algorithm: Algorithm::Horspool,
            ..ExperimentConfig::default()
        };
        let outcome = run(&config).unwrap();
        assert_eq!(outcome.patterns, vec![b"ADMIN".to_vec(), b"UNION SELECT".to_vec()]);
        assert_eq!(outcome.dataset.rows.len(), 3);
        assert_eq!(outcome.trials.len(), 2);
        for trial in &outcome.trials {
            assert_eq!(trial.matches, 2);
            assert_eq!(trial.true_positives, 1);
            assert_eq!(trial.false_positives(), 1);
        }
    }
}
