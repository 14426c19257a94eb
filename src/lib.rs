//! Benchmark harness for classical multi-pattern string matching algorithms
//! run over network-traffic rows.
//!
//! # Example
//!
//! ```rust
//! use idsbench::{Algorithm, prepare, scan};
//!
//! let index = prepare(Algorithm::Horspool, &["ABC", "BCD"]);
//!
//! let result = scan(b"XABCDY", &index);
//! assert!(result.matched);
//! assert!(result.counters.char_comparisons > 0);
//!
//! // Token matching respects word boundaries.
//! let lexicon = prepare(Algorithm::HashLexicon, &["GETINDEX"]);
//! assert!(!scan(b"GET INDEX", &lexicon).matched);
//! ```

pub mod dataset;
pub mod engine;
mod error;
pub mod experiment;
pub mod report;
pub mod signatures;
mod size;

pub use dataset::{Dataset, RowSample};
pub use engine::{Algorithm, Counters, PreparedIndex, ScanResult, UnknownAlgorithm, prepare, scan};
pub use error::LoadError;
pub use experiment::{ExperimentConfig, ExperimentOutcome, Summary, TrialMetrics};
pub use size::{SizeError, parse_size};
