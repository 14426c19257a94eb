//! Multi-pattern matching engine.
//!
//! A pattern list is prepared once for one algorithm into a
//! [`PreparedIndex`]; each text row is then tested with [`scan`], which
//! reports whether any pattern matched and how much primitive work it took.
//!
//! | Algorithm     | Index                                   | Counts             |
//! |---------------|-----------------------------------------|--------------------|
//! | `BruteForce`  | raw patterns                            | byte comparisons   |
//! | `KMP`         | pattern + failure function              | byte comparisons   |
//! | `Horspool`    | pattern + 256-entry bad-character shift | byte comparisons   |
//! | `Trie`        | byte-indexed node arena                 | byte comparisons   |
//! | `RabinKarp`   | length groups with hash buckets         | hash ops + verify  |
//! | `HashLexicon` | alphanumeric token sequences            | token checks       |
//!
//! All algorithms except `HashLexicon` test literal substring containment
//! and agree on every input. `HashLexicon` matches whole tokens only.

pub mod algorithm;
pub mod alphabet;
pub mod counters;
pub mod prepare;
pub mod scan;
pub mod trie;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use counters::Counters;
pub use prepare::{PreparedIndex, prepare};
pub use scan::{ScanResult, scan};
