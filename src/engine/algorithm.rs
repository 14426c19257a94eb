//! The closed set of matching algorithms.

use std::fmt;
use std::str::FromStr;

use phf::{Map, phf_map};

/// One of the six supported matching algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    Kmp,
    HashLexicon,
    Trie,
    Horspool,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BruteForce,
        Algorithm::Kmp,
        Algorithm::HashLexicon,
        Algorithm::Trie,
        Algorithm::Horspool,
        Algorithm::RabinKarp,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "BruteForce",
            Algorithm::Kmp => "KMP",
            Algorithm::HashLexicon => "HashLexicon",
            Algorithm::Trie => "Trie",
            Algorithm::Horspool => "Horspool",
            Algorithm::RabinKarp => "RabinKarp",
        }
    }

    /// True for algorithms that test literal substring containment.
    /// HashLexicon matches on token boundaries instead.
    #[cfg(test)]
    pub fn is_substring(self) -> bool {
        !matches!(self, Algorithm::HashLexicon)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted command-line spellings, lower case.
const NAME_TO_ALGORITHM: Map<&'static str, Algorithm> = phf_map! {
    "brute" => Algorithm::BruteForce,
    "bruteforce" => Algorithm::BruteForce,
    "kmp" => Algorithm::Kmp,
    "hash" => Algorithm::HashLexicon,
    "hashlexicon" => Algorithm::HashLexicon,
    "lexicon" => Algorithm::HashLexicon,
    "trie" => Algorithm::Trie,
    "horspool" => Algorithm::Horspool,
    "boyermoore" => Algorithm::Horspool,
    "bm" => Algorithm::Horspool,
    "rabin" => Algorithm::RabinKarp,
    "rabinkarp" => Algorithm::RabinKarp,
    "rk" => Algorithm::RabinKarp,
};

/// An algorithm name that matched no known spelling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid algorithm name '{0}' (expected brute, kmp, hash, trie, horspool or rabin)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TO_ALGORITHM
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
