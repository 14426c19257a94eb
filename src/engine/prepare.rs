//! Pattern preparation: turns a raw pattern list into an algorithm-specific
//! index that is built once and then only read.

use std::collections::{BTreeMap, HashMap};

use super::algorithm::Algorithm;
use super::alphabet::{HASH_BASE, horner_hash, pow_mod, tokenize};
use super::trie::Trie;

/// A pattern with its KMP failure function.
#[derive(Debug, Clone)]
pub struct KmpPattern {
    pub pattern: Vec<u8>,
    /// `lps[i]` is the length of the longest proper prefix of
    /// `pattern[..=i]` that is also a suffix of it.
    pub lps: Vec<usize>,
}

/// A pattern with its Horspool bad-character shift table.
#[derive(Debug, Clone)]
pub struct HorspoolPattern {
    pub pattern: Vec<u8>,
    pub shift: [usize; 256],
}

/// A pattern reduced to its alphanumeric tokens.
#[derive(Debug, Clone)]
pub struct LexiconPattern {
    pub tokens: Vec<Vec<u8>>,
}

/// All Rabin-Karp patterns of one length.
#[derive(Debug, Clone)]
pub struct RabinKarpGroup {
    pub length: usize,
    /// `HASH_BASE^(length-1) mod HASH_MODULUS`.
    pub high_base: u64,
    pub patterns: Vec<Vec<u8>>,
    /// Hash value to indices into `patterns`.
    pub buckets: HashMap<u64, Vec<usize>>,
}

impl RabinKarpGroup {
    fn new(length: usize) -> Self {
        Self {
            length,
            high_base: pow_mod(HASH_BASE, length - 1),
            patterns: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    fn push(&mut self, pattern: &[u8]) {
        let index = self.patterns.len();
        self.patterns.push(pattern.to_vec());
        self.buckets
            .entry(horner_hash(pattern))
            .or_default()
            .push(index);
    }
}

/// An index prepared for exactly one algorithm.
#[derive(Debug, Clone)]
pub enum PreparedIndex {
    BruteForce(Vec<Vec<u8>>),
    Kmp(Vec<KmpPattern>),
    HashLexicon(Vec<LexiconPattern>),
    Trie(Trie),
    Horspool(Vec<HorspoolPattern>),
    /// Groups in ascending length order.
    RabinKarp(Vec<RabinKarpGroup>),
}

impl PreparedIndex {
    /// Build the index for `algorithm`. Empty patterns are skipped.
    pub fn new<P: AsRef<[u8]>>(algorithm: Algorithm, patterns: &[P]) -> Self {
        let non_empty = || {
            patterns
                .iter()
                .map(|p| p.as_ref())
                .filter(|p| !p.is_empty())
        };

        match algorithm {
            Algorithm::BruteForce => {
                PreparedIndex::BruteForce(patterns.iter().map(|p| p.as_ref().to_vec()).collect())
            }
            Algorithm::Kmp => PreparedIndex::Kmp(
                non_empty()
                    .map(|p| KmpPattern {
                        pattern: p.to_vec(),
                        lps: build_lps(p),
                    })
                    .collect(),
            ),
            Algorithm::HashLexicon => PreparedIndex::HashLexicon(
                patterns
                    .iter()
                    .map(|p| tokenize(p.as_ref()))
                    .filter(|tokens| !tokens.is_empty())
                    .map(|tokens| LexiconPattern {
                        tokens: tokens.into_iter().map(<[u8]>::to_vec).collect(),
                    })
                    .collect(),
            ),
            Algorithm::Trie => {
                let mut trie = Trie::new();
                non_empty().for_each(|p| trie.insert(p));
                PreparedIndex::Trie(trie)
            }
            Algorithm::Horspool => PreparedIndex::Horspool(
                non_empty()
                    .map(|p| HorspoolPattern {
                        pattern: p.to_vec(),
                        shift: build_shift_table(p),
                    })
                    .collect(),
            ),
            Algorithm::RabinKarp => {
                let mut groups: BTreeMap<usize, RabinKarpGroup> = BTreeMap::new();
                for p in non_empty() {
                    groups
                        .entry(p.len())
                        .or_insert_with(|| RabinKarpGroup::new(p.len()))
                        .push(p);
                }
                PreparedIndex::RabinKarp(groups.into_values().collect())
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            PreparedIndex::BruteForce(_) => Algorithm::BruteForce,
            PreparedIndex::Kmp(_) => Algorithm::Kmp,
            PreparedIndex::HashLexicon(_) => Algorithm::HashLexicon,
            PreparedIndex::Trie(_) => Algorithm::Trie,
            PreparedIndex::Horspool(_) => Algorithm::Horspool,
            PreparedIndex::RabinKarp(_) => Algorithm::RabinKarp,
        }
    }

    /// True when nothing in the index can ever match.
    pub fn is_empty(&self) -> bool {
        match self {
            PreparedIndex::BruteForce(patterns) => patterns.iter().all(Vec::is_empty),
            PreparedIndex::Kmp(patterns) => patterns.is_empty(),
            PreparedIndex::HashLexicon(patterns) => patterns.is_empty(),
            PreparedIndex::Trie(trie) => trie.is_empty(),
            PreparedIndex::Horspool(patterns) => patterns.is_empty(),
            PreparedIndex::RabinKarp(groups) => groups.is_empty(),
        }
    }
}

/// Build the index for `algorithm` from `patterns`.
pub fn prepare<P: AsRef<[u8]>>(algorithm: Algorithm, patterns: &[P]) -> PreparedIndex {
    PreparedIndex::new(algorithm, patterns)
}

/// KMP failure function (prefix function) in linear time.
pub fn build_lps(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
        }
    }
    lps
}

/// Horspool bad-character table: `m` by default, `m-1-i` for the rightmost
/// occurrence `i` of each byte before the last position.
pub fn build_shift_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut shift = [m; 256];
    for (i, &byte) in pattern[..m.saturating_sub(1)].iter().enumerate() {
        shift[byte as usize] = m - 1 - i;
    }
    shift
}
