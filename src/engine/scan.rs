//! Scanning: test one text against a [`PreparedIndex`].
//!
//! Every routine stops at the first match and counts every primitive
//! operation it performs, including comparisons that fail.

use super::alphabet::{hash_pop, hash_push, tokenize};
use super::counters::Counters;
use super::prepare::{HorspoolPattern, KmpPattern, LexiconPattern, PreparedIndex, RabinKarpGroup};

/// Outcome of scanning a single text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    pub matched: bool,
    pub counters: Counters,
}

/// Test whether any pattern in `index` matches `text`.
pub fn scan(text: &[u8], index: &PreparedIndex) -> ScanResult {
    let mut counters = Counters::new();
    let matched = match index {
        PreparedIndex::BruteForce(patterns) => patterns
            .iter()
            .filter(|p| !p.is_empty())
            .any(|p| brute_force_contains(text, p, &mut counters)),
        PreparedIndex::Kmp(patterns) => patterns
            .iter()
            .any(|p| kmp_contains(text, p, &mut counters)),
        PreparedIndex::HashLexicon(patterns) => lexicon_contains(text, patterns, &mut counters),
        PreparedIndex::Trie(trie) => trie.contains(text, &mut counters),
        PreparedIndex::Horspool(patterns) => patterns
            .iter()
            .any(|p| horspool_contains(text, p, &mut counters)),
        PreparedIndex::RabinKarp(groups) => groups
            .iter()
            .any(|g| rabin_karp_contains(text, g, &mut counters)),
    };
    ScanResult { matched, counters }
}

impl PreparedIndex {
    pub fn scan(&self, text: &[u8]) -> ScanResult {
        scan(text, self)
    }
}

fn brute_force_contains(text: &[u8], pattern: &[u8], counters: &mut Counters) -> bool {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return false;
    }
    for start in 0..=n - m {
        let mut j = 0;
        while j < m {
            counters.char_comparisons += 1;
            if text[start + j] != pattern[j] {
                break;
            }
            j += 1;
        }
        if j == m {
            return true;
        }
    }
    false
}

fn kmp_contains(text: &[u8], kmp: &KmpPattern, counters: &mut Counters) -> bool {
    let (n, m) = (text.len(), kmp.pattern.len());
    if m == 0 || m > n {
        return false;
    }
    let (mut i, mut j) = (0, 0);
    while i < n {
        counters.char_comparisons += 1;
        if text[i] == kmp.pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                return true;
            }
        } else if j != 0 {
            // Fall back without consuming input.
            j = kmp.lps[j - 1];
        } else {
            i += 1;
        }
    }
    false
}

fn horspool_contains(text: &[u8], hp: &HorspoolPattern, counters: &mut Counters) -> bool {
    let (n, m) = (text.len(), hp.pattern.len());
    if m == 0 || m > n {
        return false;
    }
    // `end` is the index of the window's last byte.
    let mut end = m - 1;
    while end < n {
        let mut k = 0;
        while k < m {
            counters.char_comparisons += 1;
            if hp.pattern[m - 1 - k] != text[end - k] {
                break;
            }
            k += 1;
        }
        if k == m {
            return true;
        }
        end += hp.shift[text[end] as usize];
    }
    false
}

fn lexicon_contains(text: &[u8], patterns: &[LexiconPattern], counters: &mut Counters) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return false;
    }
    patterns.iter().any(|pattern| {
        let wanted = &pattern.tokens;
        if wanted.is_empty() || wanted.len() > tokens.len() {
            return false;
        }
        tokens.windows(wanted.len()).any(|window| {
            for (have, want) in window.iter().zip(wanted) {
                counters.token_checks += 1;
                if *have != want.as_slice() {
                    return false;
                }
            }
            true
        })
    })
}

fn rabin_karp_contains(text: &[u8], group: &RabinKarpGroup, counters: &mut Counters) -> bool {
    let (n, m) = (text.len(), group.length);
    if m == 0 || m > n {
        return false;
    }

    let mut hash = 0;
    for &byte in &text[..m] {
        hash = hash_push(hash, byte);
        counters.hash_operations += 1;
    }
    if verify_bucket(text, 0, hash, group, counters) {
        return true;
    }

    for i in m..n {
        hash = hash_pop(hash, text[i - m], group.high_base);
        hash = hash_push(hash, text[i]);
        counters.hash_operations += 2;
        if verify_bucket(text, i - m + 1, hash, group, counters) {
            return true;
        }
    }
    false
}

/// Compare the window at `start` byte-by-byte against every pattern sharing
/// its hash.
fn verify_bucket(
    text: &[u8],
    start: usize,
    hash: u64,
    group: &RabinKarpGroup,
    counters: &mut Counters,
) -> bool {
    let Some(candidates) = group.buckets.get(&hash) else {
        return false;
    };
    let window = &text[start..start + group.length];
    candidates.iter().any(|&idx| {
        for (&have, &want) in window.iter().zip(&group.patterns[idx]) {
            counters.char_comparisons += 1;
            if have != want {
                return false;
            }
        }
        true
    })
}
