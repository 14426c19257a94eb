//! Primitive-operation counters reported by every scan.

use std::ops::{Add, AddAssign};

/// Work performed by a scan.
///
/// A fresh value is produced for every call to [`scan`](super::scan); callers
/// sum them across rows and trials.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    /// Byte comparisons, including the one that fails.
    pub char_comparisons: u64,
    /// Modular hash steps performed by Rabin-Karp.
    pub hash_operations: u64,
    /// Token equality checks performed by the hash lexicon.
    pub token_checks: u64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Self) {
        self.char_comparisons += rhs.char_comparisons;
        self.hash_operations += rhs.hash_operations;
        self.token_checks += rhs.token_checks;
    }
}

impl Add for Counters {
    type Output = Counters;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}
