use crate::error::{Result, SieveError};

/// Boolean table over the odd candidates 3, 5, 7, ...
///
/// The flag at index i tracks whether `value_of(i) = 2 * i + 3` is still believed prime.
/// Representing only odd numbers halves the table compared to a naive sieve; the prime 2 is
/// never represented and must be emitted separately by anyone extracting primes.
///
/// Flags start all true and only ever move true -> false, via the marking operation.
pub struct SieveTable {
    flags: Vec<bool>,
}

impl SieveTable {
    /// Create an all-true table of length len, representing odd candidates 3..=2*len+1.
    pub fn new(len: usize) -> Result<SieveTable> {
        if len == 0 {
            return Err(SieveError::InvalidBound);
        }
        Ok(SieveTable {
            flags: vec![true; len],
        })
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the candidate at index is still believed prime.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// Mark false at start, start + stride, start + 2 * stride, ... while in range.
    ///
    /// This is pure index arithmetic with no knowledge of primality; it marks exactly
    /// ceil((len - start) / stride) positions. The start index must lie inside the table
    /// and the stride must be positive.
    pub fn mark_composites_from(&mut self, start: usize, stride: usize) -> Result<()> {
        if start >= self.flags.len() {
            return Err(SieveError::InvalidMarkRange {
                start,
                len: self.flags.len(),
            });
        }
        self.strike(start, stride);
        Ok(())
    }

    /// Strike multiples at fixed stride, unchecked. Callers guarantee start < len.
    pub(crate) fn strike(&mut self, start: usize, stride: usize) {
        debug_assert!(start < self.flags.len());
        debug_assert!(stride > 0);
        let mut multiple = start;
        while multiple < self.flags.len() {
            self.flags[multiple] = false;
            multiple += stride;
        }
    }
}

/// Odd value represented by table index i.
#[inline]
pub fn value_of(index: usize) -> usize {
    2 * index + 3
}

/// Table index representing odd n >= 3. Inverse of value_of.
#[inline]
pub fn index_of(n: usize) -> usize {
    debug_assert!(n >= 3 && n % 2 == 1);
    (n - 3) / 2
}
