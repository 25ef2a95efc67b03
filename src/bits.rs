//! # Bits — Packed Marking Array
//!
//! The sieve's working state: one bit per candidate index `0..=limit`, where
//! a set bit means "currently believed prime". Packed into `u64` words for
//! 8× memory reduction over `Vec<bool>` — a limit of 10M costs 1.25 MB
//! instead of 10 MB, fitting in L2 cache on most architectures. Survivor
//! counts use hardware `POPCNT` (via `count_ones()`), O(limit/64).
//!
//! ## Invariants
//!
//! Bits 0 and 1 are cleared at construction and there is no operation that
//! sets a bit afterwards: a candidate moves from "believed prime" to
//! "composite" at most once, never back. The unused high bits of the last
//! word are kept clear so word-level popcounts are exact.
//!
//! Bit layout: bit `i` lives in word `i / 64`, position `i % 64`.

/// Bit-packed marking array over candidate indices `0..=limit`.
///
/// A set bit at index `k` means `k` has not (yet) been proven composite.
pub struct MarkBits {
    words: Vec<u64>,
    limit: usize,
}

impl MarkBits {
    /// Create a marking array for candidates `0..=limit`, every index
    /// presumed prime except 0 and 1, which start (and stay) composite.
    ///
    /// Requires `limit < usize::MAX` so that `limit + 1` flags exist.
    pub fn presumed_prime(limit: usize) -> Self {
        debug_assert!(limit < usize::MAX, "limit + 1 flags must be representable");
        let bits = limit + 1;
        let num_words = word_count(bits);
        let mut words = vec![u64::MAX; num_words];
        // Clear unused high bits in the last word
        let tail = bits % 64;
        if tail > 0 {
            words[num_words - 1] >>= 64 - tail;
        }
        let mut marks = MarkBits { words, limit };
        // 0 and 1 are not prime by definition
        marks.mark_composite(0);
        if limit >= 1 {
            marks.mark_composite(1);
        }
        marks
    }

    /// The inclusive upper candidate index.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Is candidate `idx` still believed prime?
    ///
    /// # Panics
    /// Panics in debug builds if `idx > limit`.
    #[inline]
    pub fn is_prime(&self, idx: usize) -> bool {
        debug_assert!(
            idx <= self.limit,
            "candidate index out of bounds: {} > {}",
            idx,
            self.limit
        );
        self.words[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    /// Mark candidate `idx` composite. Idempotent; there is no inverse.
    #[inline]
    pub fn mark_composite(&mut self, idx: usize) {
        debug_assert!(idx <= self.limit);
        self.words[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Count the indices still believed prime, using hardware POPCNT.
    ///
    /// Bits 0 and 1 are clear from construction, so this equals the number
    /// of surviving candidates in `[2, limit]`. Independent of any running
    /// count kept by the caller — used as the cross-check in debug builds.
    pub fn count_primes(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the surviving candidate indices in ascending order.
    pub fn iter_primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let base = wi * 64;
            WordBits { word, base }
        })
    }
}

/// Number of u64 words holding `bits` flags.
///
/// Round-up division, exact even when `bits` sits within 63 of
/// `usize::MAX` and leaves no headroom to add before dividing.
#[inline]
fn word_count(bits: usize) -> usize {
    bits.div_ceil(64)
}

/// Iterator over set bits within a single u64 word.
struct WordBits {
    word: u64,
    base: usize,
}

impl Iterator for WordBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // clear lowest set bit
        Some(self.base + tz)
    }
}
