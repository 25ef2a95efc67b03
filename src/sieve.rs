//! # Sieve — Exact Prime Enumeration up to a Bound
//!
//! The crate's engine: computes every prime `p` with `2 <= p <= n` for an
//! unsigned integer bound `n`, generic over the bound's width. Three entry
//! points share one marking pipeline:
//!
//! 1. **Prime enumeration** (`primes_up_to`) — the primary contract:
//!    materialize the ordered prime sequence, panicking on a violated
//!    platform precondition.
//! 2. **Checked enumeration** (`try_primes_up_to`) — identical output,
//!    but bounds the platform cannot index come back as a typed
//!    [`SieveError`] instead of a panic.
//! 3. **Exact prime counting** (`count_primes_up_to`) — π(n) from the
//!    marking passes alone, skipping materialization.
//!
//! ## Algorithm: Sieve of Eratosthenes
//!
//! A bit-packed marking array holds one flag per candidate in `0..=n`
//! ([`MarkBits`]). Candidates start presumed prime; for each prime `k`
//! found in ascending order, its multiples from `k*k` upward are marked
//! composite. The outer loop runs while `k <= n / k` — the division form
//! of `k*k <= n`, which cannot overflow the index type where `k*k` can.
//! Starting the marking at `k*k` is exact, not heuristic: every smaller
//! multiple of `k` has a prime factor below `k` and was already marked.
//!
//! Once `k` passes `sqrt(n)` no marking work remains; a second scan
//! tallies the surviving candidates so the result vector can be allocated
//! at exactly the final count. The collection pass then fills it without
//! ever reallocating. Complexity: O(n log log n) time, one bit per
//! candidate plus the exact-sized result.
//!
//! ## References
//!
//! - <https://en.wikipedia.org/wiki/Sieve_of_Eratosthenes>
//! - OEIS A000720: π(n), the prime-counting function (test oracle).

use num_traits::{PrimInt, Unsigned};
use tracing::debug;

use crate::bits::MarkBits;
use crate::error::{SieveError, SieveResult};

/// All primes `p` with `2 <= p <= n`, strictly increasing, in the bound's
/// own type.
///
/// Pure and deterministic: the same `n` always yields the same sequence,
/// and no state outlives the call, so independent threads may call this
/// freely. For `n < 2` the result is empty and nothing is allocated.
/// The marking array needs one bit per candidate in `0..=n`; `n` must be
/// small enough for that to fit in addressable memory, and running out is
/// an allocation failure, not a wrong answer.
///
/// # Panics
///
/// Panics if `n` cannot index the marking array on this platform: the
/// value does not fit in `usize`, or equals `usize::MAX` so that `n + 1`
/// flags would overflow. Use [`try_primes_up_to`] to get these as typed
/// errors instead.
pub fn primes_up_to<T: PrimInt + Unsigned>(n: T) -> Vec<T> {
    match try_primes_up_to(n) {
        Ok(primes) => primes,
        Err(err) => panic!("primes_up_to precondition violated: {err}"),
    }
}

/// Checked form of [`primes_up_to`]: identical output for every valid
/// bound, and a [`SieveError`] instead of a panic for bounds this
/// platform cannot index.
pub fn try_primes_up_to<T: PrimInt + Unsigned>(n: T) -> SieveResult<Vec<T>> {
    let limit = checked_limit(n)?;

    // No primes below 2, and no marking array either.
    if limit < 2 {
        return Ok(Vec::new());
    }

    let (marks, n_primes) = sieve_marks(limit);

    // Exact-capacity allocation: the collection pass below never
    // reallocates, and the final length equals the counted primes.
    let mut primes = Vec::with_capacity(n_primes);
    let mut k: usize = 2;
    while primes.len() < n_primes {
        // The counting passes guarantee the vector fills before k
        // exhausts the candidates.
        debug_assert!(k <= limit);
        if marks.is_prime(k) {
            // k <= n and n arrived as a T, so the cast back cannot fail
            primes.push(T::from(k).unwrap());
        }
        k += 1;
    }

    Ok(primes)
}

/// Exact prime count π(n): how many primes lie in `[2, n]`.
///
/// Runs the marking and counting passes only, skipping materialization of
/// the sequence. `n < 2` yields 0 without allocating.
///
/// # Panics
///
/// Same precondition as [`primes_up_to`]: the bound must be indexable on
/// this platform.
pub fn count_primes_up_to<T: PrimInt + Unsigned>(n: T) -> usize {
    let limit = match checked_limit(n) {
        Ok(limit) => limit,
        Err(err) => panic!("count_primes_up_to precondition violated: {err}"),
    };
    if limit < 2 {
        return 0;
    }
    let (_, n_primes) = sieve_marks(limit);
    n_primes
}

/// Convert a caller's bound into a marking-array limit, rejecting values
/// this platform cannot index.
fn checked_limit<T: PrimInt + Unsigned>(n: T) -> SieveResult<usize> {
    let limit = match n.to_usize() {
        Some(limit) => limit,
        None => return Err(SieveError::BoundNotIndexable { bound: widen(n) }),
    };
    if limit == usize::MAX {
        // limit + 1 flags would overflow the index type
        return Err(SieveError::FlagCountOverflow { bound: widen(n) });
    }
    Ok(limit)
}

/// Widen a bound to u128 for error reporting; every unsigned primitive fits.
fn widen<T: PrimInt + Unsigned>(n: T) -> u128 {
    n.to_u128().unwrap()
}

/// The marking and counting passes over candidates `0..=limit`.
///
/// Returns the finished marking array and the exact number of surviving
/// candidates. Requires `2 <= limit < usize::MAX`; the public entry
/// points handle the bounds outside that range.
fn sieve_marks(limit: usize) -> (MarkBits, usize) {
    let mut marks = MarkBits::presumed_prime(limit);
    let mut n_primes: usize = 0;

    // Outer loop condition written as k <= limit / k to avoid k*k overflow
    let mut k: usize = 2;
    while k <= limit / k {
        if marks.is_prime(k) {
            n_primes += 1;

            // First unmarked multiple is k*k; the loop bound guarantees
            // k*k <= limit, so the marking loop runs at least once.
            let mut m = k * k;
            loop {
                marks.mark_composite(m);
                // m + k can wrap when limit sits near the top of the
                // address space, so the step is checked.
                match m.checked_add(k) {
                    Some(next) if next <= limit => m = next,
                    _ => break,
                }
            }
        }
        k += 1;
    }

    // Count primes above sqrt(limit) that the marking loop never visited.
    while k <= limit {
        if marks.is_prime(k) {
            n_primes += 1;
        }
        k += 1;
    }

    // Independent recount through the word popcounts; fires only on an
    // engine bug, and only in debug builds.
    debug_assert_eq!(
        n_primes,
        marks.count_primes(),
        "running prime count disagrees with marking-array recount"
    );

    debug!(limit, primes = n_primes, "sieve marking complete");

    (marks, n_primes)
}
