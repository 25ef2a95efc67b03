//! # Error — Sieve Precondition Failures
//!
//! Typed errors for the checked entry point. These cover exactly the two
//! ways a bound can violate the engine's platform preconditions; valid
//! bounds never produce an error, and no partial result accompanies one.

use thiserror::Error;

/// Precondition violations reported by [`crate::try_primes_up_to`].
///
/// The offending bound is widened to `u128` so every unsigned width can be
/// reported verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SieveError {
    /// The bound does not fit in `usize`, so a marking array over
    /// `0..=bound` cannot be indexed on this platform.
    #[error("bound {bound} exceeds the addressable index range (usize::MAX is {max})", max = usize::MAX)]
    BoundNotIndexable {
        /// The rejected bound.
        bound: u128,
    },

    /// The marking array needs `bound + 1` flags, which overflows `usize`.
    #[error("bound {bound} needs {bound} + 1 marking flags, which overflows usize")]
    FlagCountOverflow {
        /// The rejected bound.
        bound: u128,
    },
}

/// Result alias for sieve operations.
pub type SieveResult<T> = Result<T, SieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SieveError::BoundNotIndexable {
            bound: 340_282_366_920_938_463_463_374_607_431_768_211_455,
        };
        let msg = err.to_string();
        assert!(
            msg.contains("340282366920938463463374607431768211455"),
            "message should name the rejected bound: {}",
            msg
        );
        assert!(msg.contains("addressable index range"), "message: {}", msg);

        let err = SieveError::FlagCountOverflow {
            bound: usize::MAX as u128,
        };
        let msg = err.to_string();
        assert!(msg.contains("overflows usize"), "message: {}", msg);
        assert!(msg.contains(&usize::MAX.to_string()), "message: {}", msg);
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SieveError>();
    }
}
