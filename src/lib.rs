//! # Eratos — Generic Sieve of Eratosthenes
//!
//! Exact prime enumeration up to an unsigned integer bound. One call,
//! one answer: every prime `p` with `2 <= p <= n`, strictly increasing,
//! in the bound's own integer type.
//!
//! ```rust
//! let primes = eratos::primes_up_to(30u64);
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//!
//! // π(1000) without materializing the sequence
//! assert_eq!(eratos::count_primes_up_to(1000u32), 168);
//! ```
//!
//! The sieve is exact for every representable bound — no probabilistic
//! shortcuts, no approximation. Bounds the platform cannot index (wider
//! than `usize`, or needing more flags than `usize` counts) are rejected
//! loudly: [`primes_up_to`] panics, [`try_primes_up_to`] returns a typed
//! [`SieveError`].
//!
//! Everything here is a pure function over its argument; there is no
//! shared state, so calls from independent threads need no coordination.

pub mod bits;
pub mod error;
pub mod sieve;

pub use bits::MarkBits;
pub use error::{SieveError, SieveResult};
pub use sieve::{count_primes_up_to, primes_up_to, try_primes_up_to};
