//! Odd-only Sieve of Eratosthenes to generate all primes below a given bound
//!
//! The naive sieve of Eratosthenes strikes multiples of a given prime from a fixed array
//! covering every integer up to the bound. Half of that array is wasted: no even number
//! above 2 is prime. This crate's table stores only the odd candidates, with index i
//! representing the value 2 * i + 3, so a table of length n covers the candidates
//! 3..=2n+1 in half the memory. The prime 2 never appears in the table and is emitted
//! separately when primes are extracted.
//!
//! Striking for a prime p starts at p^2 rather than 2p, since every smaller multiple of p
//! has a prime factor below p and was struck on an earlier pass. In the odd-only index
//! space, p^2 lives at index 2 * i * (i + 3) + 3 for p = 2 * i + 3, and consecutive odd
//! multiples of p sit exactly p indices apart, so each pass is a fixed-stride sweep.
//!
//! Usage:
//!
//!     use odd_sieve::Primes;
//!
//!     let primes: Vec<u64> = Primes::up_to(20).unwrap().collect();
//!     assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19], primes);
//!
//! The table and driver are also exposed directly for callers that want to inspect the
//! sieve itself rather than iterate primes:
//!
//!     use odd_sieve::{sift, value_of, SieveTable};
//!
//!     let mut table = SieveTable::new(5).unwrap();
//!     sift(&mut table);
//!     // Candidates 3, 5, 7, 9, 11: only 9 is composite.
//!     assert!(!table.get(3));
//!     assert_eq!(9, value_of(3));

// Internal modules
mod error;
mod primes;
mod sift;
mod table;

pub use error::{Result, SieveError};
pub use primes::Primes;
pub use sift::sift;
pub use table::{index_of, value_of, SieveTable};
