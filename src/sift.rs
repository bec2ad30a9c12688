use tracing::{debug, trace};

use crate::table::{value_of, SieveTable};

/// Mark every composite odd candidate in the table, leaving true flags exactly on primes.
///
/// For each surviving index i in increasing order, strikes the multiples of value_of(i)
/// starting from its square: smaller multiples were already struck by a smaller prime
/// factor. Consecutive odd multiples of an odd value are spaced value_of(i) apart in value,
/// which is value_of(i) positions apart in the odd-only table, so the stride equals the
/// prime itself.
///
/// The loop stops once value_of(i)^2 falls past the table: any composite <= value_of(len - 1)
/// has a prime factor no larger than its square root, which some earlier iteration covered.
pub fn sift(table: &mut SieveTable) {
    let len = table.len();
    debug!(len, "sifting odd candidate table");

    let mut i = 0;
    let mut square = square_index(0);
    while square < len {
        if table.get(i) {
            let prime = value_of(i);
            trace!(prime, start = square, "striking composites");
            table.strike(square, prime);
        }
        i += 1;
        square = square_index(i);
    }
}

/// Table index of value_of(i)^2: expanding (2i + 3)^2 and inverting the mapping gives
/// 2 * i * (i + 3) + 3.
#[inline]
fn square_index(i: usize) -> usize {
    2 * i * (i + 3) + 3
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::table::index_of;

    use super::*;

    /// Trial division oracle for cross-checking the sieve.
    fn is_prime(n: usize) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    fn sifted_flags(len: usize) -> Vec<bool> {
        let mut table = SieveTable::new(len).unwrap();
        sift(&mut table);
        (0..len).map(|index| table.get(index)).collect()
    }

    #[test]
    fn sift_tiny_tables_stay_all_true() {
        // square_index starts at 3, so nothing is reachable below length 4.
        assert_eq!(vec![true], sifted_flags(1));
        assert_eq!(vec![true, true], sifted_flags(2));
        assert_eq!(vec![true, true, true], sifted_flags(3));
    }

    #[test]
    fn sift_finds_first_composite() {
        // Candidates 3, 5, 7, 9, 11: only 9 = 3 * 3 is composite.
        assert_eq!(vec![true, true, true, false, true], sifted_flags(5));
    }

    #[test]
    fn sift_correct_to_one_thousand() {
        let flags = sifted_flags(1000);
        for (index, &flag) in flags.iter().enumerate() {
            assert_eq!(is_prime(value_of(index)), flag, "index {}", index);
        }
    }

    proptest! {
        #[test]
        fn sift_agrees_with_trial_division(len in 1usize..500) {
            let flags = sifted_flags(len);
            for (index, &flag) in flags.iter().enumerate() {
                prop_assert_eq!(is_prime(value_of(index)), flag);
            }
        }

        #[test]
        fn sift_is_idempotent(len in 1usize..500) {
            let mut table = SieveTable::new(len).unwrap();
            sift(&mut table);
            sift(&mut table);
            let twice: Vec<bool> = (0..len).map(|index| table.get(index)).collect();
            prop_assert_eq!(sifted_flags(len), twice);
        }

        #[test]
        fn square_index_matches_mapping(i in 0usize..100_000) {
            let v = value_of(i);
            prop_assert_eq!(index_of(v * v), square_index(i));
        }
    }
}
