use crate::error::Result;
use crate::sift::sift;
use crate::table::{value_of, SieveTable};

/// Iterate through all primes <= limit in increasing order.
///
/// The backing table only represents odd candidates, so 2 is yielded up front and every
/// later item is a surviving odd candidate translated back through value_of.
pub struct Primes {
    table: Option<SieveTable>,
    index: usize,
    limit: u64,
    yielded_two: bool,
}

impl Primes {
    /// Sieve all odd candidates <= limit and iterate the primes <= limit.
    ///
    /// Limits below 2 produce an empty iterator rather than an error, since there is
    /// nothing to sieve.
    pub fn up_to(limit: u64) -> Result<Primes> {
        let table = if limit >= 3 {
            let mut table = SieveTable::new((limit as usize - 1) / 2)?;
            sift(&mut table);
            Some(table)
        } else {
            None
        };

        Ok(Primes {
            table,
            index: 0,
            limit,
            yielded_two: false,
        })
    }

    /// Iterate 2 followed by the surviving candidates of an already-sifted table.
    pub fn sifted(table: SieveTable) -> Primes {
        let limit = value_of(table.len() - 1) as u64;

        Primes {
            table: Some(table),
            index: 0,
            limit,
            yielded_two: false,
        }
    }
}

impl Iterator for Primes {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.yielded_two {
            self.yielded_two = true;
            if self.limit >= 2 {
                return Some(2);
            }
        }

        let table = self.table.as_ref()?;
        while self.index < table.len() {
            let index = self.index;
            self.index += 1;
            if table.get(index) {
                let p = value_of(index) as u64;
                if p > self.limit {
                    return None;
                }
                return Some(p);
            }
        }
        None
    }
}
