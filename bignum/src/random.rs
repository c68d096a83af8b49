//!
//! Uniform random values from a cryptographically secure source
//!

use alloc::vec;

use rand_core::{CryptoRng, RngCore};

use crate::BigInt;

impl BigInt {
    /// Uniformly distributed value in `[0, bound)`, sized to the bit
    /// length of `bound`.
    ///
    /// Samples `bound.bits()` random bits and rejects values at or above
    /// the bound rather than reducing them, so the distribution carries no
    /// modular bias. Each attempt succeeds with probability above one
    /// half, so the expected number of draws is below two.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn random_below<R>(rng: &mut R, bound: &Self) -> Self
    where
        R: CryptoRng + RngCore + ?Sized,
    {
        assert!(!bound.is_zero(), "empty sampling range");
        let bits = bound.bits();
        let len = bits.div_ceil(8);
        let mask = 0xFFu8 >> (len * 8 - bits);
        let mut buf = vec![0u8; len];
        loop {
            rng.fill_bytes(&mut buf);
            buf[0] &= mask;
            let candidate = Self::from_be_bytes(&buf);
            if &candidate < bound {
                return candidate;
            }
        }
    }
}
