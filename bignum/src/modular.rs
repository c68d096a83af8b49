//!
//! Modular exponentiation and modular inversion
//!

use crate::BigInt;

impl BigInt {
    /// `self ^ exponent mod modulus` by left-to-right square and multiply.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn modpow(&self, exponent: &Self, modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "modpow with zero modulus");
        if modulus == &Self::one() {
            return Self::zero();
        }
        let base = self % modulus;
        let mut result = Self::one();
        for i in (0..exponent.bits()).rev() {
            result = &(&result * &result) % modulus;
            if exponent.bit(i) {
                result = &(&result * &base) % modulus;
            }
        }
        result
    }

    /// Modular multiplicative inverse of `self` modulo `modulus`, by the
    /// extended Euclidean algorithm.
    ///
    /// Returns `None` when no inverse exists: `self` and `modulus` share a
    /// factor, `self` is congruent to zero, or `modulus` is below two.
    pub fn inv_mod(&self, modulus: &Self) -> Option<Self> {
        if modulus <= &Self::one() {
            return None;
        }
        let reduced = self % modulus;
        if reduced.is_zero() {
            return None;
        }

        let mut r0 = modulus.clone();
        let mut r1 = reduced;
        let mut t0 = Signed::zero();
        let mut t1 = Signed::one();
        while !r1.is_zero() {
            let (q, r2) = r0.div_rem(&r1);
            let t2 = t0.sub(&t1.mul(&q));
            r0 = r1;
            r1 = r2;
            t0 = t1;
            t1 = t2;
        }
        if r0 != Self::one() {
            return None;
        }
        Some(if t0.negative {
            modulus - &t0.magnitude
        } else {
            t0.magnitude
        })
    }
}

/// Sign-and-magnitude Bezout coefficient; the unsigned integer type cannot
/// represent the intermediate negatives of the extended Euclidean loop.
struct Signed {
    negative: bool,
    magnitude: BigInt,
}

impl Signed {
    fn zero() -> Self {
        Self {
            negative: false,
            magnitude: BigInt::zero(),
        }
    }

    fn one() -> Self {
        Self {
            negative: false,
            magnitude: BigInt::one(),
        }
    }

    fn mul(&self, rhs: &BigInt) -> Self {
        let magnitude = &self.magnitude * rhs;
        Self {
            negative: self.negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    fn sub(&self, rhs: &Self) -> Self {
        if self.negative != rhs.negative {
            // Opposite signs: magnitudes add, sign follows the minuend.
            let magnitude = &self.magnitude + &rhs.magnitude;
            Self {
                negative: self.negative && !magnitude.is_zero(),
                magnitude,
            }
        } else if self.magnitude >= rhs.magnitude {
            let magnitude = &self.magnitude - &rhs.magnitude;
            Self {
                negative: self.negative && !magnitude.is_zero(),
                magnitude,
            }
        } else {
            let magnitude = &rhs.magnitude - &self.magnitude;
            Self {
                negative: !self.negative,
                magnitude,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn modpow_zero_exponent_is_one() {
        let g = BigInt::from(12345_u64);
        let p = BigInt::from(99991_u64);
        assert_eq!(g.modpow(&BigInt::zero(), &p), BigInt::one());
    }

    #[test]
    fn modpow_matches_naive_repeated_multiplication() {
        let base = BigInt::from(7_u64);
        let modulus = BigInt::from(1009_u64);
        let mut expected = BigInt::one();
        for exponent in 0..40_u64 {
            assert_eq!(base.modpow(&BigInt::from(exponent), &modulus), expected);
            expected = &(&expected * &base) % &modulus;
        }
    }

    #[test]
    fn modpow_modulus_one_is_zero() {
        let g = BigInt::from(5_u64);
        assert_eq!(g.modpow(&BigInt::from(3_u64), &BigInt::one()), BigInt::zero());
    }

    #[test]
    fn modpow_large_operands() {
        // 2^255 mod (2^61 - 1), a Mersenne prime: 255 = 4 * 61 + 11, and
        // 2^61 = 1 (mod p), so the result is 2^11.
        let base = BigInt::from(2_u64);
        let exponent = BigInt::from(255_u64);
        let modulus = BigInt::from((1_u64 << 61) - 1);
        assert_eq!(base.modpow(&exponent, &modulus), BigInt::from(1_u64 << 11));
    }

    #[test]
    fn inverse_times_value_is_one() {
        let m = BigInt::from(99991_u64); // prime
        for value in [2_u64, 3, 65537, 99990] {
            let a = BigInt::from(value);
            let inv = a.inv_mod(&m).expect("coprime with a prime modulus");
            assert_eq!(&(&a * &inv) % &m, BigInt::one());
        }
    }

    #[test]
    fn inverse_of_non_coprime_is_none() {
        let a = BigInt::from(6_u64);
        let m = BigInt::from(9_u64);
        assert_eq!(a.inv_mod(&m), None);
    }

    #[test]
    fn inverse_of_zero_is_none() {
        assert_eq!(BigInt::zero().inv_mod(&BigInt::from(7_u64)), None);
        assert_eq!(BigInt::from(7_u64).inv_mod(&BigInt::from(7_u64)), None);
    }

    #[test]
    fn inverse_modulo_one_is_none() {
        assert_eq!(BigInt::from(3_u64).inv_mod(&BigInt::one()), None);
    }
}
