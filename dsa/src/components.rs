//!
//! Module containing the definition of the common components container
//!

use bignum::BigInt;

/// The common components of a DSA keypair
///
/// (the prime modulus p, the subgroup order q and the generator g)
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Components {
    /// Prime modulus p
    p: BigInt,

    /// Subgroup order q
    q: BigInt,

    /// Generator g
    g: BigInt,
}

impl Components {
    /// Construct the container from its inner values (p, q and g)
    ///
    /// The values are not verified for primality, size or group
    /// membership; callers are responsible for supplying sound domain
    /// parameters.
    pub const fn from_components(p: BigInt, q: BigInt, g: BigInt) -> Self {
        Self { p, q, g }
    }

    /// DSA prime modulus p
    #[must_use]
    pub const fn p(&self) -> &BigInt {
        &self.p
    }

    /// DSA subgroup order q
    #[must_use]
    pub const fn q(&self) -> &BigInt {
        &self.q
    }

    /// DSA generator g
    #[must_use]
    pub const fn g(&self) -> &BigInt {
        &self.g
    }

    /// Opt-in plausibility check over the components
    ///
    /// This is a cheap shape test, not a primality or subgroup proof.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let two = BigInt::from(2_u64);
        *self.p() >= two && *self.q() >= two && *self.g() >= BigInt::one() && self.g() < self.p()
    }
}
