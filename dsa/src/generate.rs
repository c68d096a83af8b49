//!
//! Keypair and per-message secret generation for existing domain
//! parameters
//!

use bignum::BigInt;
use signature::rand_core::CryptoRngCore;

use crate::{Components, Error, Result, SigningKey, VerifyingKey};

/// Attempt bound when drawing a per-message secret; give up afterwards
/// rather than spin on a broken random source.
const MAX_ATTEMPTS: usize = 4096;

/// Generate a keypair from existing components.
#[inline]
pub(crate) fn keypair<R>(rng: &mut R, components: Components) -> SigningKey
where
    R: CryptoRngCore + ?Sized,
{
    let x = loop {
        let candidate = BigInt::random_below(rng, components.q());
        if !candidate.is_zero() {
            break candidate;
        }
    };
    let y = public_component(&components, &x);

    VerifyingKey::from_components(components, y)
        .and_then(|verifying_key| SigningKey::from_components(verifying_key, x))
        .expect("newly generated keypair considered invalid")
}

/// Calculate the public component y = g^x mod p.
#[inline]
pub(crate) fn public_component(components: &Components, x: &BigInt) -> BigInt {
    components.g().modpow(x, components.p())
}

/// Draw a per-message secret k uniformly from (0, q), together with its
/// inverse modulo q. Unusable draws (zero, or no inverse) are resampled
/// rather than reduced, which would bias the distribution.
pub(crate) fn secret_number<R>(rng: &mut R, components: &Components) -> Result<(BigInt, BigInt)>
where
    R: CryptoRngCore + ?Sized,
{
    let q = components.q();
    for _ in 0..MAX_ATTEMPTS {
        let k = BigInt::random_below(rng, q);
        if k.is_zero() {
            continue;
        }
        if let Some(inv_k) = k.inv_mod(q) {
            return Ok((k, inv_k));
        }
    }
    Err(Error::SecretNumberExhausted)
}
