//!
//! Module containing the definition of the private key container
//!

use core::cmp::min;
use core::fmt;

use bignum::BigInt;
use digest::Digest;
use sha1::Sha1;
use signature::hazmat::RandomizedPrehashSigner;
use signature::rand_core::CryptoRngCore;
use signature::{RandomizedDigestSigner, RandomizedSigner};
use zeroize::Zeroizing;

use crate::{generate, Components, Error, Result, Signature, VerifyingKey, SHA1_OUTPUT_LEN};

/// Draws of the per-message secret before a degenerate (zero r or s)
/// outcome is treated as failure. Real-world subgroup orders make even a
/// single retry astronomically unlikely; the headroom matters only for
/// toy parameters.
const MAX_SIGN_ATTEMPTS: usize = 64;

/// DSA private key.
#[derive(Clone)]
#[must_use]
pub struct SigningKey {
    /// Public half
    verifying_key: VerifyingKey,

    /// Private component x
    x: Zeroizing<BigInt>,
}

impl SigningKey {
    /// Construct a new private key from the public key and the private
    /// component x.
    pub fn from_components(verifying_key: VerifyingKey, x: BigInt) -> Result<Self> {
        if x.is_zero() || x > *verifying_key.components().q() {
            return Err(Error::MalformedKey);
        }
        Ok(Self {
            verifying_key,
            x: Zeroizing::new(x),
        })
    }

    /// Generate a new keypair for existing domain parameters.
    #[inline]
    pub fn generate<R>(rng: &mut R, components: Components) -> SigningKey
    where
        R: CryptoRngCore + ?Sized,
    {
        generate::keypair(rng, components)
    }

    /// DSA public key
    pub const fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// DSA private component
    ///
    /// Clones of this value should be wiped with
    /// [`Zeroize::zeroize`](::zeroize::Zeroize::zeroize()) when done.
    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Sign a pre-computed 20-byte SHA-1 digest with a fresh per-message
    /// secret from `rng`.
    pub fn sign_prehashed<R>(&self, rng: &mut R, prehash: &[u8]) -> Result<Signature>
    where
        R: CryptoRngCore + ?Sized,
    {
        if prehash.len() != SHA1_OUTPUT_LEN {
            return Err(Error::InvalidDigestLength(prehash.len()));
        }
        let components = self.verifying_key.components();
        let (p, q, g) = (components.p(), components.q(), components.g());

        let z_len = min(q.byte_len(), prehash.len());
        let z = BigInt::from_be_bytes(&prehash[..z_len]);

        for _ in 0..MAX_SIGN_ATTEMPTS {
            let (k, inv_k) = generate::secret_number(rng, components)?;

            let r = &g.modpow(&k, p) % q;
            let xr = &*self.x * &r;
            let s = &(&inv_k * &(&z + &xr)) % q;

            // r or s may come out zero; draw another secret rather than
            // emit a degenerate pair.
            if let Some(signature) = Signature::from_components(r, s) {
                return Ok(signature);
            }
        }
        Err(Error::SecretNumberExhausted)
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.verifying_key == other.verifying_key && *self.x == *other.x
    }
}

impl Eq for SigningKey {}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The private component stays out of debug output.
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl<D> RandomizedDigestSigner<D, Signature> for SigningKey
where
    D: Digest,
{
    fn try_sign_digest_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: D,
    ) -> signature::Result<Signature> {
        let hash = digest.finalize();
        self.sign_prehashed(rng, &hash).map_err(Into::into)
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        self.try_sign_digest_with_rng(rng, Sha1::new().chain_update(msg))
    }
}

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        self.sign_prehashed(rng, prehash).map_err(Into::into)
    }
}
