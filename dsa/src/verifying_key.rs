//!
//! Module containing the definition of the public key container
//!

use core::cmp::min;

use bignum::BigInt;
use digest::Digest;
use sha1::Sha1;
use signature::hazmat::PrehashVerifier;
use signature::{DigestVerifier, Verifier};

use crate::{Components, Error, Result, Signature, SHA1_OUTPUT_LEN};

/// DSA public key.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct VerifyingKey {
    /// Common components
    components: Components,

    /// Public component y
    y: BigInt,
}

impl VerifyingKey {
    /// Construct a new public key from the common components and the
    /// public component y.
    ///
    /// Beyond rejecting a zero y, no group-membership validation takes
    /// place; callers own the soundness of their parameters.
    pub fn from_components(components: Components, y: BigInt) -> Result<Self> {
        if y.is_zero() {
            return Err(Error::MalformedKey);
        }
        Ok(Self { components, y })
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA public component
    #[must_use]
    pub const fn y(&self) -> &BigInt {
        &self.y
    }

    /// Check a signature over a pre-computed 20-byte SHA-1 digest.
    ///
    /// Structural failures (digest or signature size) are errors; a
    /// well-formed signature that simply does not match is `Ok(false)`.
    pub fn verify_prehashed(&self, prehash: &[u8], signature: &Signature) -> Result<bool> {
        if prehash.len() != SHA1_OUTPUT_LEN {
            return Err(Error::InvalidDigestLength(prehash.len()));
        }
        let components = self.components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let (r, s) = (signature.r(), signature.s());

        // Reject grossly malformed pairs before doing modular arithmetic
        // on attacker-controlled integers. A well-formed pair for this
        // subgroup occupies at most 2 * len(q) bytes and loses at most
        // one leading byte per component to a short top digit.
        let q_len = q.byte_len();
        let total = r.byte_len() + s.byte_len();
        if total + 2 < 2 * q_len || total > 2 * q_len {
            return Err(Error::InvalidSignatureLength(total));
        }

        if r >= q || s >= q {
            return Ok(false);
        }

        // For a prime q every s in (0, q) has an inverse; failure here
        // means the caller supplied a composite subgroup order.
        let w = s.inv_mod(q).ok_or(Error::NoModularInverse)?;

        let z_len = min(q_len, prehash.len());
        let z = BigInt::from_be_bytes(&prehash[..z_len]);

        let u1 = &(&z * &w) % q;
        let u2 = &(r * &w) % q;
        let v1 = g.modpow(&u1, p);
        let v2 = self.y.modpow(&u2, p);
        let v = &(&(&v1 * &v2) % p) % q;

        Ok(v == *r)
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        self.verify_digest(Sha1::new().chain_update(msg), signature)
    }
}

impl<D> DigestVerifier<D, Signature> for VerifyingKey
where
    D: Digest,
{
    fn verify_digest(&self, digest: D, signature: &Signature) -> signature::Result<()> {
        let hash = digest.finalize();
        if self.verify_prehashed(&hash, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_prehashed(prehash, signature)? {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}
