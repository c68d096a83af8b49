//!
//! Module containing the definition of the signature container
//!

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use asn1der::{tag, unsigned_integer, unsigned_integer_value, Node};
use bignum::BigInt;
use signature::SignatureEncoding;

use crate::{Error, Result};

/// Container of the DSA signature pair (r, s)
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Signature {
    /// Signature part r
    r: BigInt,

    /// Signature part s
    s: BigInt,
}

impl Signature {
    /// Create a new signature container from its components
    ///
    /// Returns `None` when either component is zero; the algorithm never
    /// emits such a pair.
    pub fn from_components(r: BigInt, s: BigInt) -> Option<Self> {
        if r.is_zero() || s.is_zero() {
            return None;
        }
        Some(Self { r, s })
    }

    /// Signature part r
    #[must_use]
    pub const fn r(&self) -> &BigInt {
        &self.r
    }

    /// Signature part s
    #[must_use]
    pub const fn s(&self) -> &BigInt {
        &self.s
    }

    /// Encode as the DER sequence of the two integers.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let sequence = Node::constructed(
            tag::SEQUENCE,
            vec![
                unsigned_integer(&self.r.to_be_bytes()),
                unsigned_integer(&self.s.to_be_bytes()),
            ],
        );
        Ok(sequence.to_der()?)
    }

    /// Decode from the DER sequence of the two integers.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let sequence = Node::from_der(bytes)?;
        if !sequence.is_constructed() || tag::number(sequence.tag()) != tag::SEQUENCE {
            return Err(Error::MalformedSignature);
        }
        let r = integer_component(&sequence, 0)?;
        let s = integer_component(&sequence, 1)?;
        Self::from_components(r, s).ok_or(Error::MalformedSignature)
    }
}

fn integer_component(sequence: &Node, index: usize) -> Result<BigInt> {
    let child = sequence.child(index).ok_or(Error::MalformedSignature)?;
    let bytes = unsigned_integer_value(child).map_err(|_| Error::MalformedSignature)?;
    Ok(BigInt::from_be_bytes(&bytes))
}

impl From<Signature> for Box<[u8]> {
    fn from(sig: Signature) -> Box<[u8]> {
        sig.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = Box<[u8]>;

    fn to_bytes(&self) -> Box<[u8]> {
        SignatureEncoding::to_vec(self).into_boxed_slice()
    }

    fn to_vec(&self) -> Vec<u8> {
        self.to_der().expect("DER encoding error")
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = signature::Error;

    fn try_from(bytes: &[u8]) -> signature::Result<Self> {
        Self::from_der(bytes).map_err(Into::into)
    }
}
