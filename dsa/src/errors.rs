//!
//! Error types
//!

use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Ways signing, verification and key codec operations fail.
///
/// "Signature does not match" is deliberately not in here: a well-formed
/// signature that fails the arithmetic check is `Ok(false)` from
/// [`VerifyingKey::verify_prehashed`](crate::VerifyingKey::verify_prehashed),
/// never an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A DER-level failure while reading or writing a container.
    Asn1(asn1der::Error),

    /// A decoded key container did not match the PKCS#8 or
    /// SubjectPublicKeyInfo schema: wrong outer shape, missing fields, a
    /// foreign algorithm identifier, or component values outside the
    /// representable key space.
    MalformedKey,

    /// A signature container did not hold a sequence of two positive
    /// integers.
    MalformedSignature,

    /// The private key container held no private component.
    MissingPrivateKey,

    /// A message digest was not the expected 20 bytes; the value is the
    /// length received.
    InvalidDigestLength(usize),

    /// The combined byte size of the decoded signature components falls
    /// outside the window a well-formed signature for the key's subgroup
    /// can occupy; the value is the size received.
    InvalidSignatureLength(usize),

    /// No modular inverse exists for the given inputs.
    NoModularInverse,

    /// The random source failed to yield a usable per-message secret
    /// within the attempt bound.
    SecretNumberExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asn1(err) => write!(f, "dsa: {err}"),
            Error::MalformedKey => write!(f, "dsa: key container does not match its schema"),
            Error::MalformedSignature => {
                write!(f, "dsa: signature is not a sequence of two positive integers")
            }
            Error::MissingPrivateKey => {
                write!(f, "dsa: container holds no private key component")
            }
            Error::InvalidDigestLength(len) => {
                write!(f, "dsa: digest must be 20 bytes, got {len}")
            }
            Error::InvalidSignatureLength(len) => {
                write!(f, "dsa: signature components total {len} bytes, outside the expected window")
            }
            Error::NoModularInverse => write!(f, "dsa: no modular inverse exists"),
            Error::SecretNumberExhausted => {
                write!(f, "dsa: could not draw a usable per-message secret")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Asn1(err) => Some(err),
            _ => None,
        }
    }
}

impl From<asn1der::Error> for Error {
    fn from(err: asn1der::Error) -> Self {
        Error::Asn1(err)
    }
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> Self {
        signature::Error::new()
    }
}
