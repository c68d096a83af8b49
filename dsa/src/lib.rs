#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

//! Digital Signature Algorithm (DSA) over caller-supplied domain
//! parameters.
//!
//! Keys travel in the standard containers: PKCS#8 `PrivateKeyInfo` for
//! private keys and X.509 `SubjectPublicKeyInfo` for public keys, both
//! DER-encoded through the in-repo [`asn1der`] codec. Signatures are the
//! DER sequence of the two integers (r, s). All modular arithmetic runs
//! on [`bignum::BigInt`].
//!
//! Signing is randomized: every signature draws a fresh per-message
//! secret from a caller-provided CSPRNG. The scheme operates over a
//! 20-byte SHA-1 digest, the hash the containers were historically
//! paired with.
//!
//! # Example
//!
//! ```
//! use dsa::{BigInt, Components, SigningKey};
//! use dsa::signature::{RandomizedSigner, Verifier};
//!
//! // Toy domain parameters to keep the example fast; real deployments
//! // use standardized groups of at least 1024/160 bits.
//! let components = Components::from_components(
//!     BigInt::from(23_u64),
//!     BigInt::from(11_u64),
//!     BigInt::from(4_u64),
//! );
//! let signing_key = SigningKey::generate(&mut rand::thread_rng(), components);
//!
//! let signature = signing_key.try_sign_with_rng(&mut rand::thread_rng(), b"hello world")?;
//! signing_key.verifying_key().verify(b"hello world", &signature)?;
//! # Ok::<(), dsa::signature::Error>(())
//! ```

extern crate alloc;

mod components;
mod encoding;
mod errors;
mod generate;
mod sig;
mod signing_key;
mod verifying_key;

pub use crate::components::Components;
pub use crate::errors::{Error, Result};
pub use crate::sig::Signature;
pub use crate::signing_key::SigningKey;
pub use crate::verifying_key::VerifyingKey;

pub use bignum::BigInt;
pub use signature;

/// DSA object identifier as defined by RFC 3279 section 2.3.2.
pub const OID: &str = "1.2.840.10040.4.1";

/// Output size in bytes of the SHA-1 digest the scheme signs.
pub const SHA1_OUTPUT_LEN: usize = 20;
