#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

//! Minimal ASN.1/DER codec.
//!
//! ASN.1 describes data as a tree of tag-length-value (TLV) triplets; DER
//! is the canonical binary encoding of that tree, the one key and
//! signature containers such as PKCS#8 and X.509 SubjectPublicKeyInfo are
//! written in. This crate covers exactly the subset those containers
//! need:
//!
//! - single-byte (low tag number) identifiers, universal class;
//! - canonical shortest-form lengths, long form capped at four octets
//!   (values whose length fits 32 bits);
//! - recursive constructed values (bit `0x20` of the tag);
//! - the signed-integer padding convention for unsigned big integers;
//! - OID content octets for dotted identifier strings.
//!
//! High tag number forms and non-canonical BER lengths are out of scope.

extern crate alloc;

mod error;
mod int;
mod node;
mod oid;
pub mod tag;

pub use error::{Error, Result};
pub use int::{unsigned_integer, unsigned_integer_value};
pub use node::Node;
pub use oid::{decode_oid, encode_oid};
