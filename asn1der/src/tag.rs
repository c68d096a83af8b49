//! Tag bytes for the universal types the codec works with.
//!
//! Bits 1-5 of a tag byte give the universal type number, bit 6 marks a
//! constructed value and bits 7-8 give the class (always universal here).

/// Boolean type.
pub const BOOLEAN: u8 = 0x01;

/// Integer type.
pub const INTEGER: u8 = 0x02;

/// Bit string type.
pub const BIT_STRING: u8 = 0x03;

/// Octet string type.
pub const OCTET_STRING: u8 = 0x04;

/// Null type.
pub const NULL: u8 = 0x05;

/// Object identifier type.
pub const OBJECT_IDENTIFIER: u8 = 0x06;

/// Sequence and sequence-of types.
pub const SEQUENCE: u8 = 0x10;

/// Set and set-of types.
pub const SET: u8 = 0x11;

/// Bit 6, set when the value is built from child structures.
pub const CONSTRUCTED: u8 = 0x20;

/// Universal type number of a tag byte, with class and constructed bits
/// masked off.
#[must_use]
pub const fn number(tag: u8) -> u8 {
    tag & 0x1F
}
