//!
//! Unsigned big integers inside INTEGER nodes
//!

use alloc::vec::Vec;

use crate::{tag, Error, Node, Result};

/// Wrap unsigned big-endian bytes in an INTEGER node.
///
/// DER integers are signed two's complement, so a magnitude whose top bit
/// is set gains one leading zero octet to stay non-negative. The input is
/// canonicalized first; an empty or all-zero input is the integer zero.
pub fn unsigned_integer(bytes: &[u8]) -> Node {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let magnitude = &bytes[start..];
    let mut value = Vec::with_capacity(magnitude.len() + 1);
    if magnitude.is_empty() {
        value.push(0);
    } else {
        if magnitude[0] & 0x80 != 0 {
            value.push(0);
        }
        value.extend_from_slice(magnitude);
    }
    Node::primitive(tag::INTEGER, value)
}

/// Unsigned big-endian bytes of an INTEGER node.
///
/// Strips exactly one leading zero octet, and only when it was pure sign
/// padding (the following octet has its top bit set); any other content
/// comes back unchanged.
pub fn unsigned_integer_value(node: &Node) -> Result<Vec<u8>> {
    if tag::number(node.tag()) != tag::INTEGER || node.is_constructed() {
        return Err(Error::UnexpectedTag {
            expected: tag::INTEGER,
            actual: node.tag(),
        });
    }
    let value = node.value().unwrap_or(&[]);
    if value.len() > 1 && value[0] == 0 && value[1] & 0x80 != 0 {
        Ok(value[1..].to_vec())
    } else {
        Ok(value.to_vec())
    }
}
