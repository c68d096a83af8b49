//!
//! Object identifier content octets
//!

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{tag, Error, Node, Result};

impl Node {
    /// OBJECT IDENTIFIER node for a dotted identifier string.
    pub fn oid(oid: &str) -> Result<Self> {
        Ok(Self::primitive(tag::OBJECT_IDENTIFIER, encode_oid(oid)?))
    }
}

/// Encode a dotted object identifier string into DER content octets.
///
/// The first two arcs pack into a single value as `40 * first + second`;
/// every arc value is then written as base-128 groups with the high bit
/// set on all octets but the last.
pub fn encode_oid(oid: &str) -> Result<Vec<u8>> {
    let mut arcs = oid
        .split('.')
        .map(|part| part.parse::<u64>().map_err(|_| Error::InvalidOid));
    let first = arcs.next().ok_or(Error::InvalidOid)??;
    let second = arcs.next().ok_or(Error::InvalidOid)??;
    if first > 2 || (first < 2 && second >= 40) {
        return Err(Error::InvalidOid);
    }
    let mut out = Vec::new();
    push_arc(first * 40 + second, &mut out);
    for arc in arcs {
        push_arc(arc?, &mut out);
    }
    Ok(out)
}

/// Decode DER object identifier content octets into a dotted string.
pub fn decode_oid(content: &[u8]) -> Result<String> {
    match content.last() {
        None => return Err(Error::InvalidOid),
        Some(last) if last & 0x80 != 0 => return Err(Error::InvalidOid),
        Some(_) => {}
    }

    let mut arcs = Vec::new();
    let mut acc = 0u64;
    let mut group_len = 0usize;
    for &b in content {
        if group_len == 0 && b == 0x80 {
            // A leading zero septet is a non-minimal encoding.
            return Err(Error::InvalidOid);
        }
        if group_len == 9 {
            return Err(Error::InvalidOid);
        }
        acc = (acc << 7) | u64::from(b & 0x7F);
        group_len += 1;
        if b & 0x80 == 0 {
            arcs.push(acc);
            acc = 0;
            group_len = 0;
        }
    }

    let packed = arcs[0];
    let (first, second) = if packed < 40 {
        (0, packed)
    } else if packed < 80 {
        (1, packed - 40)
    } else {
        (2, packed - 80)
    };
    let mut out = format!("{first}.{second}");
    for arc in &arcs[1..] {
        out.push_str(&format!(".{arc}"));
    }
    Ok(out)
}

fn push_arc(mut arc: u64, out: &mut Vec<u8>) {
    let mut groups = [0u8; 10];
    let mut top = 0;
    loop {
        groups[top] = (arc & 0x7F) as u8;
        arc >>= 7;
        if arc == 0 {
            break;
        }
        top += 1;
    }
    while top > 0 {
        out.push(groups[top] | 0x80);
        top -= 1;
    }
    out.push(groups[0]);
}

#[cfg(test)]
mod tests {
    use super::{decode_oid, encode_oid};
    use crate::Error;
    use alloc::string::String;

    #[test]
    fn dsa_oid_content_octets() {
        assert_eq!(
            encode_oid("1.2.840.10040.4.1").unwrap(),
            [0x2A, 0x86, 0x48, 0xCE, 0x38, 0x04, 0x01]
        );
    }

    #[test]
    fn decode_matches_encode() {
        for oid in ["1.2.840.10040.4.1", "2.5.4.3", "0.9.2342.19200300.100.1.1"] {
            let content = encode_oid(oid).unwrap();
            assert_eq!(decode_oid(&content).unwrap(), String::from(oid));
        }
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for oid in ["", "1", "1.", "1.40", "3.1", "a.b", "1.2.x"] {
            assert_eq!(encode_oid(oid), Err(Error::InvalidOid), "{oid}");
        }
    }

    #[test]
    fn malformed_octets_are_rejected() {
        // Empty, dangling continuation bit, non-minimal leading septet.
        assert_eq!(decode_oid(&[]), Err(Error::InvalidOid));
        assert_eq!(decode_oid(&[0x2A, 0x86]), Err(Error::InvalidOid));
        assert_eq!(decode_oid(&[0x2A, 0x80, 0x01]), Err(Error::InvalidOid));
    }
}
