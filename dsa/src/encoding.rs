//!
//! PKCS#8 and SubjectPublicKeyInfo containers for the key types
//!
//! The private container is the PrivateKeyInfo layout:
//!
//! ```text
//! SEQUENCE {
//!     INTEGER 0                                -- version
//!     SEQUENCE {                               -- AlgorithmIdentifier
//!         OBJECT IDENTIFIER 1.2.840.10040.4.1
//!         SEQUENCE { INTEGER p; INTEGER q; INTEGER g }
//!     }
//!     OCTET STRING { INTEGER x }
//!     SET { }                                  -- attributes, empty
//! }
//! ```
//!
//! The public container is SubjectPublicKeyInfo: the same
//! AlgorithmIdentifier followed by a BIT STRING holding the INTEGER
//! encoding of y behind a zero unused-bits octet.

use alloc::vec;
use alloc::vec::Vec;

use asn1der::{tag, unsigned_integer, unsigned_integer_value, Node};
use bignum::BigInt;

use crate::{generate, Components, Error, Result, SigningKey, VerifyingKey, OID};

fn algorithm_identifier(components: &Components) -> Result<Node> {
    Ok(Node::constructed(
        tag::SEQUENCE,
        vec![
            Node::oid(OID)?,
            Node::constructed(
                tag::SEQUENCE,
                vec![
                    unsigned_integer(&components.p().to_be_bytes()),
                    unsigned_integer(&components.q().to_be_bytes()),
                    unsigned_integer(&components.g().to_be_bytes()),
                ],
            ),
        ],
    ))
}

fn require_sequence(node: &Node) -> Result<()> {
    if node.is_constructed() && tag::number(node.tag()) == tag::SEQUENCE {
        Ok(())
    } else {
        Err(Error::MalformedKey)
    }
}

fn integer_child(sequence: &Node, index: usize) -> Result<BigInt> {
    let child = sequence.child(index).ok_or(Error::MalformedKey)?;
    let bytes = unsigned_integer_value(child).map_err(|_| Error::MalformedKey)?;
    Ok(BigInt::from_be_bytes(&bytes))
}

/// Extract the common components from a decoded AlgorithmIdentifier,
/// checking that it names this algorithm.
fn components_from_algorithm(node: &Node) -> Result<Components> {
    require_sequence(node)?;
    let oid_node = node.child(0).ok_or(Error::MalformedKey)?;
    let expected_oid = asn1der::encode_oid(OID)?;
    if tag::number(oid_node.tag()) != tag::OBJECT_IDENTIFIER
        || oid_node.value() != Some(expected_oid.as_slice())
    {
        return Err(Error::MalformedKey);
    }

    let parameters = node.child(1).ok_or(Error::MalformedKey)?;
    require_sequence(parameters)?;
    let p = integer_child(parameters, 0)?;
    let q = integer_child(parameters, 1)?;
    let g = integer_child(parameters, 2)?;
    Ok(Components::from_components(p, q, g))
}

impl SigningKey {
    /// Encode into the PKCS#8 PrivateKeyInfo container.
    pub fn to_pkcs8_der(&self) -> Result<Vec<u8>> {
        let components = self.verifying_key().components();
        let x = unsigned_integer(&self.x().to_be_bytes()).to_der()?;
        let info = Node::constructed(
            tag::SEQUENCE,
            vec![
                unsigned_integer(&[0]),
                algorithm_identifier(components)?,
                Node::primitive(tag::OCTET_STRING, x),
                Node::empty(tag::SET),
            ],
        );
        Ok(info.to_der()?)
    }

    /// Decode from a PKCS#8 PrivateKeyInfo container.
    ///
    /// The container must decode as a constructed sequence carrying the
    /// DSA algorithm identifier; any deviation from the expected shape is
    /// [`Error::MalformedKey`]. The public component is recomputed from
    /// the private one.
    pub fn from_pkcs8_der(bytes: &[u8]) -> Result<Self> {
        match bytes.first() {
            Some(&first)
                if first & (tag::CONSTRUCTED | tag::SEQUENCE)
                    == tag::CONSTRUCTED | tag::SEQUENCE => {}
            _ => return Err(Error::MalformedKey),
        }
        let info = Node::from_der(bytes)?;
        require_sequence(&info)?;
        let components = components_from_algorithm(info.child(1).ok_or(Error::MalformedKey)?)?;

        let key_octets = info.child(2).ok_or(Error::MalformedKey)?;
        if tag::number(key_octets.tag()) != tag::OCTET_STRING || key_octets.is_constructed() {
            return Err(Error::MalformedKey);
        }
        let wrapped = key_octets.value().ok_or(Error::MissingPrivateKey)?;
        let x_node = Node::from_der(wrapped)?;
        let x_bytes = unsigned_integer_value(&x_node).map_err(|_| Error::MalformedKey)?;
        let x = BigInt::from_be_bytes(&x_bytes);
        if x.is_zero() {
            return Err(Error::MissingPrivateKey);
        }

        let y = generate::public_component(&components, &x);
        let verifying_key = VerifyingKey::from_components(components, y)?;
        Self::from_components(verifying_key, x)
    }
}

impl VerifyingKey {
    /// Encode into the SubjectPublicKeyInfo container.
    pub fn to_public_key_der(&self) -> Result<Vec<u8>> {
        let mut bits = vec![0];
        bits.extend_from_slice(&unsigned_integer(&self.y().to_be_bytes()).to_der()?);
        let info = Node::constructed(
            tag::SEQUENCE,
            vec![
                algorithm_identifier(self.components())?,
                Node::primitive(tag::BIT_STRING, bits),
            ],
        );
        Ok(info.to_der()?)
    }

    /// Decode from a SubjectPublicKeyInfo container.
    pub fn from_public_key_der(bytes: &[u8]) -> Result<Self> {
        let info = Node::from_der(bytes)?;
        require_sequence(&info)?;
        let components = components_from_algorithm(info.child(0).ok_or(Error::MalformedKey)?)?;

        let bits = info.child(1).ok_or(Error::MalformedKey)?;
        if tag::number(bits.tag()) != tag::BIT_STRING || bits.is_constructed() {
            return Err(Error::MalformedKey);
        }
        let value = bits.value().ok_or(Error::MalformedKey)?;
        let (&unused_bits, y_der) = value.split_first().ok_or(Error::MalformedKey)?;
        if unused_bits != 0 {
            return Err(Error::MalformedKey);
        }
        let y_node = Node::from_der(y_der)?;
        let y_bytes = unsigned_integer_value(&y_node).map_err(|_| Error::MalformedKey)?;
        Self::from_components(components, BigInt::from_be_bytes(&y_bytes))
    }
}
