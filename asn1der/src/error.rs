use core::fmt;

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Decoding and encoding failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Fewer bytes remained than a tag, length or declared value needs.
    TruncatedInput,

    /// A length did not fit the supported range: more than four long-form
    /// octets on decode, or a value longer than 32 bits can express on
    /// encode.
    LengthOverflow,

    /// The indefinite length octet `0x80`, which DER forbids.
    IndefiniteLength,

    /// Constructed values nested past the supported depth.
    NestedTooDeep,

    /// A node carried a different tag than the schema expects.
    UnexpectedTag {
        /// Tag the caller required.
        expected: u8,
        /// Tag actually present.
        actual: u8,
    },

    /// An object identifier string or content octet sequence was invalid.
    InvalidOid,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedInput => write!(f, "asn1: input ended inside a TLV structure"),
            Error::LengthOverflow => write!(f, "asn1: length outside the supported 32-bit range"),
            Error::IndefiniteLength => write!(f, "asn1: indefinite length is not valid DER"),
            Error::NestedTooDeep => write!(f, "asn1: constructed values nested too deeply"),
            Error::UnexpectedTag { expected, actual } => write!(
                f,
                "asn1: expected tag 0x{expected:02x}, found 0x{actual:02x}"
            ),
            Error::InvalidOid => write!(f, "asn1: malformed object identifier"),
        }
    }
}

impl core::error::Error for Error {}
