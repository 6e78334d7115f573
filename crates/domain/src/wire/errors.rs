use thiserror::Error;

/// Failure raised by one of the wire codec routines.
///
/// Every variant is detected at the point of violation and propagated upward
/// unchanged; the codec never retries or recovers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("buffer underrun: need {needed} bytes at offset {offset}, buffer holds {available}")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("header requires 12 bytes, found {found}")]
    ShortHeader { found: usize },

    #[error("cannot decode into a missing target")]
    NilTarget,

    #[error("malformed label: unsupported length octet {octet:#04x} at offset {offset}")]
    MalformedLabel { offset: usize, octet: u8 },

    #[error("domain name exceeds 255 wire octets")]
    DomainTooLong,

    #[error("too many compression pointers in domain name")]
    TooManyCompressionPointers,

    #[error("malformed QNAME {0:?}: at least two labels are required")]
    MalformedQName(String),

    #[error("empty label in domain name {0:?}")]
    EmptyLabel(String),

    #[error("label {label:?} is {len} octets long, the maximum is 63")]
    LabelTooLong { label: String, len: usize },

    #[error("resource record encoding is not supported")]
    EncodingNotSupported,
}

/// A message encode that stopped part way through.
///
/// `partial` holds whatever was written before the failing section; it is
/// informational only and never a usable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("message encoding failed after {} bytes: {error}", .partial.len())]
pub struct EncodeFailure {
    pub partial: Vec<u8>,
    #[source]
    pub error: WireError,
}

/// A message decode that stopped part way through, with the cursor reached
/// before the failing entity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("message decoding failed at offset {cursor}: {error}")]
pub struct DecodeFailure {
    pub cursor: usize,
    #[source]
    pub error: WireError,
}
