//! RFC 1035 message codec.
//!
//! Every decoder takes the whole message buffer plus a starting offset and
//! returns the decoded value together with the offset just past it. Callers
//! pass that offset verbatim into the next decode; nothing re-scans the
//! buffer. Reads go through the bounds-checked helpers in [`primitives`], so
//! malformed input yields a [`WireError`] and never a panic.

pub mod bits;
pub mod errors;
pub mod header;
pub mod message;
pub mod name;
pub mod primitives;
pub mod question;
pub mod rdata;
pub mod record;

pub use errors::{DecodeFailure, EncodeFailure, WireError};
pub use header::{Header, MessageType, Opcode, ResponseCode, HEADER_LEN};
pub use message::Message;
pub use question::Question;
pub use rdata::{RData, Soa};
pub use record::ResourceRecord;

/// Conventional UDP payload limit without EDNS(0), RFC 1035 §4.2.1.
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub trait WireEncode {
    fn encode(&self) -> Result<Vec<u8>, WireError>;
}

pub trait WireDecode: Sized {
    /// Decodes one value at `offset`, returning it and the offset just past it.
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError>;
}

/// Decodes into a caller-supplied slot.
///
/// Fails with [`WireError::NilTarget`] when no slot is given; the slot is
/// left untouched on any error.
pub fn decode_into<T: WireDecode>(
    target: Option<&mut T>,
    buf: &[u8],
    offset: usize,
) -> Result<usize, WireError> {
    let target = target.ok_or(WireError::NilTarget)?;
    let (value, next) = T::decode(buf, offset)?;
    *target = value;
    Ok(next)
}
