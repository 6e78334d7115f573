//! The fixed 12-byte message header, RFC 1035 §4.1.1.
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! |                    ANCOUNT                    |
//! |                    NSCOUNT                    |
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```

use super::bits::{get_bits_at, set_bits_at};
use super::errors::WireError;
use super::primitives::{read_u16_be, read_u8};
use super::{WireDecode, WireEncode};
use std::fmt;

pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    #[default]
    Query,
    Response,
}

impl MessageType {
    fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            MessageType::Query
        } else {
            MessageType::Response
        }
    }

    fn to_bit(self) -> u8 {
        match self {
            MessageType::Query => 0,
            MessageType::Response => 1,
        }
    }
}

/// Kind of query, copied from the query into the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Opcode {
    #[default]
    Query,
    IQuery,
    Status,
    /// 3-15, reserved for future use. Lower values encode as the named
    /// opcode and only the low four bits are kept; see [`Opcode::canonical`].
    Reserved(u8),
}

impl Opcode {
    /// The variant this opcode decodes back to once encoded.
    pub fn canonical(self) -> Self {
        Self::from_u8(self.to_u8())
    }

    pub fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            other => Opcode::Reserved(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Reserved(value) => value & 0x0F,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            Opcode::Query => write!(f, "QUERY"),
            Opcode::IQuery => write!(f, "IQUERY"),
            Opcode::Status => write!(f, "STATUS"),
            Opcode::Reserved(value) => write!(f, "OPCODE{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    /// 6-15, reserved for future use. Lower values encode as the named
    /// code and only the low four bits are kept; see [`ResponseCode::canonical`].
    Reserved(u8),
}

impl ResponseCode {
    /// The variant this code decodes back to once encoded.
    pub fn canonical(self) -> Self {
        Self::from_u8(self.to_u8())
    }

    pub fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Reserved(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Reserved(value) => value & 0x0F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Reserved(_) => "RESERVED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical() {
            ResponseCode::Reserved(value) => write!(f, "RCODE{}", value),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Header {
    pub id: u16,
    pub message_type: MessageType,
    pub opcode: Opcode,
    /// AA: the responding server is an authority for the question name.
    pub authoritative: bool,
    /// TC: the message was truncated by the transport.
    pub truncated: bool,
    /// RD
    pub recursion_desired: bool,
    /// RA
    pub recursion_available: bool,
    /// Reserved bits. Senders must zero them; the decoder keeps whatever arrived.
    pub z: u8,
    pub response_code: ResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn is_response(&self) -> bool {
        self.message_type == MessageType::Response
    }

    fn flags_high(&self) -> u8 {
        set_bits_at(self.message_type.to_bit(), 0, 1)
            | set_bits_at(self.opcode.to_u8(), 1, 4)
            | set_bits_at(self.authoritative as u8, 5, 1)
            | set_bits_at(self.truncated as u8, 6, 1)
            | set_bits_at(self.recursion_desired as u8, 7, 1)
    }

    fn flags_low(&self) -> u8 {
        set_bits_at(self.recursion_available as u8, 0, 1)
            | set_bits_at(self.z, 1, 3)
            | set_bits_at(self.response_code.to_u8(), 4, 4)
    }
}

impl WireEncode for Header {
    fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut out = Vec::with_capacity(HEADER_LEN);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.push(self.flags_high());
        out.push(self.flags_low());
        out.extend_from_slice(&self.question_count.to_be_bytes());
        out.extend_from_slice(&self.answer_count.to_be_bytes());
        out.extend_from_slice(&self.authority_count.to_be_bytes());
        out.extend_from_slice(&self.additional_count.to_be_bytes());
        Ok(out)
    }
}

impl WireDecode for Header {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let available = buf.len().saturating_sub(offset);
        if available < HEADER_LEN {
            return Err(WireError::ShortHeader { found: available });
        }

        let (id, cursor) = read_u16_be(buf, offset)?;
        let (high, cursor) = read_u8(buf, cursor)?;
        let (low, cursor) = read_u8(buf, cursor)?;
        let (question_count, cursor) = read_u16_be(buf, cursor)?;
        let (answer_count, cursor) = read_u16_be(buf, cursor)?;
        let (authority_count, cursor) = read_u16_be(buf, cursor)?;
        let (additional_count, cursor) = read_u16_be(buf, cursor)?;

        let header = Header {
            id,
            message_type: MessageType::from_bit(get_bits_at(high, 0, 1)),
            opcode: Opcode::from_u8(get_bits_at(high, 1, 4)),
            authoritative: get_bits_at(high, 5, 1) == 1,
            truncated: get_bits_at(high, 6, 1) == 1,
            recursion_desired: get_bits_at(high, 7, 1) == 1,
            recursion_available: get_bits_at(low, 0, 1) == 1,
            z: get_bits_at(low, 1, 3),
            response_code: ResponseCode::from_u8(get_bits_at(low, 4, 4)),
            question_count,
            answer_count,
            authority_count,
            additional_count,
        };

        Ok((header, cursor))
    }
}
