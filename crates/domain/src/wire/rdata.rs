//! Typed RDATA payloads and the TYPE-driven decoder table.

use super::errors::WireError;
use super::name::decode_name;
use super::primitives::{read_bytes, read_u16_be, read_u32_be};
use crate::dns_record::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// SOA RDATA, RFC 1035 §3.3.13.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Soa {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    NS(String),
    PTR(String),
    MX { preference: u16, exchange: String },
    SOA(Soa),
    /// Character data after the leading length octet.
    TXT(Vec<u8>),
    /// Registered type that has been retired.
    Obsolete,
    /// Registered, current type with no decoder here.
    NotImplemented,
    /// TYPE code missing from the registry.
    Unknown(u16),
}

impl RData {
    /// Decodes the RDATA of a record of type `rtype` found at `offset`.
    ///
    /// Reads are confined to the declared `rdlength`: a payload that claims
    /// more than it declares fails with [`WireError::BufferUnderrun`].
    /// Names may still follow compression pointers to earlier parts of the
    /// message.
    pub fn decode(
        rtype: u16,
        buf: &[u8],
        offset: usize,
        rdlength: u16,
    ) -> Result<Self, WireError> {
        let (rdata, end) = read_bytes(buf, offset, usize::from(rdlength))?;
        let bounded = &buf[..end];

        let Some(record_type) = RecordType::from_u16(rtype) else {
            return Ok(RData::Unknown(rtype));
        };

        match record_type {
            RecordType::A => {
                let (octets, _) = read_bytes(bounded, offset, 4)?;
                Ok(RData::A(Ipv4Addr::new(
                    octets[0], octets[1], octets[2], octets[3],
                )))
            }
            RecordType::AAAA => {
                let (bytes, _) = read_bytes(bounded, offset, 16)?;
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Ok(RData::AAAA(Ipv6Addr::from(octets)))
            }
            RecordType::CNAME => Ok(RData::CNAME(decode_name(bounded, offset)?.0)),
            RecordType::NS => Ok(RData::NS(decode_name(bounded, offset)?.0)),
            RecordType::PTR => Ok(RData::PTR(decode_name(bounded, offset)?.0)),
            RecordType::TXT => Ok(RData::TXT(rdata.get(1..).unwrap_or_default().to_vec())),
            RecordType::MX => {
                let (preference, cursor) = read_u16_be(bounded, offset)?;
                let (exchange, _) = decode_name(bounded, cursor)?;
                Ok(RData::MX {
                    preference,
                    exchange,
                })
            }
            RecordType::SOA => decode_soa(bounded, offset).map(RData::SOA),
            other if other.is_obsolete() => Ok(RData::Obsolete),
            _ => Ok(RData::NotImplemented),
        }
    }
}

fn decode_soa(buf: &[u8], offset: usize) -> Result<Soa, WireError> {
    let (mname, cursor) = decode_name(buf, offset)?;
    let (rname, cursor) = decode_name(buf, cursor)?;
    let (serial, cursor) = read_u32_be(buf, cursor)?;
    let (refresh, cursor) = read_u32_be(buf, cursor)?;
    let (retry, cursor) = read_u32_be(buf, cursor)?;
    let (expire, cursor) = read_u32_be(buf, cursor)?;
    let (minimum, _) = read_u32_be(buf, cursor)?;

    Ok(Soa {
        mname,
        rname,
        serial,
        refresh,
        retry,
        expire,
        minimum,
    })
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::AAAA(addr) => write!(f, "{}", addr),
            RData::CNAME(name) | RData::NS(name) | RData::PTR(name) => write!(f, "{}", name),
            RData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RData::SOA(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RData::TXT(text) => write!(f, "{}", String::from_utf8_lossy(text)),
            RData::Obsolete => write!(f, "not implemented: obsolete"),
            RData::NotImplemented => write!(f, "not implemented"),
            RData::Unknown(code) => write!(f, "unknown record type: {}", code),
        }
    }
}
