//! The resource record envelope shared by the answer, authority and
//! additional sections, RFC 1035 §4.1.3.

use super::errors::WireError;
use super::name::decode_name;
use super::primitives::{read_u16_be, read_u32_be};
use super::rdata::RData;
use super::{WireDecode, WireEncode};
use crate::dns_record::{type_mnemonic, RecordClass, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    /// Owner name in trailing-dot form.
    pub name: String,
    pub rtype: u16,
    pub rclass: u16,
    /// Seconds the record may be cached; zero means do not cache.
    pub ttl: u32,
    /// Declared RDATA length. The decoder always advances by exactly this many
    /// bytes past the envelope, whatever the payload decoder consumed.
    pub rdlength: u16,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.rclass)
    }
}

/// Only queries are ever sent, so records are decode-only.
impl WireEncode for ResourceRecord {
    fn encode(&self) -> Result<Vec<u8>, WireError> {
        Err(WireError::EncodingNotSupported)
    }
}

impl WireDecode for ResourceRecord {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, cursor) = decode_name(buf, offset)?;
        let (rtype, cursor) = read_u16_be(buf, cursor)?;
        let (rclass, cursor) = read_u16_be(buf, cursor)?;
        let (ttl, cursor) = read_u32_be(buf, cursor)?;
        let (rdlength, cursor) = read_u16_be(buf, cursor)?;

        let rdata = RData::decode(rtype, buf, cursor, rdlength)?;

        Ok((
            ResourceRecord {
                name,
                rtype,
                rclass,
                ttl,
                rdlength,
                rdata,
            },
            cursor + usize::from(rdlength),
        ))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            RecordClass::mnemonic(self.rclass),
            type_mnemonic(self.rtype),
            self.rdata
        )
    }
}
