//! A question section entry, RFC 1035 §4.1.2.

use super::errors::WireError;
use super::name::{decode_name, encode_name, to_fqdn};
use super::primitives::read_u16_be;
use super::{WireDecode, WireEncode};
use crate::dns_record::{type_mnemonic, RecordClass, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Question {
    /// QNAME in trailing-dot form.
    pub name: String,
    /// QTYPE, kept raw so unregistered codes survive a decode.
    pub qtype: u16,
    /// QCLASS
    pub qclass: u16,
}

impl Question {
    pub fn new(name: &str, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name: to_fqdn(name),
            qtype: record_type.to_u16(),
            qclass: class.to_u16(),
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.qclass)
    }
}

impl WireEncode for Question {
    fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut out = encode_name(&self.name)?;
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
        Ok(out)
    }
}

impl WireDecode for Question {
    fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, cursor) = decode_name(buf, offset)?;
        let (qtype, cursor) = read_u16_be(buf, cursor)?;
        let (qclass, cursor) = read_u16_be(buf, cursor)?;
        Ok((
            Question {
                name,
                qtype,
                qclass,
            },
            cursor,
        ))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t\t\t{}\t{}",
            self.name,
            RecordClass::mnemonic(self.qclass),
            type_mnemonic(self.qtype)
        )
    }
}
