//! dnsprobe domain layer: the RFC 1035 wire codec, the record type registry
//! and the configuration model.
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordCategory, RecordClass, RecordType};
pub use errors::DomainError;
pub use wire::{
    DecodeFailure, EncodeFailure, Header, Message, Question, RData, ResourceRecord, WireError,
};
