mod dns_transport;
mod id_generator;

pub use dns_transport::{DnsTransport, TransportResponse};
pub use id_generator::MessageIdGenerator;

pub use dnsprobe_domain::DnsQuery;
