pub mod udp;

pub use dnsprobe_application::ports::{DnsTransport, TransportResponse};
pub use udp::UdpTransport;
