use async_trait::async_trait;
use dnsprobe_domain::DomainError;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    /// Address the response datagram actually came from.
    pub server: SocketAddr,
}

impl TransportResponse {
    pub fn new(bytes: Vec<u8>, server: SocketAddr) -> Self {
        Self { bytes, server }
    }
}

/// One request/response exchange with a resolver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(&self, request: &[u8]) -> Result<TransportResponse, DomainError>;

    /// Address requests are sent to.
    fn server(&self) -> SocketAddr;
}
