//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is with no framing and replies are read into a
//! 512-byte buffer. Anything longer is cut off by the socket; there is no
//! retry over TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsprobe_domain::wire::MAX_UDP_MESSAGE_SIZE;
use dnsprobe_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    fn io_error(&self, action: &str, e: io::Error) -> DomainError {
        if e.kind() == io::ErrorKind::ConnectionRefused {
            return DomainError::TransportConnectionRefused {
                server: self.server_addr.to_string(),
            };
        }
        DomainError::IoError(format!("Failed to {} {}: {}", action, self.server_addr, e))
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, request: &[u8]) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send_to(request, self.server_addr))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| self.io_error("send UDP query to", e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timed_out())?
                .map_err(|e| self.io_error("receive UDP response from", e))?;

        if from_addr != self.server_addr {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP response received");

        Ok(TransportResponse::new(recv_buf, from_addr))
    }

    fn server(&self) -> SocketAddr {
        self.server_addr
    }
}
