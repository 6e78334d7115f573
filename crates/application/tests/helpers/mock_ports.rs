use async_trait::async_trait;
use dnsprobe_application::ports::{DnsTransport, MessageIdGenerator, TransportResponse};
use dnsprobe_domain::DomainError;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Builds a response to `request` carrying one A record per address.
///
/// The question is copied from the request, so the ID matches and the answer
/// owners can point back at the question name.
pub fn answer_for(request: &[u8], addresses: &[[u8; 4]]) -> Vec<u8> {
    let mut reply = request.to_vec();
    reply[2] = 0x81;
    reply[3] = 0x80;
    reply[6..8].copy_from_slice(&(addresses.len() as u16).to_be_bytes());
    for address in addresses {
        reply.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
        reply.extend_from_slice(&300u32.to_be_bytes());
        reply.extend_from_slice(&[0x00, 0x04]);
        reply.extend_from_slice(address);
    }
    reply
}

type Responder = dyn Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync;

#[derive(Clone)]
pub struct MockTransport {
    server: SocketAddr,
    responder: Arc<Responder>,
    sent: Arc<RwLock<Vec<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync + 'static,
    {
        Self {
            server: "192.0.2.53:53".parse().unwrap(),
            responder: Arc::new(responder),
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Answers every query with the given A records.
    pub fn answering(addresses: Vec<[u8; 4]>) -> Self {
        Self::new(move |request| Ok(answer_for(request, &addresses)))
    }

    /// Replies with fixed bytes regardless of the request.
    pub fn replying(bytes: Vec<u8>) -> Self {
        Self::new(move |_| Ok(bytes.clone()))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    pub async fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn exchange(&self, request: &[u8]) -> Result<TransportResponse, DomainError> {
        self.sent.write().await.push(request.to_vec());
        let bytes = (self.responder)(request)?;
        Ok(TransportResponse::new(bytes, self.server))
    }

    fn server(&self) -> SocketAddr {
        self.server
    }
}

/// Hands out consecutive IDs starting from a known value.
pub struct FixedIdGenerator {
    next: AtomicU16,
}

impl FixedIdGenerator {
    pub fn new(start: u16) -> Self {
        Self {
            next: AtomicU16::new(start),
        }
    }
}

impl MessageIdGenerator for FixedIdGenerator {
    fn next_id(&self) -> u16 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
