use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

type Handler = dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync;

/// Loopback UDP server that answers each datagram through a handler.
///
/// Returning `None` from the handler drops the query without replying.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> std::io::Result<Self>
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let handler: Arc<Handler> = Arc::new(handler);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = handler(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Answers every query with a single A record for `address`.
    pub async fn answering(address: [u8; 4]) -> std::io::Result<Self> {
        Self::start(move |query| Some(Self::build_a_response(query, address))).await
    }

    /// Never replies.
    pub async fn silent() -> std::io::Result<Self> {
        Self::start(|_| None).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn build_a_response(query: &[u8], address: [u8; 4]) -> Vec<u8> {
        let mut response = query.to_vec();
        if response.len() < 12 {
            return response;
        }
        response[2] = 0x81;
        response[3] = 0x80;
        response[6..8].copy_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[
            0xC0, 0x0C, // name: pointer to question
            0x00, 0x01, // type A
            0x00, 0x01, // class IN
            0x00, 0x00, 0x00, 0x3C, // ttl 60
            0x00, 0x04, // rdlength
        ]);
        response.extend_from_slice(&address);
        response
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
