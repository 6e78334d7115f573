use dnsprobe_domain::{DnsQuery, DomainError, Message, Question};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};

use crate::ports::{DnsTransport, MessageIdGenerator};

/// A decoded response together with where it came from.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub response: Message,
    pub server: SocketAddr,
}

/// Sends one query and decodes the reply.
pub struct LookupUseCase {
    transport: Arc<dyn DnsTransport>,
    id_generator: Arc<dyn MessageIdGenerator>,
}

impl LookupUseCase {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        id_generator: Arc<dyn MessageIdGenerator>,
    ) -> Self {
        Self {
            transport,
            id_generator,
        }
    }

    #[instrument(skip(self), fields(domain = %query.domain, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> Result<LookupOutcome, DomainError> {
        let id = self.id_generator.next_id();
        let question = Question::new(&query.domain, query.record_type, query.record_class);
        let request = Message::query(id, question, query.recursion_desired).encode()?;

        debug!(id, bytes = request.len(), server = %self.transport.server(), "Sending query");

        let start = Instant::now();
        let reply = self.transport.exchange(&request).await?;
        let elapsed = start.elapsed();

        let (response, _) = Message::decode(&reply.bytes)?;
        let response = response.with_query_time(elapsed);

        if response.header.id != id {
            warn!(
                sent = id,
                received = response.header.id,
                server = %reply.server,
                "Response ID does not match query"
            );
            return Err(DomainError::IdMismatch {
                sent: id,
                received: response.header.id,
            });
        }

        debug!(
            id,
            answers = response.answers.len(),
            bytes_read = response.bytes_read,
            elapsed_ms = elapsed.as_millis() as u64,
            "Response decoded"
        );

        Ok(LookupOutcome {
            response,
            server: reply.server,
        })
    }
}
