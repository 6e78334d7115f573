/// Source of 16-bit message IDs for outgoing queries.
///
/// Implementations must be safe to call from several tasks at once.
pub trait MessageIdGenerator: Send + Sync {
    fn next_id(&self) -> u16;
}
