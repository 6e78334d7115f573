use crate::wire::{DecodeFailure, EncodeFailure, WireError};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Response ID mismatch: sent {sent}, received {received}")]
    IdMismatch { sent: u16, received: u16 },

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Encode(#[from] EncodeFailure),

    #[error(transparent)]
    Decode(#[from] DecodeFailure),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },
}
