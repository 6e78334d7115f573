pub mod id;
pub mod transport;
