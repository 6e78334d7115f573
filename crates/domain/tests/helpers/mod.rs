#![allow(dead_code)]
mod builders;

pub use builders::{name_bytes, ResponseBuilder};
