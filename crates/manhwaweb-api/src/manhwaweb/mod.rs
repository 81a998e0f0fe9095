pub mod client;
pub mod decode;
pub mod error;
pub mod query;
pub mod types;

pub use client::ManhwaWebClient;
pub use error::{DecodeError, DecodeErrorKind, Endpoint, ManhwaWebError};
