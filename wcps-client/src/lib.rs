//! HTTP transport for generated WCPS queries.
//!
//! [`WcpsClient`] POSTs a finished query string to a WCPS endpoint
//! (form-encoded as `query=<text>`) and hands back the raw response bytes,
//! whatever encoding the query asked the server for. Endpoint settings come
//! from [`ClientConfig`], constructible in code or loadable from TOML.

mod client;
mod config;

pub use client::{ClientError, TransportError, WcpsClient};
pub use config::ClientConfig;
