//! HTTP plumbing for the node gateway.
//!
//! - [`Operation`] names every call and fixes its [`StatusPolicy`]
//! - `HttpTransport` builds URLs, sends requests on the shared client and
//!   turns responses into decoded values or [`ClientError`](crate::ClientError)s
//! - [`types`] holds the response envelopes that are unwrapped before a value
//!   reaches the caller

mod http_client;
mod operation;
pub mod types;

pub(crate) use http_client::HttpTransport;
pub use operation::{Operation, StatusPolicy};
