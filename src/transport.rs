//! HTTP plumbing under the client: one attempt per call, no retry policy here.

pub mod http;
pub mod query;

pub use http::{HttpTransport, PreparedRequest, RawResponse, TransportError};
pub use query::{append_query, encode_query};
