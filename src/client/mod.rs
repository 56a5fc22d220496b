//! Typed access to the school information system's REST backend.
//!
//! Every network call in the crate goes through [`ApiTransport`]; services
//! validate locally first and only then hand a complete request to it.

pub mod envelope;
pub mod http;
pub mod session;
pub mod transport;

pub use envelope::ApiReply;
pub use http::HttpApiClient;
pub use session::Session;
pub use transport::{delete, get, send, ApiTransport};

pub use reqwest::Method;
