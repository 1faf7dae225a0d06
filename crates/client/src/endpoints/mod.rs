//! JSON-RPC endpoint implementations.
//!
//! Functions here are stateless: they take the HTTP client, endpoint URL and
//! credential explicitly. Session bookkeeping lives in [`crate::client`].

mod apiinfo;
mod auth;
mod request;
mod rpc;

pub use apiinfo::api_version;
pub use auth::login;
pub use request::send_request_with_retry;
pub use rpc::call;
