//! The seam between query functions and the JSON-RPC transport.
//!
//! Query helpers such as [`crate::get_templates`] are generic over
//! [`Session`], so they run unchanged against a live [`crate::ZabbixClient`]
//! or an in-memory stand-in.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// An authenticated channel that can execute one JSON-RPC method.
pub trait Session {
    /// Call `method` with `params` and decode the `result` member into `R`.
    ///
    /// Transport, HTTP and JSON-RPC failures are returned as the matching
    /// [`crate::ClientError`] variant.
    fn get<P, R>(&mut self, method: &str, params: &P) -> impl Future<Output = Result<R>> + Send
    where
        P: Serialize + Sync,
        R: DeserializeOwned + Send;
}
