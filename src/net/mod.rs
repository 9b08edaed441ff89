//! Networking modules for the token-auth exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the `AuthTransport` seam and its `gloo-net` implementation,
//! `headers` the fixed JSON header set, and `types` the wire schema.

pub mod api;
pub mod headers;
pub mod types;
