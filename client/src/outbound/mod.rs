//! Outbound adapters implementing domain ports.
//!
//! - **http**: reqwest-backed transport for the dashboard backend
//!
//! Adapters translate between domain requests and the wire. They make no
//! fallback decisions.

pub mod http;
