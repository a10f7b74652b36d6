//! HTTP outbound adapter.
//!
//! This module provides the reqwest implementation of the
//! `ResourceTransport` port and the constructor wiring it to settings.

mod reqwest_transport;

pub use reqwest_transport::ReqwestResourceTransport;
