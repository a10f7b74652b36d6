//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_failure;

mod resource_transport;

#[cfg(test)]
pub use resource_transport::MockResourceTransport;
pub use resource_transport::{RequestMethod, ResourceRequest, ResourceTransport, TransportFailure};
