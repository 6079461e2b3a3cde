/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist here: the single inbound surface is
/// the CLI, which drives the use case directly.
pub mod outbound;
