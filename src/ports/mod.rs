/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe the infrastructure the
/// application core relies on: the two sentiment models, the review
/// source, progress reporting, formatting and output.
pub mod outbound;
