/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with external systems. The CLI in
/// `main.rs` is the only driving adapter.
pub mod outbound;
