/// Sentiment analysis domain: value objects, scoring policies and the
/// aggregation services. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
