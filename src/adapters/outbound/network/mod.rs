/// Network adapters for the review service and the scoring models
mod http;
mod huggingface_client;
mod lexicon_client;
mod pooled_scorer;
mod review_service_client;

#[cfg(test)]
mod test_server;

pub use huggingface_client::HuggingFaceClient;
pub use lexicon_client::LexiconServiceClient;
pub use pooled_scorer::PooledScorer;
pub use review_service_client::ReviewServiceClient;
