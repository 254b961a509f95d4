use async_trait::async_trait;
use review_sentiment::prelude::*;
use review_sentiment::sentiment_analysis::domain::{LexiconScore, RawClassification};
use review_sentiment::shared::error::SentimentError;
use std::collections::HashMap;

/// Mock LexiconScorer returning a fixed compound score per review text
///
/// Unknown texts score 0.0.
#[derive(Default)]
pub struct MockLexiconScorer {
    scores: HashMap<String, f64>,
}

impl MockLexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, text: &str, compound: f64) -> Self {
        self.scores.insert(text.to_string(), compound);
        self
    }
}

#[async_trait]
impl LexiconScorer for MockLexiconScorer {
    async fn score(&self, text: &str) -> Result<LexiconScore> {
        LexiconScore::new(self.scores.get(text).copied().unwrap_or(0.0))
    }
}

/// Mock TransformerScorer returning a fixed raw classification per review text
///
/// Unknown texts classify as `LABEL_1` with score 0.9; texts registered with
/// `with_failure` make the model unavailable.
#[derive(Default)]
pub struct MockTransformerScorer {
    classifications: HashMap<String, (String, f64)>,
    failing: Vec<String>,
}

impl MockTransformerScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, text: &str, label: &str, score: f64) -> Self {
        self.classifications
            .insert(text.to_string(), (label.to_string(), score));
        self
    }

    pub fn with_failure(mut self, text: &str) -> Self {
        self.failing.push(text.to_string());
        self
    }
}

#[async_trait]
impl TransformerScorer for MockTransformerScorer {
    async fn classify(&self, text: &str) -> Result<RawClassification> {
        if self.failing.iter().any(|t| t == text) {
            return Err(SentimentError::upstream("Transformer model", "model is loading").into());
        }
        let (label, score) = self
            .classifications
            .get(text)
            .cloned()
            .unwrap_or_else(|| ("LABEL_1".to_string(), 0.9));
        RawClassification::new(label, score)
    }
}
