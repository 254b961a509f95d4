use super::Sentiment;
use serde::Serialize;

/// Note attached to the result of aggregating an empty review list
pub const NO_REVIEWS_NOTE: &str = "No reviews found for this app.";

/// Overall lexicon verdict: dead-band classification of the mean compound score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexiconVerdict {
    pub overall: Sentiment,
    /// Mean compound score, unrounded
    pub avg_compound: f64,
}

/// Overall transformer verdict: majority class and its share of all reviews
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformerVerdict {
    pub sentiment: Sentiment,
    /// `count[sentiment] / total`, rounded to 2 decimals
    pub confidence: f64,
}

/// Reviews bucketed per sentiment class after the aggregation threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    positive: usize,
    #[serde(rename = "Neutral")]
    neutral: usize,
    #[serde(rename = "Negative")]
    negative: usize,
}

impl SentimentCounts {
    pub fn new(positive: usize, neutral: usize, negative: usize) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    pub fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Class with the highest count; ties resolve Positive > Neutral > Negative
    pub fn majority(&self) -> Sentiment {
        let mut best = Sentiment::PRIORITY[0];
        for sentiment in Sentiment::PRIORITY.into_iter().skip(1) {
            if self.get(sentiment) > self.get(best) {
                best = sentiment;
            }
        }
        best
    }
}

/// Overall sentiment for one set of reviews
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    #[serde(rename = "vader")]
    lexicon: LexiconVerdict,
    #[serde(rename = "roberta")]
    transformer: TransformerVerdict,
    example_review: String,
    example_confidence: f64,
    sentiment_counts: SentimentCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl AggregateResult {
    pub fn new(
        lexicon: LexiconVerdict,
        transformer: TransformerVerdict,
        example_review: String,
        example_confidence: f64,
        sentiment_counts: SentimentCounts,
    ) -> Self {
        Self {
            lexicon,
            transformer,
            example_review,
            example_confidence,
            sentiment_counts,
            note: None,
        }
    }

    /// Fixed neutral result for an empty review list
    pub fn empty() -> Self {
        Self {
            lexicon: LexiconVerdict {
                overall: Sentiment::Neutral,
                avg_compound: 0.0,
            },
            transformer: TransformerVerdict {
                sentiment: Sentiment::Neutral,
                confidence: 0.0,
            },
            example_review: String::new(),
            example_confidence: 0.0,
            sentiment_counts: SentimentCounts::default(),
            note: Some(NO_REVIEWS_NOTE.to_string()),
        }
    }

    pub fn lexicon(&self) -> &LexiconVerdict {
        &self.lexicon
    }

    pub fn transformer(&self) -> &TransformerVerdict {
        &self.transformer
    }

    pub fn example_review(&self) -> &str {
        &self.example_review
    }

    pub fn example_confidence(&self) -> f64 {
        self.example_confidence
    }

    pub fn sentiment_counts(&self) -> &SentimentCounts {
        &self.sentiment_counts
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
