use super::AggregateResult;
use serde::Serialize;

/// Placeholder used when no review qualifies as a pro
pub const NO_PROS_SENTINEL: &str = "No strong positives detected";

/// Placeholder used when no review qualifies as a con
pub const NO_CONS_SENTINEL: &str = "No strong negatives detected";

/// Up to three pro and con excerpts, never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProsCons {
    pros: Vec<String>,
    cons: Vec<String>,
}

impl ProsCons {
    /// Empty lists are replaced by their sentinel strings
    pub fn new(pros: Vec<String>, cons: Vec<String>) -> Self {
        let pros = if pros.is_empty() {
            vec![NO_PROS_SENTINEL.to_string()]
        } else {
            pros
        };
        let cons = if cons.is_empty() {
            vec![NO_CONS_SENTINEL.to_string()]
        } else {
            cons
        };
        Self { pros, cons }
    }

    pub fn pros(&self) -> &[String] {
        &self.pros
    }

    pub fn cons(&self) -> &[String] {
        &self.cons
    }
}

/// Aggregate result for one named app
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSentiment {
    name: String,
    #[serde(flatten)]
    result: AggregateResult,
}

impl AppSentiment {
    pub fn new(name: impl Into<String>, result: AggregateResult) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result(&self) -> &AggregateResult {
        &self.result
    }
}

/// One side of a comparison: name, aggregate fields and pros/cons
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppComparison {
    #[serde(flatten)]
    sentiment: AppSentiment,
    #[serde(flatten)]
    pros_cons: ProsCons,
}

impl AppComparison {
    pub fn new(sentiment: AppSentiment, pros_cons: ProsCons) -> Self {
        Self {
            sentiment,
            pros_cons,
        }
    }

    pub fn name(&self) -> &str {
        self.sentiment.name()
    }

    pub fn result(&self) -> &AggregateResult {
        self.sentiment.result()
    }

    pub fn pros(&self) -> &[String] {
        self.pros_cons.pros()
    }

    pub fn cons(&self) -> &[String] {
        self.pros_cons.cons()
    }
}

/// Side-by-side comparison of two apps
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    app1: AppComparison,
    app2: AppComparison,
}

impl ComparisonResult {
    pub fn new(app1: AppComparison, app2: AppComparison) -> Self {
        Self { app1, app2 }
    }

    pub fn app1(&self) -> &AppComparison {
        &self.app1
    }

    pub fn app2(&self) -> &AppComparison {
        &self.app2
    }
}
