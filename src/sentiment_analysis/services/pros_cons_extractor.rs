use crate::sentiment_analysis::domain::{ProsCons, ScoredReview};
use crate::sentiment_analysis::policies::{ProsConsPolicy, Stance};

/// ProsConsExtractor service picking short pro/con excerpts
///
/// Excerpts are the first matching reviews in their original order, not the
/// strongest ones. This is pure business logic over already scored reviews.
pub struct ProsConsExtractor;

impl ProsConsExtractor {
    /// Maximum number of excerpts per list
    pub const MAX_EXCERPTS: usize = 3;

    pub fn extract(scored: &[ScoredReview]) -> ProsCons {
        let mut pros = Vec::new();
        let mut cons = Vec::new();

        for review in scored {
            match ProsConsPolicy::classify(review.compound(), review.transformer().sentiment) {
                Some(Stance::Pro) if pros.len() < Self::MAX_EXCERPTS => {
                    pros.push(review.review().text().to_string());
                }
                Some(Stance::Con) if cons.len() < Self::MAX_EXCERPTS => {
                    cons.push(review.review().text().to_string());
                }
                _ => {}
            }

            if pros.len() == Self::MAX_EXCERPTS && cons.len() == Self::MAX_EXCERPTS {
                break;
            }
        }

        ProsCons::new(pros, cons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment_analysis::domain::comparison_result::{NO_CONS_SENTINEL, NO_PROS_SENTINEL};
    use crate::sentiment_analysis::domain::{Review, Sentiment, TransformerScore};

    fn scored(text: &str, compound: f64, sentiment: Sentiment) -> ScoredReview {
        ScoredReview::new(
            Review::new(text),
            compound,
            TransformerScore {
                sentiment,
                confidence: 0.9,
                label: sentiment,
            },
        )
    }

    #[test]
    fn test_positive_compound_with_negative_transformer_is_pro() {
        let pros_cons = ProsConsExtractor::extract(&[scored("mixed", 0.2, Sentiment::Negative)]);
        assert_eq!(pros_cons.pros(), &["mixed".to_string()]);
        assert_eq!(pros_cons.cons(), &[NO_CONS_SENTINEL.to_string()]);
    }

    #[test]
    fn test_first_three_in_original_order() {
        let input = vec![
            scored("p1", 0.1, Sentiment::Neutral),
            scored("c1", -0.9, Sentiment::Negative),
            scored("p2", 0.9, Sentiment::Positive),
            scored("p3", 0.0, Sentiment::Positive),
            scored("p4", 0.99, Sentiment::Positive),
            scored("c2", 0.0, Sentiment::Negative),
        ];
        let pros_cons = ProsConsExtractor::extract(&input);
        assert_eq!(pros_cons.pros(), &["p1", "p2", "p3"].map(String::from));
        assert_eq!(pros_cons.cons(), &["c1", "c2"].map(String::from));
    }

    #[test]
    fn test_neutral_reviews_excluded() {
        let input = vec![scored("meh", 0.01, Sentiment::Neutral)];
        let pros_cons = ProsConsExtractor::extract(&input);
        assert_eq!(pros_cons.pros(), &[NO_PROS_SENTINEL.to_string()]);
        assert_eq!(pros_cons.cons(), &[NO_CONS_SENTINEL.to_string()]);
    }

    #[test]
    fn test_no_pros_returns_sentinel() {
        let input = vec![scored("awful", -0.8, Sentiment::Negative)];
        let pros_cons = ProsConsExtractor::extract(&input);
        assert_eq!(pros_cons.pros(), &[NO_PROS_SENTINEL.to_string()]);
        assert_eq!(pros_cons.cons(), &["awful".to_string()]);
    }
}
