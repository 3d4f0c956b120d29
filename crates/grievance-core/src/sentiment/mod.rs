//! Three-way sentiment labels and the classifier contract.
//!
//! A classifier maps text to a polarity in `[-1.0, 1.0]` and buckets it:
//! above [`POSITIVE_THRESHOLD`] is positive, below [`NEGATIVE_THRESHOLD`] is
//! negative, and everything else (the thresholds included) is neutral.

mod lexicon;

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use lexicon::LexiconScorer;

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if !polarity.is_finite() {
            return Sentiment::Neutral;
        }
        if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(CoreError::InvalidSentiment(s.to_string())),
        }
    }
}

/// Scores text on a continuous `[-1.0, 1.0]` scale.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f64;
}

/// Maps text to a sentiment label. Implementations must be deterministic and
/// must return [`Sentiment::Neutral`] for blank text.
pub trait SentimentClassifier {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Classifies `text` with any polarity scorer using the shared thresholds.
pub fn classify_with<S: PolarityScorer + ?Sized>(scorer: &S, text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::Neutral;
    }
    Sentiment::from_polarity(scorer.polarity(text))
}

#[cfg(test)]
mod tests {
    use super::{classify_with, PolarityScorer, Sentiment};
    use std::str::FromStr;

    struct FixedPolarity(f64);

    impl PolarityScorer for FixedPolarity {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(-0.1), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(0.15), Sentiment::Positive);
        assert_eq!(Sentiment::from_polarity(-0.5), Sentiment::Negative);
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
    }

    #[test]
    fn non_finite_polarity_is_neutral() {
        assert_eq!(Sentiment::from_polarity(f64::NAN), Sentiment::Neutral);
        assert_eq!(Sentiment::from_polarity(f64::INFINITY), Sentiment::Neutral);
    }

    #[test]
    fn classify_with_uses_scorer_polarity() {
        assert_eq!(
            classify_with(&FixedPolarity(0.15), "fine"),
            Sentiment::Positive
        );
        assert_eq!(
            classify_with(&FixedPolarity(-0.1), "meh"),
            Sentiment::Neutral
        );
        assert_eq!(
            classify_with(&FixedPolarity(-0.5), "bad"),
            Sentiment::Negative
        );
    }

    #[test]
    fn blank_text_is_neutral_without_scoring() {
        assert_eq!(classify_with(&FixedPolarity(0.9), "   "), Sentiment::Neutral);
        assert_eq!(classify_with(&FixedPolarity(-0.9), ""), Sentiment::Neutral);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Sentiment::from_str("NEGATIVE").unwrap(), Sentiment::Negative);
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert!(Sentiment::from_str("angry").is_err());
    }
}
