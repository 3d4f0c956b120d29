pub mod domain;
pub mod dto;
pub mod error;
pub mod report;
pub mod sentiment;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use sentiment::{LexiconScorer, PolarityScorer, Sentiment, SentimentClassifier};
