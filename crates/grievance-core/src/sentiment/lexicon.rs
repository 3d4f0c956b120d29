use super::{classify_with, PolarityScorer, Sentiment, SentimentClassifier};

/// Dictionary scorer tuned for support-desk vocabulary.
///
/// Each known word carries a polarity. A directly preceding intensifier
/// scales it, and a negation among the three preceding tokens of the same
/// sentence flips and halves it. The text polarity is the mean over scored
/// words.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

const NEGATION_WINDOW: usize = 3;
const SENTENCE_BREAK: &str = ".";

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut total = 0.0;
        let mut scored = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            let Some(base) = word_polarity(token) else {
                continue;
            };

            let mut score = base;
            if let Some(previous) = index.checked_sub(1).map(|i| tokens[i].as_str()) {
                if let Some(factor) = intensifier(previous) {
                    score *= factor;
                }
            }

            let window_start = index.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..index]
                .iter()
                .rev()
                .take_while(|token| token.as_str() != SENTENCE_BREAK)
                .any(|token| is_negation(token))
            {
                score *= -0.5;
            }

            total += score.clamp(-1.0, 1.0);
            scored += 1;
        }

        if scored == 0 {
            return 0.0;
        }
        (total / scored as f64).clamp(-1.0, 1.0)
    }
}

impl SentimentClassifier for LexiconScorer {
    fn classify(&self, text: &str) -> Sentiment {
        classify_with(self, text)
    }
}

/// Lowercased words with boundary punctuation stripped. A word ending a
/// sentence is followed by a `.` token.
fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.replace(['\u{2019}', '\u{2018}'], "'").to_lowercase();
    let mut tokens = Vec::new();
    for raw in normalized.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if !word.is_empty() {
            tokens.push(word.to_string());
        }
        let tail = &raw[raw.trim_end_matches(|c: char| !c.is_alphanumeric()).len()..];
        let ends_sentence = tail.contains(['.', '!', '?']);
        if ends_sentence && tokens.last().is_some_and(|t| t != SENTENCE_BREAK) {
            tokens.push(SENTENCE_BREAK.to_string());
        }
    }
    tokens
}

fn is_negation(token: &str) -> bool {
    matches!(
        token,
        "not" | "no" | "never" | "cannot" | "hardly" | "neither" | "nor" | "without"
    ) || token.ends_with("n't")
}

fn intensifier(token: &str) -> Option<f64> {
    let factor = match token {
        "absolutely" | "extremely" | "incredibly" | "utterly" => 1.5,
        "completely" | "totally" | "truly" => 1.4,
        "very" | "really" | "highly" | "super" => 1.3,
        "so" | "too" => 1.2,
        "quite" | "pretty" => 1.1,
        "somewhat" | "slightly" | "bit" => 0.6,
        _ => return None,
    };
    Some(factor)
}

fn word_polarity(word: &str) -> Option<f64> {
    let polarity = match word {
        // positive
        "excellent" | "perfect" | "awesome" | "wonderful" | "superb" | "best" => 1.0,
        "impressed" | "delighted" | "brilliant" => 0.9,
        "great" | "happy" | "fantastic" | "amazing" | "love" | "loved" => 0.8,
        "good" | "outstanding" | "pleasant" => 0.7,
        "nice" | "lovely" | "grateful" => 0.6,
        "helpful" | "pleased" | "satisfied" | "glad" | "better" | "thankful" => 0.5,
        "easy" | "reliable" | "smooth" | "appreciate" | "appreciated" | "fine" => 0.4,
        "friendly" | "quick" | "efficient" | "polite" | "recommend" | "resolved" => 0.3,
        "fast" | "thanks" | "works" | "working" | "fixed" | "courteous" => 0.2,
        "ok" | "okay" | "professional" => 0.1,
        // negative
        "terrible" | "awful" | "horrible" | "worst" | "disgusting" | "pathetic" => -1.0,
        "hate" | "hated" | "appalling" | "atrocious" => -0.9,
        "scam" | "stupid" | "annoying" | "furious" | "outrageous" => -0.8,
        "disappointed" | "frustrated" | "incompetent" | "bad" | "unhappy" => -0.7,
        "disappointing" | "defective" | "overcharged" | "faulty" | "sucks" => -0.6,
        "useless" | "unhelpful" | "wrong" | "failed" | "fail" | "angry" | "unacceptable"
        | "waste" | "damaged" | "difficult" => -0.5,
        "broken" | "poor" | "worse" | "annoyed" | "upset" | "frustrating" => -0.4,
        "rude" | "slow" | "late" | "delayed" | "confusing" | "lost" | "error"
        | "ridiculous" => -0.3,
        "missing" | "unclear" => -0.2,
        _ => return None,
    };
    Some(polarity)
}

#[cfg(test)]
mod tests {
    use super::{tokenize, LexiconScorer};
    use crate::sentiment::{PolarityScorer, Sentiment, SentimentClassifier};

    #[test]
    fn tokenize_strips_boundary_punctuation_and_keeps_contractions() {
        assert_eq!(
            tokenize("It DOESN\u{2019}T work!!  (again)"),
            vec!["it", "doesn't", "work", ".", "again"]
        );
        assert_eq!(
            tokenize("Why? \"Fine.\" ok ..."),
            vec!["why", ".", "fine", ".", "ok", "."]
        );
    }

    #[test]
    fn strongly_negative_complaint_is_negative() {
        let scorer = LexiconScorer::new();
        assert_eq!(
            scorer.classify("This is absolutely terrible and broken"),
            Sentiment::Negative
        );
    }

    #[test]
    fn praise_is_positive() {
        let scorer = LexiconScorer::new();
        assert_eq!(
            scorer.classify("Thanks, the agent was great and very helpful."),
            Sentiment::Positive
        );
    }

    #[test]
    fn factual_text_is_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(
            scorer.classify("Please update the billing address on my account"),
            Sentiment::Neutral
        );
        assert_eq!(scorer.polarity("Please update my address"), 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("the service was good") > 0.1);
        assert!(scorer.polarity("the service was not good") < -0.1);
        assert_eq!(
            scorer.classify("the refund wasn't helpful at all"),
            Sentiment::Negative
        );
    }

    #[test]
    fn negation_does_not_cross_sentence_ends() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.classify("No. Great service"), Sentiment::Positive);
        assert_eq!(scorer.classify("Never again! Helpful staff"), Sentiment::Positive);
        assert_eq!(scorer.classify("Is it good? No"), Sentiment::Positive);
        assert_eq!(
            scorer.classify("The service was not great."),
            Sentiment::Negative
        );
    }

    #[test]
    fn polarity_stays_within_bounds() {
        let scorer = LexiconScorer::new();
        let value = scorer.polarity("absolutely terrible absolutely awful utterly horrible");
        assert!((-1.0..=1.0).contains(&value));
        assert_eq!(value, -1.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = LexiconScorer::new();
        let text = "Slow delivery but friendly staff";
        assert_eq!(scorer.polarity(text), scorer.polarity(text));
    }

    #[test]
    fn blank_text_is_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.classify(""), Sentiment::Neutral);
        assert_eq!(scorer.classify(" \n\t "), Sentiment::Neutral);
    }
}
