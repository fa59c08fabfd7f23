use crate::lexicon::count_present;

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "worried",
    "hopeless",
    "stressed",
    "overwhelmed",
    "tired",
    "exhausted",
    "lonely",
];

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "calm",
    "peaceful",
    "hopeful",
    "excited",
    "grateful",
    "relaxed",
    "confident",
    "loved",
    "supported",
];

/// Polarity in [-1, 1]: `(pos - neg) / (pos + neg)`, or exactly 0 with no hits.
pub fn sentiment(text: &str) -> f64 {
    let text = text.to_lowercase();
    let neg = count_present(&text, NEGATIVE_WORDS) as f64;
    let pos = count_present(&text, POSITIVE_WORDS) as f64;

    if neg == 0.0 && pos == 0.0 {
        return 0.0;
    }

    (pos - neg) / (pos + neg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text_scores_above_zero() {
        assert!(sentiment("I feel happy and calm") > 0.0);
        assert_eq!(sentiment("I feel happy and calm"), 1.0);
    }

    #[test]
    fn test_negative_text_scores_below_zero() {
        assert!(sentiment("I feel sad and anxious") < 0.0);
        assert_eq!(sentiment("I feel sad and anxious"), -1.0);
    }

    #[test]
    fn test_neutral_text_is_exactly_zero() {
        assert_eq!(sentiment("The sky is blue"), 0.0);
        assert_eq!(sentiment(""), 0.0);
    }

    #[test]
    fn test_mixed_text_is_balanced() {
        // one positive, one negative
        assert_eq!(sentiment("Tired but grateful"), 0.0);
        // two positive, one negative
        let score = sentiment("Happy, calm, a bit tired");
        assert!((score - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_negation_handling() {
        assert!(sentiment("I am not happy") > 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sentiment("HOPELESS"), -1.0);
    }
}
