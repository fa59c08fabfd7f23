use crate::lexicon::count_present;
use crate::models::chat::{ChatMessage, Role};
use crate::screening::Instrument;

const DEPRESSION_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "hopeless",
    "worthless",
    "tired all the time",
    "no interest",
    "no motivation",
    "empty",
    "numb",
    "can't enjoy",
];

const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious",
    "worried",
    "nervous",
    "panic",
    "stress",
    "overwhelmed",
    "can't relax",
    "racing thoughts",
    "fear",
    "dread",
    "on edge",
];

/// How many of the latest user turns are inspected.
const WINDOW: usize = 3;
/// Distinct keyword hits needed before a screening is offered.
const THRESHOLD: usize = 2;

/// Suggests a screening when the recent user turns repeatedly touch one theme.
/// Depression is checked first.
pub fn suggest_assessment(history: &[ChatMessage]) -> Option<Instrument> {
    let mut recent: Vec<&str> = history
        .iter()
        .rev()
        .filter(|m| m.role == Role::User)
        .take(WINDOW)
        .map(|m| m.content.as_str())
        .collect();
    recent.reverse();

    let text = recent.join(" ").to_lowercase();

    if count_present(&text, DEPRESSION_KEYWORDS) >= THRESHOLD {
        Some(Instrument::Phq9)
    } else if count_present(&text, ANXIETY_KEYWORDS) >= THRESHOLD {
        Some(Instrument::Gad7)
    } else {
        None
    }
}
