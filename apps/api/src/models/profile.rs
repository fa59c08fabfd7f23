use serde::{Deserialize, Serialize};

use crate::models::chat::now_stamp;

/// Onboarding profile held for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub goals: Vec<String>,
    pub current_mood: String,
}

impl Default for UserProfile {
    /// Stand-in used before onboarding completes.
    fn default() -> Self {
        Self {
            name: "friend".to_string(),
            age: 25,
            goals: vec!["General mental wellness".to_string()],
            current_mood: "unknown".to_string(),
        }
    }
}

impl UserProfile {
    pub fn age_bracket(&self) -> AgeBracket {
        AgeBracket::from_age(self.age)
    }
}

/// Audience brackets used to pick tone, canned replies and poem intros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeBracket {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeBracket::Child,
            13..=19 => AgeBracket::Teen,
            20..=64 => AgeBracket::Adult,
            _ => AgeBracket::Senior,
        }
    }
}

/// Quick-mood scale offered in the sidebar, worst to best.
pub const MOOD_SCALE: &[(&str, i32)] = &[
    ("Very Bad", -2),
    ("Bad", -1),
    ("Neutral", 0),
    ("Good", 1),
    ("Very Good", 2),
];

/// Numeric value for a mood label; labels outside the scale count as neutral.
pub fn mood_value(label: &str) -> i32 {
    let label = label.trim();
    MOOD_SCALE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|&(_, value)| value)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub mood: String,
    pub value: i32,
    pub timestamp: String,
}

impl MoodEntry {
    pub fn record(label: &str) -> Self {
        Self {
            mood: label.trim().to_string(),
            value: mood_value(label),
            timestamp: now_stamp(),
        }
    }
}
