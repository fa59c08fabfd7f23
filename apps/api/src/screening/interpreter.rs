//! Score interpretation for the screening instruments.
//!
//! Two independent tables are applied to the same summed score:
//! - the severity label, five PHQ-9 bands / four GAD-7 bands;
//! - the coping-strategy list, three bands for both instruments (≤4, 5–14, ≥15).
//!
//! The boundaries do not line up: a PHQ-9 score of 15 reads "Moderately severe
//! depression" yet already receives the severe strategy list. Both tables are
//! kept as-is pending a product decision; do not merge them.

use serde::Serialize;
use thiserror::Error;

use crate::screening::catalog::{Instrument, MAX_ANSWER};

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("expected {expected} responses for {instrument}, got {actual}")]
    WrongCount {
        instrument: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("response {index} is {value}; answers must be between 0 and 3")]
    OutOfRange { index: usize, value: i64 },
}

/// Derived result of a completed screening. Never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssessmentResult {
    pub score: u32,
    pub interpretation: &'static str,
    pub strategies: Vec<&'static str>,
}

/// Severity label for a summed score. Total over all scores.
pub fn interpret(instrument: Instrument, score: u32) -> &'static str {
    match instrument {
        Instrument::Phq9 => match score {
            0..=4 => "Minimal depression",
            5..=9 => "Mild depression",
            10..=14 => "Moderate depression",
            15..=19 => "Moderately severe depression",
            _ => "Severe depression",
        },
        Instrument::Gad7 => match score {
            0..=4 => "Minimal anxiety",
            5..=9 => "Mild anxiety",
            10..=14 => "Moderate anxiety",
            _ => "Severe anxiety",
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyBand {
    Mild,
    Moderate,
    Severe,
}

impl StrategyBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=4 => StrategyBand::Mild,
            5..=14 => StrategyBand::Moderate,
            _ => StrategyBand::Severe,
        }
    }
}

/// Ordered coping strategies for the score's strategy band.
pub fn coping_strategies(instrument: Instrument, score: u32) -> &'static [&'static str] {
    match (instrument, StrategyBand::for_score(score)) {
        (Instrument::Phq9, StrategyBand::Mild) => &[
            "Try to maintain a regular daily routine",
            "Get regular exercise, even if it's just a short walk",
            "Connect with friends or family members",
            "Practice gratitude by noting things you're thankful for",
        ],
        (Instrument::Phq9, StrategyBand::Moderate) => &[
            "Consider speaking with a mental health professional",
            "Try mindfulness meditation to stay present",
            "Set small, achievable goals each day",
            "Limit consumption of news and social media",
        ],
        (Instrument::Phq9, StrategyBand::Severe) => &[
            "Please consider reaching out to a mental health professional",
            "Speak with your doctor about treatment options",
            "Focus on basic self-care: sleep, nutrition, and rest",
            "Remember that severe symptoms can improve with proper support",
        ],
        (Instrument::Gad7, StrategyBand::Mild) => &[
            "Practice deep breathing exercises",
            "Try progressive muscle relaxation",
            "Limit caffeine and alcohol",
            "Get regular physical activity",
        ],
        (Instrument::Gad7, StrategyBand::Moderate) => &[
            "Consider speaking with a mental health professional",
            "Practice mindfulness meditation",
            "Create a worry schedule to contain anxious thoughts",
            "Try journaling about your concerns",
        ],
        (Instrument::Gad7, StrategyBand::Severe) => &[
            "Please consider reaching out to a mental health professional",
            "Speak with your doctor about treatment options",
            "Practice grounding techniques when feeling overwhelmed",
            "Remember that severe anxiety can be effectively treated",
        ],
    }
}

/// Validates one answer per question, each in 0..=3, then sums and interprets.
pub fn score_responses(
    instrument: Instrument,
    responses: &[i64],
) -> Result<AssessmentResult, ScoringError> {
    let expected = instrument.questions().len();
    if responses.len() != expected {
        return Err(ScoringError::WrongCount {
            instrument: instrument.key(),
            expected,
            actual: responses.len(),
        });
    }

    if let Some((index, &value)) = responses
        .iter()
        .enumerate()
        .find(|(_, v)| !(0..=MAX_ANSWER).contains(*v))
    {
        return Err(ScoringError::OutOfRange { index, value });
    }

    let score = responses.iter().sum::<i64>() as u32;

    Ok(AssessmentResult {
        score,
        interpretation: interpret(instrument, score),
        strategies: coping_strategies(instrument, score).to_vec(),
    })
}
