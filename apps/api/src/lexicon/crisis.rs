use serde::Serialize;

use crate::lexicon::contains_any;

/// Phrases indicating self-harm risk. Matched against the lower-cased message.
const CRISIS_PHRASES: &[&str] = &[
    // direct self-harm indicators
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "hurt myself",
    "self harm",
    "cutting myself",
    "no reason to live",
    // hopelessness patterns
    "don't want to live like this anymore",
    "don't want to live anymore",
    "everything feels pointless",
    "everything is pointless",
    "people would be better off without me",
    "better off without me",
    "feel like I can't keep going",
    "can't keep going",
    "wish I could just disappear",
    "want to disappear",
    "no point in living",
    "life is meaningless",
    // indirect but concerning
    "give up completely",
    "nothing matters anymore",
    "tired of everything",
    "can't take it anymore",
    "world without me",
    "everyone hates me",
];

/// True if any crisis phrase occurs as a case-insensitive substring of `text`.
pub fn detect_crisis(text: &str) -> bool {
    contains_any(&text.to_lowercase(), CRISIS_PHRASES)
}

/// Static hotline payload attached to every crisis-flagged chat response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CrisisResources {
    pub immediate: &'static str,
    pub us_resources: UsResources,
    pub india_resources: IndiaResources,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UsResources {
    pub national_suicide_prevention: &'static str,
    pub crisis_text: &'static str,
    pub online: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndiaResources {
    pub aasra: &'static str,
    pub sneha: &'static str,
    pub sumaitri: &'static str,
    pub online: &'static str,
}

pub fn crisis_resources() -> CrisisResources {
    CrisisResources {
        immediate: "If you're in immediate danger, please call emergency services immediately.",
        us_resources: UsResources {
            national_suicide_prevention: "988 (US National Suicide Prevention Lifeline)",
            crisis_text: "Text HOME to 741741 (Crisis Text Line)",
            online: "https://suicidepreventionlifeline.org/",
        },
        india_resources: IndiaResources {
            aasra: "91-9820466726 (Aasra - 24/7 suicide prevention)",
            sneha: "91-44-24640050 (Sneha India - suicide prevention)",
            sumaitri: "91-11-23389090 (Sumaitri - Delhi crisis helpline)",
            online: "http://www.aasra.info/",
        },
        message: "Please reach out to a trusted friend, family member, or mental health professional. \
                  You are not alone, and help is available. 🌸💕",
    }
}
