use serde::{Deserialize, Serialize};

const PHQ9_QUESTIONS: &[&str] = &[
    "Little interest or pleasure in doing things?",
    "Feeling down, depressed, or hopeless?",
    "Trouble falling or staying asleep, or sleeping too much?",
    "Feeling tired or having little energy?",
    "Poor appetite or overeating?",
    "Feeling bad about yourself - or that you are a failure or have let yourself or your family down?",
    "Trouble concentrating on things, such as reading the newspaper or watching television?",
    "Moving or speaking so slowly that other people could have noticed? Or so fidgety or restless that you have been moving a lot more than usual?",
    "Thoughts that you would be better off dead, or thoughts of hurting yourself in some way?",
];

const GAD7_QUESTIONS: &[&str] = &[
    "Feeling nervous, anxious, or on edge?",
    "Not being able to stop or control worrying?",
    "Worrying too much about different things?",
    "Trouble relaxing?",
    "Being so restless that it's hard to sit still?",
    "Becoming easily annoyed or irritable?",
    "Feeling afraid as if something awful might happen?",
];

/// Answer options shared by both instruments, scored 0 through 3.
pub const ANSWER_OPTIONS: &[&str] = &[
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// Highest score a single answer can carry.
pub const MAX_ANSWER: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Phq9,
    Gad7,
}

impl Instrument {
    /// Parses the wire key ("phq9" / "gad7"). Unknown keys are the caller's to reject.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "phq9" => Some(Instrument::Phq9),
            "gad7" => Some(Instrument::Gad7),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Instrument::Phq9 => "phq9",
            Instrument::Gad7 => "gad7",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Instrument::Phq9 => "Depression Screening",
            Instrument::Gad7 => "Anxiety Screening",
        }
    }

    pub fn questions(self) -> &'static [&'static str] {
        match self {
            Instrument::Phq9 => PHQ9_QUESTIONS,
            Instrument::Gad7 => GAD7_QUESTIONS,
        }
    }

    pub fn max_score(self) -> u32 {
        self.questions().len() as u32 * MAX_ANSWER as u32
    }
}
