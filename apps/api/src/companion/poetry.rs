//! Healing poems appended to replies.
//!
//! A reply gets at most one poem. The category comes from the first trigger whose
//! keywords match the user's message, and the trigger's chance decides whether the
//! poem is attached at all.

use crate::companion::random::RandomSource;
use crate::lexicon::contains_any;
use crate::models::profile::{AgeBracket, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoemCategory {
    SadnessLoneliness,
    AnxietyStress,
    SelfLove,
    ComfortPampering,
    ChildrenMagical,
    BreathingRelaxation,
}

impl PoemCategory {
    pub(crate) fn pool(self) -> &'static [&'static str] {
        match self {
            PoemCategory::SadnessLoneliness => &[
                "Even when the night feels long,\nthe stars are quietly shining for you.\nYou are never truly alone,\nthe world still whispers your name with love. 🌌",
                "In the quiet of your sorrow,\ngentle light is waiting near.\nYour heart deserves tomorrow's hope,\nand love will always find you here. 💫",
                "Though shadows dance around your soul,\nyour light can never truly fade.\nRest now in this gentle moment,\nyou are loved, you are not afraid. 🌙",
            ],
            PoemCategory::AnxietyStress => &[
                "Breathe in calm, breathe out the storm,\nyour heart is safe, your spirit warm.\nOne gentle step, one steady light,\nyou'll find your peace, your wings for flight. 🌬️🕊️",
                "In the rush of worried thoughts,\nfind the stillness in your chest.\nYour breath can be your anchor now,\nguiding you to peaceful rest. 🌊",
                "Let the rhythm of your heartbeat\nbe the song that calms your mind.\nIn this moment, you are safe here,\npeace and comfort you will find. 💙",
            ],
            PoemCategory::SelfLove => &[
                "Like flowers turning toward the sun,\nyour soul deserves to bloom.\nBe gentle with your roots today,\nthey are growing strength for tomorrow. 🌸",
                "You are worthy of the kindness\nthat you give to everyone.\nTreat yourself with that same love,\nyou are precious, you are enough. 🌺",
                "In the mirror of your heart,\nsee the beauty shining bright.\nYou deserve all love and care,\nyou are worthy of delight. ✨",
            ],
            PoemCategory::ComfortPampering => &[
                "Wrap yourself in words of care,\nlike a blanket soft and true.\nMay kindness be your steady song,\nand love always find you. 🧸💙",
                "Let these words be gentle arms\nthat hold you close and tight.\nYou deserve this moment's peace,\neverything will be alright. 🤗",
                "In this space of quiet comfort,\nfeel the warmth that surrounds you.\nYou are cherished, you are valued,\nlet this love gently astound you. 💕",
            ],
            PoemCategory::ChildrenMagical => &[
                "Little star, up in the sky ✨\nyou sparkle bright, and so do I.\nEven when clouds come rolling near,\nyour light will always shine clear. 🌈🌟",
                "Magic lives inside your heart,\nbraver than the biggest bear.\nWhen you feel a little scared,\nremember love is everywhere. 🐻✨",
                "You're a rainbow after rain,\na sunbeam bright and true.\nThe world is full of wonder,\nand it's lucky to have you. 🌈☀️",
            ],
            PoemCategory::BreathingRelaxation => &[
                "Breathe in the light, let shadows fade,\na calm new space within is made.\nWith every breath, feel peace grow near,\nyou are safe, you are held here. 🌿",
                "In and out, like gentle waves,\nyour breath can wash your fears away.\nLet this rhythm be your guide,\nto peace that's always here to stay. 🌊",
                "Feel the air fill up your chest,\nlike love flowing through your soul.\nWith each breath, you're growing calm,\nfeeling peaceful, feeling whole. 💨💙",
            ],
        }
    }

    /// The magical verses are for children only; everyone older gets plain comfort.
    fn for_audience(self, bracket: AgeBracket) -> Self {
        match (self, bracket) {
            (PoemCategory::ChildrenMagical, AgeBracket::Child) => PoemCategory::ChildrenMagical,
            (PoemCategory::ChildrenMagical, _) => PoemCategory::ComfortPampering,
            (category, _) => category,
        }
    }
}

/// Draws a poem from `category` and prefixes an age-appropriate introduction.
pub fn healing_poem(
    category: PoemCategory,
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> String {
    let bracket = profile.age_bracket();
    let pool = category.for_audience(bracket).pool();
    let poem = pool[rng.index(pool.len())];
    let name = &profile.name;

    let intro = match bracket {
        AgeBracket::Child => format!("Here's something special for you, little {name} 🌟:"),
        AgeBracket::Teen => format!("Let me share something beautiful with you, {name} 💙:"),
        AgeBracket::Adult | AgeBracket::Senior => {
            format!("Here's a gentle poem for your heart, dear {name} 🌸:")
        }
    };

    format!("{intro}\n\n{poem}")
}

/// Appends a poem from `category` to `reply` with probability `chance`.
pub fn with_poem(
    reply: String,
    chance: f64,
    category: PoemCategory,
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> String {
    if rng.chance(chance) {
        format!("{reply}\n\n{}", healing_poem(category, profile, rng))
    } else {
        reply
    }
}

/// Keyword rule deciding whether a live-model reply earns a poem.
struct PoemTrigger {
    any_of: &'static [&'static str],
    /// Extra keyword group that must also match; empty means no extra condition.
    and_any_of: &'static [&'static str],
    chance: f64,
    category: PoemCategory,
}

impl PoemTrigger {
    fn matches(&self, text: &str) -> bool {
        contains_any(text, self.any_of)
            && (self.and_any_of.is_empty() || contains_any(text, self.and_any_of))
    }
}

/// Checked in order; the first matching trigger decides.
const MODEL_REPLY_TRIGGERS: &[PoemTrigger] = &[
    PoemTrigger {
        any_of: &[
            "sad", "lonely", "empty", "hopeless", "lost", "depressed", "down", "terrible", "awful",
        ],
        and_any_of: &[],
        chance: 0.30,
        category: PoemCategory::SadnessLoneliness,
    },
    PoemTrigger {
        any_of: &[
            "anxious",
            "nervous",
            "worried",
            "scared",
            "panic",
            "overwhelmed",
            "stress",
        ],
        and_any_of: &[],
        chance: 0.25,
        category: PoemCategory::AnxietyStress,
    },
    PoemTrigger {
        any_of: &[
            "something soft",
            "hug",
            "comfort me",
            "pamper",
            "gentle words",
            "make me feel better",
        ],
        and_any_of: &[],
        chance: 1.0,
        category: PoemCategory::ComfortPampering,
    },
    PoemTrigger {
        any_of: &["alone", "isolated", "nobody", "no one"],
        and_any_of: &[],
        chance: 0.40,
        category: PoemCategory::SadnessLoneliness,
    },
    PoemTrigger {
        any_of: &[
            "not good enough",
            "worthless",
            "hate myself",
            "stupid",
            "failure",
            "useless",
        ],
        and_any_of: &[],
        chance: 0.35,
        category: PoemCategory::SelfLove,
    },
    PoemTrigger {
        any_of: &[
            "want to die",
            "kill myself",
            "end it all",
            "no point",
            "better off dead",
        ],
        and_any_of: &[],
        chance: 1.0,
        category: PoemCategory::ComfortPampering,
    },
    PoemTrigger {
        any_of: &["breathe", "relax", "calm"],
        and_any_of: &["help", "technique", "exercise"],
        chance: 0.50,
        category: PoemCategory::BreathingRelaxation,
    },
];

/// Poem rule for replies produced by the language model.
pub fn enrich_model_reply(
    reply: String,
    user_message: &str,
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> String {
    let text = user_message.to_lowercase();
    match MODEL_REPLY_TRIGGERS.iter().find(|t| t.matches(&text)) {
        Some(trigger) => with_poem(reply, trigger.chance, trigger.category, profile, rng),
        None => reply,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companion::random::FixedRandom;

    fn profile(name: &str, age: u32) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            age,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_every_pool_has_three_poems() {
        for category in [
            PoemCategory::SadnessLoneliness,
            PoemCategory::AnxietyStress,
            PoemCategory::SelfLove,
            PoemCategory::ComfortPampering,
            PoemCategory::ChildrenMagical,
            PoemCategory::BreathingRelaxation,
        ] {
            assert_eq!(category.pool().len(), 3, "{category:?}");
        }
    }

    #[test]
    fn test_intro_depends_on_age() {
        let mut rng = FixedRandom::always();
        let child = healing_poem(PoemCategory::SelfLove, &profile("Mia", 9), &mut rng);
        assert!(child.starts_with("Here's something special for you, little Mia"));

        let teen = healing_poem(PoemCategory::SelfLove, &profile("Sam", 16), &mut rng);
        assert!(teen.starts_with("Let me share something beautiful with you, Sam"));

        let senior = healing_poem(PoemCategory::SelfLove, &profile("Ruth", 78), &mut rng);
        assert!(senior.starts_with("Here's a gentle poem for your heart, dear Ruth"));
    }

    #[test]
    fn test_children_magical_falls_back_for_older_users() {
        let mut rng = FixedRandom::always();
        let poem = healing_poem(PoemCategory::ChildrenMagical, &profile("Ana", 30), &mut rng);
        assert!(poem.ends_with(PoemCategory::ComfortPampering.pool()[0]));
    }

    #[test]
    fn test_children_keep_the_comfort_pool() {
        let mut rng = FixedRandom::always();
        let poem = healing_poem(PoemCategory::ComfortPampering, &profile("Leo", 8), &mut rng);
        assert!(poem.ends_with(PoemCategory::ComfortPampering.pool()[0]));
        assert!(poem.starts_with("Here's something special for you, little Leo"));

        let magical = healing_poem(PoemCategory::ChildrenMagical, &profile("Leo", 8), &mut rng);
        assert!(magical.ends_with(PoemCategory::ChildrenMagical.pool()[0]));
    }

    #[test]
    fn test_with_poem_respects_roll() {
        let p = profile("Ana", 30);
        let kept = with_poem("Hi".to_string(), 0.3, PoemCategory::SelfLove, &p, &mut FixedRandom::never());
        assert_eq!(kept, "Hi");

        let enriched = with_poem("Hi".to_string(), 0.3, PoemCategory::SelfLove, &p, &mut FixedRandom::always());
        assert!(enriched.starts_with("Hi\n\nHere's a gentle poem"));
    }

    #[test]
    fn test_comfort_request_always_gets_poem() {
        let reply = enrich_model_reply(
            "Of course.".to_string(),
            "Could you send me a hug?",
            &profile("Ana", 30),
            &mut FixedRandom::never(),
        );
        assert!(reply.contains(PoemCategory::ComfortPampering.pool()[0]));
    }

    #[test]
    fn test_crisis_phrase_always_gets_comfort_poem() {
        let reply = enrich_model_reply(
            "I'm here.".to_string(),
            "Some days I just want to end it all",
            &profile("Ana", 30),
            &mut FixedRandom::never(),
        );
        assert!(reply.contains(PoemCategory::ComfortPampering.pool()[0]));
    }

    #[test]
    fn test_first_matching_trigger_wins() {
        // "sad" (sadness) precedes "hug" (comfort) in the trigger order.
        let reply = enrich_model_reply(
            "I'm here.".to_string(),
            "I'm sad, I need a hug",
            &profile("Ana", 30),
            &mut FixedRandom::never(),
        );
        assert_eq!(reply, "I'm here.");
    }

    #[test]
    fn test_breathing_trigger_needs_both_groups() {
        let p = profile("Ana", 30);
        let plain = enrich_model_reply("Ok.".to_string(), "I want to relax", &p, &mut FixedRandom::always());
        assert_eq!(plain, "Ok.");

        let poem = enrich_model_reply(
            "Ok.".to_string(),
            "Can you help me relax",
            &p,
            &mut FixedRandom::always(),
        );
        assert!(poem.contains(PoemCategory::BreathingRelaxation.pool()[0]));
    }

    #[test]
    fn test_unrelated_message_gets_no_poem() {
        let reply = enrich_model_reply(
            "Sounds fun!".to_string(),
            "I went to the park today",
            &profile("Ana", 30),
            &mut FixedRandom::always(),
        );
        assert_eq!(reply, "Sounds fun!");
    }
}
