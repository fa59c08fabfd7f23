//! Canned reply bank used whenever no live model answers.
//!
//! Branches are checked top to bottom against the lower-cased message and the
//! first match wins. Crisis text bypasses the bank entirely. Matching is plain
//! substring search, so "hi" also fires inside "this" or "nothing".

use crate::companion::poetry::{healing_poem, with_poem, PoemCategory};
use crate::companion::random::{choose, RandomSource};
use crate::lexicon::contains_any;
use crate::models::profile::{AgeBracket, UserProfile};

pub fn crisis_reply(name: &str) -> String {
    format!(
        "I hear your pain, and I care deeply, {name} 🌸. You are not alone, and you matter so much. \
         You are safe here with me 💕. Would it help to talk about what's making you feel this way? \
         I'm here to listen with all my heart."
    )
}

/// Selects a reply for `message`. Poem chances follow the branch that matched.
pub fn fallback_reply(
    message: &str,
    is_crisis: bool,
    profile: &UserProfile,
    rng: &mut dyn RandomSource,
) -> String {
    let name = profile.name.as_str();

    if is_crisis {
        return crisis_reply(name);
    }

    let text = message.to_lowercase();
    let bracket = profile.age_bracket();

    if contains_any(&text, &["hello", "hi", "hey"]) {
        choose(rng, greetings(name, bracket))
    } else if contains_any(&text, &["sad", "depress", "down", "empty", "low"]) {
        let reply = choose(
            rng,
            vec![
                format!("I hear you're feeling really heavy right now, {name} 💙. Those feelings are so valid, and you're so brave for sharing them with me. You are safe here 💕."),
                format!("Oh {name}, I can feel the sadness in your words 🌸. That must be so exhausting to carry. You deserve all the gentleness in the world right now."),
                format!("Thank you for trusting me with these feelings, {name} 🌿. Sadness can feel so isolating, but you're not alone - I'm here with you, and you matter deeply."),
            ],
        );
        with_poem(reply, 0.30, PoemCategory::SadnessLoneliness, profile, rng)
    } else if contains_any(&text, &["anxious", "anxiety", "worry"]) {
        let reply = choose(
            rng,
            vec![
                format!("I can feel that anxious energy with you, {name} 🌸. Your mind must feel like it's racing - that's so overwhelming. You are safe here, and we can slow down together 💙."),
                format!("Anxiety can be so exhausting, dear {name} 🌿. I hear you, and I want you to know you're incredibly brave for reaching out. Let's breathe through this gently together."),
                format!("Those worried thoughts sound so heavy, {name} 💕. You're doing the right thing by talking about them. You deserve peace and calm - let's find some together."),
            ],
        );
        with_poem(reply, 0.25, PoemCategory::AnxietyStress, profile, rng)
    } else if contains_any(&text, &["stress", "overwhelm"]) {
        choose(
            rng,
            vec![
                format!("It sounds like you have a lot on your plate right now, {name}. When everything feels overwhelming, even small tasks can seem impossible."),
                format!("{name}, stress can be so draining. What's been the biggest source of pressure for you lately?"),
                format!("I can imagine how exhausting that must feel, {name}. Sometimes we need to give ourselves permission to just breathe."),
            ],
        )
    } else if text.contains("thank") {
        choose(
            rng,
            vec![
                format!("You're so welcome, {name}! I'm just glad I could be here for you. How are you feeling now?"),
                format!("I'm happy I could help, {name}. Is there anything else you'd like to talk through?"),
                format!("Of course, {name}! That's what I'm here for. You're doing great by taking care of yourself."),
            ],
        )
    } else if contains_any(&text, &["comfort", "sweet", "make me feel better", "pampering"]) {
        format!(
            "Of course, dear {name} 💕. You deserve all the comfort in the world.\n\n{}",
            healing_poem(PoemCategory::ComfortPampering, profile, rng)
        )
    } else if contains_any(&text, &["lonely", "alone", "understand"]) {
        let reply = choose(
            rng,
            vec![
                format!("You're not alone, sweet {name} 🌸. I see you, I hear you, and you matter so much. Consider this a gentle hug in words 🤗."),
                format!("Loneliness can feel so heavy, {name} 💙. But right here, right now, you are seen and valued. You deserve connection and love 💕."),
                format!("I understand that feeling, dear {name} 🌿. Sometimes it feels like no one gets it, but I'm here with you, and you are worthy of understanding."),
            ],
        );
        with_poem(reply, 0.40, PoemCategory::SadnessLoneliness, profile, rng)
    } else if contains_any(&text, &["confidence", "doubt", "burden", "worth"]) {
        let reply = choose(
            rng,
            vec![
                format!("Oh {name}, you are not a burden - you are a gift 🌸. Those doubts are lying to you. You deserve love, respect, and kindness 💕."),
                format!("I hear those self-doubts, {name} 💙. But let me tell you what I see: someone brave enough to reach out, someone worthy of care. You matter deeply 🌿."),
                format!("Those confidence struggles are so hard, dear {name} 🌸. You are enough, just as you are. Be gentle with yourself today 💕."),
            ],
        );
        with_poem(reply, 0.35, PoemCategory::SelfLove, profile, rng)
    } else if contains_any(&text, &["bored", "okay"]) {
        let options = if bracket == AgeBracket::Child {
            vec![
                format!("Aww, feeling a little bored, {name}? 🌈 That's totally okay! Maybe we could think of something fun together? What makes you smile? ✨"),
                format!("Sometimes okay days are just fine, little star {name} 🌟. You don't always have to feel amazing - you're perfect just as you are! 🐻"),
            ]
        } else {
            vec![
                format!("Sometimes okay is exactly where we need to be, {name} 🌿. You don't have to be amazing every day - you're enough just as you are 💙."),
                format!("I hear you, {name} 🌸. Those quiet, 'okay' moments can actually be really peaceful. How can I make this moment a little brighter for you? ✨"),
            ]
        };
        choose(rng, options)
    } else if contains_any(&text, &["story", "calm"]) {
        choose(
            rng,
            vec![
                format!("Of course, {name} 🌸. Close your eyes and imagine a gentle meadow where wildflowers dance in the soft breeze, and every step you take feels like walking on clouds of peace 🌿💙."),
                format!("Here's a little peace for you, {name} 💕: Picture yourself by a quiet lake where the water reflects the most beautiful sunset, and every breath you take fills you with warmth and safety 🌅."),
                format!("Let me paint you a calm scene, dear {name} 🌸: You're in a cozy reading nook with the softest blanket, warm tea, and all the time in the world just for you ☕🤗."),
            ],
        )
    } else if contains_any(&text, &["breathing", "exercise"]) {
        let reply = choose(
            rng,
            vec![
                format!("Beautiful choice, {name} 🌸. Let's breathe together: In for 4... hold for 4... out for 6. You're doing wonderfully. Feel that calm flowing through you 💙."),
                format!("I'm so proud of you for asking, {name} 💕. Try this with me: Breathe in peace... hold it gently... breathe out all the stress. You deserve this moment of calm 🌿."),
                format!("What a loving thing to do for yourself, {name} 🌸. Let's try the 5-4-3-2-1: 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste. You're safe here 💙."),
            ],
        );
        with_poem(reply, 0.50, PoemCategory::BreathingRelaxation, profile, rng)
    } else if text.contains("tip") && text.contains("self-care") {
        choose(
            rng,
            vec![
                format!("Here's a gentle self-care tip for you, {name} 🌸: Take 3 deep breaths and tell yourself 'I am worthy of love and kindness.' You deserve to hear that 💕."),
                format!("Sweet {name}, try this: Put your hand on your heart and feel it beating. That's your body taking care of you. You deserve the same care from yourself 💙🌿."),
                format!("Here's some love for you, {name} 🌸: Do one tiny thing that makes you smile today - even just looking at something beautiful counts. You matter 💕."),
            ],
        )
    } else if contains_any(&text, &["relax", "technique", "trick"]) {
        choose(
            rng,
            vec![
                format!("Of course, {name}! Try the 5-4-3-2-1 grounding technique: name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste. It helps bring you back to the present moment."),
                format!("Here's a quick one, {name}: breathe in for 4 counts, hold for 4, breathe out for 6. This activates your body's relaxation response. Try it a few times!"),
                format!("Try this, {name}: tense all your muscles for 5 seconds, then release completely. It's called progressive muscle relaxation and it really works!"),
            ],
        )
    } else if contains_any(&text, &["exam", "test", "study"]) {
        choose(
            rng,
            vec![
                format!("Exam stress is so common, {name}. Try breaking your study into small chunks and take breaks every 25 minutes. Your brain actually absorbs more that way!"),
                format!("I understand that pressure, {name}. Remember to breathe deeply before the exam, and trust that you've prepared. Sometimes our anxiety makes us forget what we actually know."),
                format!("Study anxiety is tough, {name}. Try reviewing your notes out loud - it helps with retention. And remember, one exam doesn't define your worth!"),
            ],
        )
    } else if text.contains("bye") {
        choose(
            rng,
            vec![
                format!("Take care of yourself, {name}. Remember, I'm always here when you need someone to talk to. You've got this!"),
                format!("It was really good talking with you, {name}. Be gentle with yourself, and feel free to come back anytime."),
                format!("Goodbye for now, {name}. I hope you carry some peace with you today. I'll be here whenever you need support."),
            ],
        )
    } else {
        choose(rng, general_replies(name, bracket))
    }
}

fn greetings(name: &str, bracket: AgeBracket) -> Vec<String> {
    match bracket {
        AgeBracket::Child => vec![
            format!("Hi there, beautiful {name}! 🌈✨ It's so wonderful to see you today! How are you feeling, little star?"),
            format!("Hello, sweet {name}! 🌸🐻 I'm so happy you're here! What magical thing happened in your day?"),
            format!("Hey, amazing {name}! 🌟 You brighten my day just by being here! How are you doing today?"),
        ],
        AgeBracket::Teen => vec![
            format!("Hey {name}! 💙 Really great to see you here. How are you feeling today?"),
            format!("Hi there, {name}! 🌸 I'm so glad you reached out. What's going on in your world?"),
            format!("Hello {name}! ✨ You're brave for being here. How has your day been treating you?"),
        ],
        AgeBracket::Adult | AgeBracket::Senior => vec![
            format!("Hi {name} 🌿 It's really nice to see you today. You are safe here 💕. How are you feeling?"),
            format!("Hello, dear {name} 🌸 I'm so glad you're here. Consider this a gentle space just for you. What's on your mind?"),
            format!("Hey there, {name} 💙 You deserve care and kindness today. How can I support you?"),
        ],
    }
}

fn general_replies(name: &str, bracket: AgeBracket) -> Vec<String> {
    match bracket {
        AgeBracket::Child => vec![
            format!("I'm here to listen to you, sweet {name} 🌟. What's been happening in your magical world today?"),
            format!("You can tell me anything, little star {name} 🌈. What would make you feel happy to share?"),
            format!("I care about you so much, {name} ✨. What's the most important thing you want to talk about?"),
        ],
        AgeBracket::Teen => vec![
            format!("I'm here for you, {name} 💙. What's been on your mind lately?"),
            format!("You're safe to share anything with me, {name} 🌸. What would feel good to talk about?"),
            format!("I really want to understand what you're going through, {name} 💕. What's happening in your world?"),
        ],
        AgeBracket::Adult | AgeBracket::Senior => vec![
            format!("You are safe here with me, {name} 🌿. What's been weighing on your heart lately?"),
            format!("I'm here to listen with all the care in the world, dear {name} 💙. What would feel good to share right now?"),
            format!("You deserve to be heard and understood, {name} 🌸. What's the most important thing happening in your world right now?"),
            format!("Consider this a gentle space just for you, {name} 💕. I'm here for whatever you need to express."),
            format!("Take all the time you need, sweet {name} 🌿. You matter, and your feelings matter too."),
        ],
    }
}
