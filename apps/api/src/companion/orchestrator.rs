use tracing::{debug, warn};

use crate::companion::canned::fallback_reply;
use crate::companion::poetry::enrich_model_reply;
use crate::companion::prompts::build_system_prompt;
use crate::companion::random::RandomSource;
use crate::companion::session::SessionStore;
use crate::companion::suggestion::suggest_assessment;
use crate::lexicon::{detect_crisis, sentiment};
use crate::llm_client::LanguageModel;
use crate::models::chat::ChatMessage;
use crate::screening::Instrument;

/// History entries sent to the model, current user turn included.
pub const CONTEXT_WINDOW: usize = 6;

/// Outcome of one chat turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub response: String,
    pub sentiment: f64,
    pub is_crisis: bool,
    pub suggested: Option<Instrument>,
}

/// Handles one user message: flag crisis language, ask the model (or the canned
/// bank when the model is absent or fails), record both turns and check whether a
/// screening should be offered.
pub async fn respond(
    sessions: &SessionStore,
    model: Option<&dyn LanguageModel>,
    session_id: &str,
    message: &str,
    rng: &mut dyn RandomSource,
) -> ChatTurn {
    let is_crisis = detect_crisis(message);

    let (profile, context) = sessions
        .with_session_and_profile(session_id, |session, profile| {
            session.push(ChatMessage::user(message));
            (profile, session.recent(CONTEXT_WINDOW).to_vec())
        })
        .await;

    let model_reply = match model {
        Some(model) => {
            let system = build_system_prompt(&profile, is_crisis);
            match model.generate(&system, &context).await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(session_id, "Model call failed, using canned reply: {e}");
                    None
                }
            }
        }
        None => None,
    };

    let response = match model_reply {
        Some(text) => enrich_model_reply(text, message, &profile, rng),
        None => fallback_reply(message, is_crisis, &profile, rng),
    };

    let suggested = sessions
        .with_session(session_id, |session| {
            session.push(ChatMessage::assistant(response.clone()));
            suggest_assessment(&session.messages)
        })
        .await;

    debug!(session_id, is_crisis, ?suggested, "Chat turn complete");

    ChatTurn {
        response,
        sentiment: sentiment(message),
        is_crisis,
        suggested,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::companion::canned::crisis_reply;
    use crate::companion::random::FixedRandom;
    use crate::llm_client::LlmError;
    use crate::models::chat::Role;
    use crate::models::profile::UserProfile;

    /// Records what it was asked and answers with a fixed result.
    struct StubModel {
        answer: Result<String, ()>,
        seen: Mutex<Vec<(String, usize)>>,
    }

    impl StubModel {
        fn ok(text: &str) -> Self {
            Self {
                answer: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                answer: Err(()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LanguageModel for StubModel {
        async fn generate(&self, system: &str, history: &[ChatMessage]) -> Result<String, LlmError> {
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), history.len()));
            self.answer.clone().map_err(|_| LlmError::EmptyContent)
        }
    }

    async fn store_with_profile(id: &str, name: &str) -> SessionStore {
        let store = SessionStore::new();
        store
            .with_session(id, |s| {
                s.profile = Some(UserProfile {
                    name: name.to_string(),
                    age: 30,
                    ..UserProfile::default()
                })
            })
            .await;
        store
    }

    #[tokio::test]
    async fn test_model_reply_is_used_and_recorded() {
        let store = store_with_profile("s1", "Ana").await;
        let model = StubModel::ok("I'm listening.");

        let turn = respond(&store, Some(&model), "s1", "I went to the park", &mut FixedRandom::always()).await;

        assert_eq!(turn.response, "I'm listening.");
        assert!(!turn.is_crisis);
        assert_eq!(turn.sentiment, 0.0);

        let roles = store
            .read("s1", |s| s.messages.iter().map(|m| m.role).collect::<Vec<_>>())
            .await
            .unwrap();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_canned() {
        let store = store_with_profile("s1", "Ana").await;
        let model = StubModel::failing();

        let turn = respond(&store, Some(&model), "s1", "I went to the park", &mut FixedRandom::never()).await;

        assert!(turn.response.starts_with("You are safe here with me, Ana"));
        assert_eq!(model.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_no_model_uses_canned_crisis_reply() {
        let store = store_with_profile("s1", "Ana").await;

        let turn = respond(&store, None, "s1", "I want to kill myself", &mut FixedRandom::never()).await;

        assert!(turn.is_crisis);
        assert_eq!(turn.response, crisis_reply("Ana"));
    }

    #[tokio::test]
    async fn test_crisis_turn_sends_crisis_prompt_and_gets_poem() {
        let store = store_with_profile("s1", "Ana").await;
        let model = StubModel::ok("You matter.");

        let turn = respond(&store, Some(&model), "s1", "I want to die", &mut FixedRandom::never()).await;

        let seen = model.seen.lock().unwrap();
        assert!(seen[0].0.contains("CRISIS RESPONSE MODE"));
        assert!(turn.response.starts_with("You matter.\n\nHere's a gentle poem"));
    }

    #[tokio::test]
    async fn test_model_sees_at_most_six_messages() {
        let store = store_with_profile("s1", "Ana").await;
        let model = StubModel::ok("ok");
        let mut rng = FixedRandom::never();

        for i in 0..5 {
            respond(&store, Some(&model), "s1", &format!("message {i}"), &mut rng).await;
        }

        let seen = model.seen.lock().unwrap();
        let lengths: Vec<usize> = seen.iter().map(|(_, n)| *n).collect();
        assert_eq!(lengths, vec![1, 3, 5, 6, 6]);
    }

    #[tokio::test]
    async fn test_repeated_low_mood_suggests_phq9() {
        let store = SessionStore::new();
        let mut rng = FixedRandom::never();
        let mut last = None;
        for _ in 0..3 {
            last = Some(respond(&store, None, "s1", "I feel sad and hopeless", &mut rng).await);
        }
        let turn = last.unwrap();
        assert_eq!(turn.suggested, Some(Instrument::Phq9));
        assert!(turn.sentiment < 0.0);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let mut rng = FixedRandom::never();
        respond(&store, None, "a", "I feel sad and hopeless", &mut rng).await;
        respond(&store, None, "a", "I feel sad and hopeless", &mut rng).await;
        let other = respond(&store, None, "b", "I went to the park", &mut rng).await;

        assert_eq!(other.suggested, None);
        assert_eq!(store.read("b", |s| s.messages.len()).await, Some(2));
        assert_eq!(store.read("a", |s| s.messages.len()).await, Some(4));
    }
}
