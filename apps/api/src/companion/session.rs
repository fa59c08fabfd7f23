//! Per-session conversation state, kept in memory only.
//!
//! Every request names its session; nothing is shared between sessions. The store
//! lock guards the map for short synchronous sections and is never held across an
//! `.await` on the language model.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::chat::{tail, ChatMessage};
use crate::models::profile::{MoodEntry, UserProfile};

/// Session used by clients that never send an id (profile set before chatting).
pub const DEFAULT_SESSION: &str = "default";

/// Messages returned for display.
pub const DISPLAY_WINDOW: usize = 30;

#[derive(Debug, Default)]
pub struct Session {
    pub profile: Option<UserProfile>,
    pub messages: Vec<ChatMessage>,
    pub moods: Vec<MoodEntry>,
}

impl Session {
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn recent(&self, n: usize) -> &[ChatMessage] {
        tail(&self.messages, n)
    }
}

/// Sessions live until reset or process exit; nothing is evicted.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on the session, creating it on first use.
    pub async fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.inner.lock().await;
        let session = sessions.entry(id.to_string()).or_default();
        f(session)
    }

    /// Like `with_session`, also handing `f` the profile that applies to the session:
    /// its own, else the one set on the default session, else the anonymous default.
    pub async fn with_session_and_profile<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session, UserProfile) -> R,
    ) -> R {
        let mut sessions = self.inner.lock().await;
        let shared = sessions
            .get(DEFAULT_SESSION)
            .and_then(|s| s.profile.clone());
        let session = sessions.entry(id.to_string()).or_default();
        let profile = session.profile.clone().or(shared).unwrap_or_default();
        f(session, profile)
    }

    /// Runs `f` on an existing session; `None` when the id is unknown.
    pub async fn read<R>(&self, id: &str, f: impl FnOnce(&Session) -> R) -> Option<R> {
        let sessions = self.inner.lock().await;
        sessions.get(id).map(f)
    }

    /// Mints a fresh, empty session and returns its id.
    pub async fn create(&self) -> String {
        let id = Uuid::new_v4().to_string();
        self.inner
            .lock()
            .await
            .insert(id.clone(), Session::default());
        id
    }

    /// Drops all state for `id`. Returns whether anything was removed.
    pub async fn reset(&self, id: &str) -> bool {
        self.inner.lock().await.remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sessions_are_created_lazily() {
        let store = SessionStore::new();
        assert!(store.read("a", |_| ()).await.is_none());

        store
            .with_session("a", |s| s.push(ChatMessage::user("hello")))
            .await;
        let count = store.read("a", |s| s.messages.len()).await;
        assert_eq!(count, Some(1));
    }

    #[tokio::test]
    async fn test_sessions_do_not_bleed() {
        let store = SessionStore::new();
        store
            .with_session("a", |s| s.push(ChatMessage::user("from a")))
            .await;
        store
            .with_session("b", |s| s.push(ChatMessage::user("from b")))
            .await;

        let a = store.read("a", |s| s.messages.clone()).await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].content, "from a");
    }

    #[tokio::test]
    async fn test_create_returns_unique_empty_sessions() {
        let store = SessionStore::new();
        let first = store.create().await;
        let second = store.create().await;
        assert_ne!(first, second);
        assert_eq!(store.read(&first, |s| s.messages.len()).await, Some(0));
    }

    #[tokio::test]
    async fn test_reset_drops_state() {
        let store = SessionStore::new();
        store
            .with_session("a", |s| s.moods.push(MoodEntry::record("Good")))
            .await;
        assert!(store.reset("a").await);
        assert!(!store.reset("a").await);
        assert!(store.read("a", |_| ()).await.is_none());
    }

    fn named(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            ..UserProfile::default()
        }
    }

    #[tokio::test]
    async fn test_profile_defaults_before_onboarding() {
        let store = SessionStore::new();
        let name = store.with_session_and_profile("a", |_, p| p.name).await;
        assert_eq!(name, "friend");
    }

    #[tokio::test]
    async fn test_default_session_profile_applies_to_other_sessions() {
        let store = SessionStore::new();
        store
            .with_session(DEFAULT_SESSION, |s| s.profile = Some(named("Leo")))
            .await;

        let name = store.with_session_and_profile("4821", |_, p| p.name).await;
        assert_eq!(name, "Leo");
    }

    #[tokio::test]
    async fn test_own_profile_wins_over_default_session() {
        let store = SessionStore::new();
        store
            .with_session(DEFAULT_SESSION, |s| s.profile = Some(named("Leo")))
            .await;
        store
            .with_session("a", |s| s.profile = Some(named("Ana")))
            .await;

        let name = store.with_session_and_profile("a", |_, p| p.name).await;
        assert_eq!(name, "Ana");
    }

    #[test]
    fn test_recent_window() {
        let mut session = Session::default();
        for i in 0..40 {
            session.push(ChatMessage::user(i.to_string()));
        }
        let recent = session.recent(DISPLAY_WINDOW);
        assert_eq!(recent.len(), 30);
        assert_eq!(recent[0].content, "10");
    }
}
