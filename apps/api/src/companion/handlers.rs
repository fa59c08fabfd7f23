//! Axum route handlers for chat, profile, session and mood endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::companion::orchestrator::respond;
use crate::companion::random::StdRandom;
use crate::companion::session::{DEFAULT_SESSION, DISPLAY_WINDOW};
use crate::errors::AppError;
use crate::lexicon::{crisis_resources, CrisisResources};
use crate::models::chat::ChatMessage;
use crate::models::profile::{MoodEntry, UserProfile};
use crate::screening::Instrument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestedAssessment {
    #[serde(rename = "type")]
    pub kind: Instrument,
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

impl From<Instrument> for SuggestedAssessment {
    fn from(instrument: Instrument) -> Self {
        Self {
            kind: instrument,
            name: instrument.display_name(),
            questions: instrument.questions(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub sentiment: f64,
    pub is_crisis: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_resources: Option<CrisisResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_assessment: Option<SuggestedAssessment>,
}

fn default_session() -> String {
    DEFAULT_SESSION.to_string()
}

#[derive(Debug, Deserialize)]
pub struct SetProfileRequest {
    pub age: u32,
    pub name: String,
    pub goals: Vec<String>,
    pub current_mood: String,
    #[serde(default = "default_session")]
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub session_id: String,
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct MoodHistoryResponse {
    pub moods: Vec<MoodEntry>,
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// Runs one conversational turn. Model failures never surface here; the reply
/// silently comes from the canned bank instead.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    require_non_blank("message", &request.message)?;
    require_non_blank("session_id", &request.session_id)?;

    let mut rng = StdRandom::from_entropy();
    let turn = respond(
        &state.sessions,
        state.model.as_deref(),
        &request.session_id,
        &request.message,
        &mut rng,
    )
    .await;

    Ok(Json(ChatResponse {
        response: turn.response,
        sentiment: turn.sentiment,
        is_crisis: turn.is_crisis,
        crisis_resources: turn.is_crisis.then(crisis_resources),
        suggested_assessment: turn.suggested.map(SuggestedAssessment::from),
    }))
}

/// POST /set-profile
///
/// Stores the onboarding profile, records the starting mood and greets the user.
pub async fn handle_set_profile(
    State(state): State<AppState>,
    Json(request): Json<SetProfileRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    require_non_blank("name", &request.name)?;
    if request.goals.is_empty() {
        return Err(AppError::Validation(
            "at least one goal must be selected".to_string(),
        ));
    }

    let profile = UserProfile {
        name: request.name.trim().to_string(),
        age: request.age,
        goals: request.goals,
        current_mood: request.current_mood,
    };

    state
        .sessions
        .with_session(&request.session_id, |session| {
            session.moods.push(MoodEntry::record(&profile.current_mood));
            session.push(ChatMessage::assistant(format!(
                "Hi {}! It's great to meet you. I'm here to support you with your mental well-being. How can I help you today?",
                profile.name
            )));
            session.profile = Some(profile);
        })
        .await;

    info!(session_id = %request.session_id, "Profile updated");

    Ok(Json(StatusResponse {
        status: "success",
        message: "Profile updated successfully",
    }))
}

/// POST /sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// DELETE /sessions/:id
///
/// Forgets everything about the session. Idempotent.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    if state.sessions.reset(&session_id).await {
        info!(%session_id, "Session reset");
    }
    StatusCode::NO_CONTENT
}

/// GET /sessions/:id/messages
///
/// The most recent messages for display, plus the full history length.
pub async fn handle_session_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<MessagesResponse>, AppError> {
    state
        .sessions
        .read(&session_id, |session| MessagesResponse {
            messages: session.recent(DISPLAY_WINDOW).to_vec(),
            total: session.messages.len(),
        })
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}

/// POST /mood
pub async fn handle_record_mood(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> Result<Json<MoodEntry>, AppError> {
    require_non_blank("session_id", &request.session_id)?;
    require_non_blank("mood", &request.mood)?;

    let entry = MoodEntry::record(&request.mood);
    state
        .sessions
        .with_session(&request.session_id, |session| {
            session.moods.push(entry.clone());
            session.push(ChatMessage::system(format!(
                "You selected a mood: {}",
                entry.mood
            )));
        })
        .await;

    Ok(Json(entry))
}

/// GET /sessions/:id/moods
pub async fn handle_session_moods(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<MoodHistoryResponse>, AppError> {
    state
        .sessions
        .read(&session_id, |session| MoodHistoryResponse {
            moods: session.moods.clone(),
        })
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))
}
