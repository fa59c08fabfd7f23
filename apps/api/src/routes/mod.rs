pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::companion::handlers as companion;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Conversation
        .route("/chat", post(companion::handle_chat))
        .route("/set-profile", post(companion::handle_set_profile))
        .route("/mood", post(companion::handle_record_mood))
        .route("/sessions", post(companion::handle_create_session))
        .route("/sessions/:id", delete(companion::handle_reset_session))
        .route(
            "/sessions/:id/messages",
            get(companion::handle_session_messages),
        )
        .route("/sessions/:id/moods", get(companion::handle_session_moods))
        // Screening
        .route("/phq9-questions", get(screening::handle_phq9_questions))
        .route("/gad7-questions", get(screening::handle_gad7_questions))
        .route(
            "/process-assessment",
            post(screening::handle_process_assessment),
        )
        .with_state(state)
}
