//! Axum route handlers for the screening questionnaires.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::chat::ChatMessage;
use crate::screening::catalog::{Instrument, ANSWER_OPTIONS};
use crate::screening::interpreter::{score_responses, AssessmentResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [&'static str],
    pub options: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct ProcessAssessmentRequest {
    pub assessment_type: String,
    pub responses: Vec<i64>,
    /// When present, the result is also posted into this session's history.
    #[serde(default)]
    pub session_id: Option<String>,
}

fn questions_for(instrument: Instrument) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: instrument.questions(),
        options: ANSWER_OPTIONS,
    })
}

/// GET /phq9-questions
pub async fn handle_phq9_questions() -> Json<QuestionsResponse> {
    questions_for(Instrument::Phq9)
}

/// GET /gad7-questions
pub async fn handle_gad7_questions() -> Json<QuestionsResponse> {
    questions_for(Instrument::Gad7)
}

/// Chat-history lines summarising a finished screening.
fn result_messages(result: &AssessmentResult) -> [ChatMessage; 2] {
    let mut strategies =
        "Based on your responses, here are some strategies that might help:\n".to_string();
    for strategy in &result.strategies {
        strategies.push_str(&format!("- {strategy}\n"));
    }

    [
        ChatMessage::system(format!(
            "Assessment Result: {} (Score: {})",
            result.interpretation, result.score
        )),
        ChatMessage::assistant(strategies),
    ]
}

/// POST /process-assessment
///
/// Scores a completed questionnaire. Unknown instruments and malformed response
/// vectors are rejected with 400.
pub async fn handle_process_assessment(
    State(state): State<AppState>,
    Json(request): Json<ProcessAssessmentRequest>,
) -> Result<Json<AssessmentResult>, AppError> {
    let instrument = Instrument::from_key(&request.assessment_type)
        .ok_or_else(|| AppError::Validation("Invalid assessment type".to_string()))?;

    let result = score_responses(instrument, &request.responses)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    info!(
        instrument = instrument.key(),
        score = result.score,
        max = instrument.max_score(),
        "Assessment scored"
    );

    if let Some(session_id) = request.session_id.as_deref() {
        let messages = result_messages(&result);
        state
            .sessions
            .with_session(session_id, |session| {
                session.messages.extend(messages);
            })
            .await;
    }

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_messages_list_every_strategy() {
        let result = score_responses(Instrument::Gad7, &[3; 7]).unwrap();
        let [summary, advice] = result_messages(&result);

        assert_eq!(summary.content, "Assessment Result: Severe anxiety (Score: 21)");
        for strategy in &result.strategies {
            assert!(advice.content.contains(&format!("- {strategy}")));
        }
    }
}
