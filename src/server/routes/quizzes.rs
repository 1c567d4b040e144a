use crate::error::TriviaError;
use crate::server::extract::ApiJson;
use crate::server::router::TriviaState;
use axum::{Json, extract::State};
use std::collections::HashSet;
use trivia_schema::{Question, QuizRequest, QuizResponse};
use tracing::debug;

/// POST /quizzes
///
/// Draws the next question of a round. `question: null` ends the round; it is not an error.
pub async fn play_quiz(
    State(state): State<TriviaState>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, TriviaError> {
    let category = body.category_id();
    let rows = match category {
        Some(category) => state.db.list_questions_in_category(category).await?,
        None => state.db.list_questions().await?,
    };

    let pool: Vec<Question> = rows.into_iter().map(Question::from).collect();
    let served: HashSet<i64> = body.previous_questions.into_iter().collect();
    let question = state.rng.pick(&pool, &served);

    debug!(
        quiz.category = ?category,
        quiz.pool = pool.len(),
        quiz.served = served.len(),
        quiz.picked = ?question.as_ref().map(|q| q.id),
        "Quiz draw"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
