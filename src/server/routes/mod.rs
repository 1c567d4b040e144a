use crate::error::TriviaError;
use crate::server::router::TriviaState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Known path, wrong verb.
async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}

pub fn router() -> Router<TriviaState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/{id}",
            get(categories::category_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(questions::list_questions)
                .post(questions::create_question)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/{id}",
            delete(questions::delete_question).fallback(method_not_allowed),
        )
        .route(
            "/search",
            post(questions::search_questions).fallback(method_not_allowed),
        )
        .route(
            "/quizzes",
            post(quizzes::play_quiz).fallback(method_not_allowed),
        )
}
