use crate::error::TriviaError;
use crate::server::extract::ApiPath;
use crate::server::router::TriviaState;
use axum::{Json, extract::State};
use trivia_schema::{CategoriesResponse, CategoryQuestionsResponse, Question};
use tracing::debug;

/// GET /categories
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state
        .db
        .list_categories()
        .await?
        .into_iter()
        .map(|c| c.label)
        .collect();

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}
///
/// `id` is the stored category id. An unknown id is a 404, an existing category with no questions
/// is an empty list.
pub async fn category_questions(
    State(state): State<TriviaState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CategoryQuestionsResponse>, TriviaError> {
    let Some(category) = state.db.get_category(id).await? else {
        return Err(TriviaError::NotFound(format!("category {id}")));
    };

    let questions: Vec<Question> = state
        .db
        .list_questions_in_category(id)
        .await?
        .into_iter()
        .map(Question::from)
        .collect();

    debug!(
        category.id = id,
        category.label = %category.label,
        total = questions.len(),
        "Listed questions in category"
    );

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.label,
    }))
}
