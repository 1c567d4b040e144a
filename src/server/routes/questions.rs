use crate::db::QuestionCreate;
use crate::error::TriviaError;
use crate::quiz::{QUESTIONS_PER_PAGE, paginate};
use crate::server::extract::{ApiJson, ApiPath, PageQuery};
use crate::server::router::TriviaState;
use axum::{Json, extract::State};
use std::ops::RangeInclusive;
use trivia_schema::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, Question, QuestionPageResponse,
    SearchRequest, SearchResponse,
};
use tracing::{debug, info};

const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=5;

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<TriviaState>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionPageResponse>, TriviaError> {
    let all = state.db.list_questions().await?;
    let window = paginate(&all, page, QUESTIONS_PER_PAGE);

    if window.is_empty() {
        return Err(TriviaError::NotFound(format!(
            "page {} starts at {} but only {} questions exist",
            page.get(),
            window.start,
            all.len()
        )));
    }

    let questions: Vec<Question> = window.items.iter().cloned().map(Question::from).collect();
    let categories = state
        .db
        .list_categories()
        .await?
        .into_iter()
        .map(|c| c.label)
        .collect();

    Ok(Json(QuestionPageResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<TriviaState>,
    ApiJson(body): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, TriviaError> {
    let create = validate_create(body)?;
    let category = create.category;
    let id = state.db.create_question(create).await?;

    info!(question.id = id, question.category = category, "Question created");
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeletedResponse>, TriviaError> {
    if !state.db.delete_question(id).await? {
        return Err(TriviaError::NotFound(format!("question {id}")));
    }

    info!(question.id = id, "Question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /search
///
/// Case-insensitive substring match on the question text. No match is an empty list, not a 404.
pub async fn search_questions(
    State(state): State<TriviaState>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, TriviaError> {
    let Some(term) = body.search_term else {
        return Err(TriviaError::Validation(
            "missing field `searchTerm`".to_string(),
        ));
    };

    let questions: Vec<Question> = state
        .db
        .search_questions(term.clone())
        .await?
        .into_iter()
        .map(Question::from)
        .collect();

    debug!(search.term = %term, total = questions.len(), "Searched questions");

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

fn required_text(value: Option<String>, field: &str) -> Result<String, TriviaError> {
    let value = value.ok_or_else(|| TriviaError::Validation(format!("missing field `{field}`")))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TriviaError::Validation(format!("field `{field}` is blank")));
    }
    Ok(trimmed.to_string())
}

fn validate_create(body: CreateQuestionRequest) -> Result<QuestionCreate, TriviaError> {
    let question = required_text(body.question, "question")?;
    let answer = required_text(body.answer, "answer")?;
    let category = body
        .category
        .ok_or_else(|| TriviaError::Validation("missing field `category`".to_string()))?;
    let difficulty = body
        .difficulty
        .ok_or_else(|| TriviaError::Validation("missing field `difficulty`".to_string()))?;

    if !DIFFICULTY_RANGE.contains(&difficulty) {
        return Err(TriviaError::Validation(format!(
            "difficulty must be between {} and {}, got {difficulty}",
            DIFFICULTY_RANGE.start(),
            DIFFICULTY_RANGE.end()
        )));
    }

    Ok(QuestionCreate {
        question,
        answer,
        category,
        difficulty,
    })
}
