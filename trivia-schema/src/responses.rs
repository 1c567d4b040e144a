//! Success bodies for the listing and mutation routes.

use serde::{Deserialize, Serialize};

use crate::question::Question;

/// `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

/// `GET /questions?page=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Size of the whole collection, not of this page. The wire name contains a space.
    #[serde(rename = "total questions")]
    pub total_questions: usize,
    pub categories: Vec<String>,
}

/// `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always `null`; search spans every category.
    pub current_category: Option<String>,
}

/// `GET /categories/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}
