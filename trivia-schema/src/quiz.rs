//! Quiz round request/response bodies.

use serde::{Deserialize, Serialize};

use crate::question::{Question, deserialize_opt_i64_lax};

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizRequest {
    /// Ids already served in this round. The client grows this list; the server never stores it.
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category filter for a quiz round.
///
/// Accepts a bare id (`3`) or the object a category picker sends (`{"type": "Art", "id": 2}`).
/// Id `0` means "all categories".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(i64),
    Labeled {
        #[serde(default, deserialize_with = "deserialize_opt_i64_lax")]
        id: Option<i64>,
        #[serde(default)]
        r#type: Option<String>,
    },
}

impl QuizCategory {
    /// The category to filter by, or `None` for the whole question pool.
    pub fn category_id(&self) -> Option<i64> {
        let id = match self {
            QuizCategory::Id(id) => Some(*id),
            QuizCategory::Labeled { id, .. } => *id,
        };
        id.filter(|id| *id != 0)
    }
}

impl QuizRequest {
    pub fn category_id(&self) -> Option<i64> {
        self.quiz_category
            .as_ref()
            .and_then(QuizCategory::category_id)
    }
}

/// `question` is `null` once every eligible question has been served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
