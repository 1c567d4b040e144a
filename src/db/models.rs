use sqlx::FromRow;
use trivia_schema::Question;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbCategory {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub label: String,
}

/// Insert payload for a new question. Validation happens before this is built.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<DbQuestion> for Question {
    fn from(row: DbQuestion) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}
