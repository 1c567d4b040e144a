pub mod error;
pub mod question;
pub mod quiz;
pub mod responses;

pub use error::ErrorEnvelope;
pub use question::{CreateQuestionRequest, Question, SearchRequest};
pub use quiz::{QuizCategory, QuizRequest, QuizResponse};
pub use responses::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedResponse, DeletedResponse,
    QuestionPageResponse, SearchResponse,
};
