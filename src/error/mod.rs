mod trivia;

pub use trivia::TriviaError;
