pub mod extract;
pub mod router;
pub mod routes;

pub use router::{TriviaState, panic_response, trivia_router};
