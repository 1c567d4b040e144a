//! Pure quiz logic: page windows over question lists and the next-question picker.
//!
//! Nothing in here touches the store or the HTTP layer; handlers fetch the rows and hand them over.

pub mod pagination;
pub mod rng;
pub mod selector;

pub use pagination::{PageNumber, PageWindow, PaginationError, QUESTIONS_PER_PAGE, paginate};
pub use rng::QuizRng;
pub use selector::select_next;
