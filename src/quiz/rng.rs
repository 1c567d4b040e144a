use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use trivia_schema::Question;

use super::select_next;

/// Shared entropy for quiz rounds.
///
/// Cloning shares the same generator. The lock is only held for the draw itself, never across an
/// `.await`.
#[derive(Clone)]
pub struct QuizRng {
    inner: Arc<Mutex<StdRng>>,
}

impl QuizRng {
    /// Seeded generator when `seed` is set, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn pick(&self, pool: &[Question], previously_served: &HashSet<i64>) -> Option<Question> {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        select_next(pool, previously_served, &mut *rng).cloned()
    }
}
