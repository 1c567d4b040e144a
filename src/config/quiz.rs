use serde::{Deserialize, Serialize};

/// Quiz round configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    /// Fixed seed for the question picker, for reproducible rounds.
    /// TOML: `quiz.seed`. Default: unset (seeded from OS entropy).
    #[serde(default)]
    pub seed: Option<u64>,
}
