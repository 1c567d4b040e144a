//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `categories` table (read-only from the API, seeded below)
/// - `questions` table (one trivia question per row, optional category reference)
///
/// Statements are split on `;` when applied, so string literals must not contain one.
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Categories
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY NOT NULL,
    type TEXT NOT NULL UNIQUE
);

-- ---------------------------------------------------------------------------
-- Questions
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY NOT NULL,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NULL REFERENCES categories(id) ON DELETE SET NULL,
    difficulty INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);

-- ---------------------------------------------------------------------------
-- Seed categories
-- ---------------------------------------------------------------------------
INSERT OR IGNORE INTO categories (id, type) VALUES
    (1, 'Science'),
    (2, 'Art'),
    (3, 'Geography'),
    (4, 'History'),
    (5, 'Entertainment'),
    (6, 'Sports');
"#;
