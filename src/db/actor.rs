use crate::db::models::{DbCategory, DbQuestion, QuestionCreate};
use crate::db::schema::SQLITE_INIT;
use crate::error::TriviaError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// List every category ordered by id.
    ListCategories(RpcReplyPort<Result<Vec<DbCategory>, TriviaError>>),

    /// Get a category by id (`None` when absent).
    GetCategory(i64, RpcReplyPort<Result<Option<DbCategory>, TriviaError>>),

    /// List questions ordered by id, optionally restricted to one category.
    ListQuestions(
        Option<i64>,
        RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>,
    ),

    /// Case-insensitive literal substring search over question text.
    SearchQuestions(String, RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>),

    /// Insert a question and return its id.
    CreateQuestion(QuestionCreate, RpcReplyPort<Result<i64, TriviaError>>),

    /// Delete a question by id; replies `false` when no row matched.
    DeleteQuestion(i64, RpcReplyPort<Result<bool, TriviaError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn list_categories(&self) -> Result<Vec<DbCategory>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListCategories).map_err(|e| {
            TriviaError::Actor(format!("DbActor ListCategories RPC failed: {e}"))
        })?
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<DbCategory>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::GetCategory, id)
            .map_err(|e| TriviaError::Actor(format!("DbActor GetCategory RPC failed: {e}")))?
    }

    pub async fn list_questions(&self) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListQuestions, None)
            .map_err(|e| TriviaError::Actor(format!("DbActor ListQuestions RPC failed: {e}")))?
    }

    pub async fn list_questions_in_category(
        &self,
        category: i64,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListQuestions, Some(category))
            .map_err(|e| TriviaError::Actor(format!("DbActor ListQuestions RPC failed: {e}")))?
    }

    pub async fn search_questions(&self, term: String) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::SearchQuestions, term).map_err(|e| {
            TriviaError::Actor(format!("DbActor SearchQuestions RPC failed: {e}"))
        })?
    }

    pub async fn create_question(&self, create: QuestionCreate) -> Result<i64, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::CreateQuestion, create).map_err(|e| {
            TriviaError::Actor(format!("DbActor CreateQuestion RPC failed: {e}"))
        })?
    }

    pub async fn delete_question(&self, id: i64) -> Result<bool, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::DeleteQuestion, id).map_err(|e| {
            TriviaError::Actor(format!("DbActor DeleteQuestion RPC failed: {e}"))
        })?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::ListCategories(reply) => {
                let res = self.list_categories(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetCategory(id, reply) => {
                let res = self.get_category(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListQuestions(category, reply) => {
                let res = self.list_questions(&state.pool, category).await;
                let _ = reply.send(res);
            }
            DbActorMessage::SearchQuestions(term, reply) => {
                let res = self.search_questions(&state.pool, &term).await;
                let _ = reply.send(res);
            }
            DbActorMessage::CreateQuestion(create, reply) => {
                let res = self.create_question(&state.pool, create).await;
                let _ = reply.send(res);
            }
            DbActorMessage::DeleteQuestion(id, reply) => {
                let res = self.delete_question(&state.pool, id).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn list_categories(&self, pool: &SqlitePool) -> Result<Vec<DbCategory>, TriviaError> {
        let rows = sqlx::query_as::<_, DbCategory>(
            r#"
        SELECT id, type
        FROM categories
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn get_category(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbCategory>, TriviaError> {
        let row = sqlx::query_as::<_, DbCategory>(
            r#"
        SELECT id, type
        FROM categories
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn list_questions(
        &self,
        pool: &SqlitePool,
        category: Option<i64>,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, DbQuestion>(
                    r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                WHERE category = ?
                ORDER BY id
                "#,
                )
                .bind(category)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DbQuestion>(
                    r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                ORDER BY id
                "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(rows)
    }

    async fn search_questions(
        &self,
        pool: &SqlitePool,
        term: &str,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        // `instr` matches the term literally; LIKE would treat `%` and `_` in user input as wildcards.
        let rows = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE instr(lower(question), lower(?)) > 0
        ORDER BY id
        "#,
        )
        .bind(term)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn create_question(
        &self,
        pool: &SqlitePool,
        create: QuestionCreate,
    ) -> Result<i64, TriviaError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(create.question)
        .bind(create.answer)
        .bind(create.category)
        .bind(create.difficulty)
        .fetch_one(pool)
        .await?;

        debug!(question.id = id, "Question inserted");
        Ok(id)
    }

    async fn delete_question(&self, pool: &SqlitePool, id: i64) -> Result<bool, TriviaError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// The actor is left unnamed so several stores can live in one process (one per test database).
pub async fn spawn(database_url: &str) -> DbActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .expect("failed to spawn DbActor");

    DbActorHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), TriviaError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
