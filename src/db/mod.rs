//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL (and category seed) for initializing the database (SQLite-first)
//! - `actor.rs`: the actor that owns the pool and serves every query

pub mod actor;
pub mod models;
pub mod schema;

pub use models::{DbCategory, DbQuestion, QuestionCreate};

pub use actor::{DbActorHandle, spawn};
