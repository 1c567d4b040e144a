pub mod config;
pub mod db;
pub mod error;
pub mod quiz;
pub mod server;

pub use error::TriviaError;
