//! Question records plus the request bodies that carry them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A stored trivia question, as returned by every listing route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i64,
}

/// Body of `POST /questions`.
///
/// Every field is optional at the serde level so that a missing field can be reported by name
/// instead of as an opaque parse failure. `category` and `difficulty` accept either a JSON integer
/// or a numeric string, since form-driven clients tend to post select values as strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_opt_i64_lax")]
    pub category: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_opt_i64_lax")]
    pub difficulty: Option<i64>,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term", default)]
    pub search_term: Option<String>,
}

pub(crate) fn deserialize_opt_i64_lax<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    match v {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected an integer")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("expected an integer or a numeric string")),
        _ => Err(serde::de::Error::custom(
            "expected an integer or a numeric string",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_numeric_strings() {
        let raw = r#"{"question":"Q?","answer":"A","category":"4","difficulty":3}"#;
        let req: CreateQuestionRequest = serde_json::from_str(raw).expect("parse create request");
        assert_eq!(req.question.as_deref(), Some("Q?"));
        assert_eq!(req.category, Some(4));
        assert_eq!(req.difficulty, Some(3));
    }

    #[test]
    fn create_request_leaves_missing_fields_empty() {
        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"answer":"A"}"#).expect("parse partial request");
        assert!(req.question.is_none());
        assert!(req.category.is_none());
        assert!(req.difficulty.is_none());
    }

    #[test]
    fn create_request_rejects_non_numeric_category() {
        let raw = r#"{"question":"Q?","answer":"A","category":"science","difficulty":1}"#;
        assert!(serde_json::from_str::<CreateQuestionRequest>(raw).is_err());

        let raw = r#"{"question":"Q?","answer":"A","category":1.5,"difficulty":1}"#;
        assert!(serde_json::from_str::<CreateQuestionRequest>(raw).is_err());
    }
}
