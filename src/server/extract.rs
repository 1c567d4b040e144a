//! Extractors that turn axum's rejections into the trivia error envelope.

use crate::error::TriviaError;
use crate::quiz::PageNumber;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{Deserialize, de::DeserializeOwned};

/// `Json<T>` whose rejection is a `TriviaError::Validation` (400 envelope).
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Path<T>` whose rejection is a `TriviaError::Validation` (400 envelope).
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<i64>,
}

/// `?page=N` for paginated listings.
///
/// Missing `page` means the first page; `0`, negatives and non-integers are rejected.
pub struct PageQuery(pub PageNumber);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state).await?;
        let page = params
            .page
            .map(PageNumber::try_from)
            .transpose()?
            .unwrap_or_default();
        Ok(Self(page))
    }
}
