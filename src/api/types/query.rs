//! Custom query-string extractor that returns errors as JSON

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Query extractor that converts rejections into the API error format
///
/// A missing required parameter yields `422` with `{"error": "..."}` instead
/// of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

/// Query rejection error that returns API error format
#[derive(Debug)]
pub struct QueryRejection {
    message: String,
}

impl IntoResponse for QueryRejection {
    fn into_response(self) -> Response {
        ApiError::unprocessable(self.message).into_response()
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Query(value)),
            Err(rejection) => Err(QueryRejection {
                message: format_rejection_message(&rejection),
            }),
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::QueryRejection) -> String {
    use axum::extract::rejection::QueryRejection::*;

    match rejection {
        FailedToDeserializeQueryString(err) => err.body_text(),
        _ => "Invalid query string".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        team_name: String,
    }

    async fn extract(uri: &str) -> Result<Query<Params>, QueryRejection> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        Query::<Params>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_query_extracts_params() {
        let Query(params) = extract("/register_team?team_name=Red%20Bull").await.unwrap();
        assert_eq!(params.team_name, "Red Bull");
    }

    #[tokio::test]
    async fn test_query_accepts_empty_value() {
        let Query(params) = extract("/register_team?team_name=").await.unwrap();
        assert_eq!(params.team_name, "");
    }

    #[tokio::test]
    async fn test_query_missing_param() {
        let rejection = extract("/register_team").await.unwrap_err();
        assert!(rejection.message.contains("team_name"));

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
