use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::*;

use crate::language::resolve_language;
use crate::AppState;

#[derive(Deserialize)]
pub(crate) struct TextQuery {
    #[serde(default)]
    text: String,
}

pub(crate) async fn correct_text_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TextQuery>,
) -> Response {
    correct(&state, &headers, &query.text).await
}

pub(crate) async fn correct_text_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    correct(&state, &headers, &body).await
}

async fn correct(state: &AppState, headers: &HeaderMap, text: &str) -> Response {
    let tag = match headers.get(header::CONTENT_LANGUAGE) {
        Some(value) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
        None => String::new(),
    };
    let (language, echo) = match resolve_language(&tag) {
        Ok(resolved) => resolved,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    let echo_header = [(header::CONTENT_LANGUAGE, echo.to_string())];

    match state
        .corrector
        .correct(&state.api_key, language, text)
        .await
    {
        Ok(corrected) => (echo_header, corrected).into_response(),
        Err(err) => {
            error!("error correcting grammar: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                echo_header,
                "error correcting grammar",
            )
                .into_response()
        }
    }
}
