use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::constants::ERR_STORE_UNAVAILABLE;
use crate::error::Result;
use crate::AppState;

/// List every café in the store's natural order
///
/// An unreachable store renders the page with an empty table and an inline
/// notice (503) instead of failing the request.
pub async fn list_cafes(State(state): State<AppState>) -> Result<Response> {
    match state.store.list_all().await {
        Ok(cafes) => {
            let body = state.views.cafes(&cafes, None)?;
            Ok(Html(body).into_response())
        }
        Err(e) => {
            tracing::warn!("Showing empty cafe list: {}", e);
            let body = state.views.cafes(&[], Some(ERR_STORE_UNAVAILABLE))?;
            Ok((StatusCode::SERVICE_UNAVAILABLE, Html(body)).into_response())
        }
    }
}
