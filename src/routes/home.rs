use axum::{extract::State, response::Html};

use crate::error::Result;
use crate::AppState;

/// Static landing page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.views.home()?))
}
