use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::error::Result;
use crate::routes::redirect_to_cafes;
use crate::AppState;

/// Delete a café by name
///
/// No confirmation and no existence check: the redirect to the list happens
/// whether or not a row matched. Store failures still surface as an error page.
pub async fn delete_cafe(
    State(state): State<AppState>,
    Path(cafe_name): Path<String>,
) -> Result<Response> {
    state.store.delete_by_name(&cafe_name).await?;

    Ok(redirect_to_cafes())
}
