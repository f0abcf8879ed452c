use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};

use crate::constants::ERR_DUPLICATE_CAFE;
use crate::db::StoreError;
use crate::error::Result;
use crate::forms::{validate, CafeForm};
use crate::routes::redirect_to_cafes;
use crate::security::{issue_csrf_token, verify_csrf_token};
use crate::views::AddFormView;
use crate::AppState;

fn render_form(state: &AppState, status: StatusCode, view: AddFormView<'_>) -> Result<Response> {
    let token = issue_csrf_token(&state.config.secret_key);
    let body = state.views.add_form(&view, &token)?;
    Ok((status, Html(body)).into_response())
}

/// Render the empty submission form
pub async fn add_form(State(state): State<AppState>) -> Result<Response> {
    render_form(&state, StatusCode::OK, AddFormView::default())
}

/// Validate a submission and insert it
///
/// Storage is only touched once the anti-forgery token and every field pass.
/// A duplicate name or location re-renders the form instead of redirecting.
pub async fn add_cafe(
    State(state): State<AppState>,
    Form(form): Form<CafeForm>,
) -> Result<Response> {
    if let Err(e) = verify_csrf_token(
        &form.csrf_token,
        &state.config.secret_key,
        state.config.csrf_time_limit_secs,
    ) {
        tracing::warn!("Rejected cafe submission: {}", e.message());
        let view = AddFormView {
            values: Some(&form),
            failure: None,
            form_error: Some(e.message()),
        };
        return render_form(&state, StatusCode::BAD_REQUEST, view);
    }

    let record = match validate(&form) {
        Ok(record) => record,
        Err(failure) => {
            tracing::debug!("{}: {:?}", failure, failure.errors);
            let view = AddFormView {
                values: Some(&form),
                failure: Some(&failure),
                form_error: None,
            };
            return render_form(&state, StatusCode::OK, view);
        }
    };

    match state.store.insert(&record).await {
        Ok(()) => Ok(redirect_to_cafes()),
        Err(StoreError::ConstraintViolation { .. }) => {
            let view = AddFormView {
                values: Some(&form),
                failure: None,
                form_error: Some(ERR_DUPLICATE_CAFE),
            };
            render_form(&state, StatusCode::OK, view)
        }
        Err(e) => Err(e.into()),
    }
}
