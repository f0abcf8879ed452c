pub mod add;
pub mod cafes;
pub mod delete;
pub mod health;
pub mod home;

pub use add::{add_cafe, add_form};
pub use cafes::list_cafes;
pub use delete::delete_cafe;
pub use health::health_check;
pub use home::home;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::constants::CAFES_ROUTE;
use crate::AppState;

/// Build the application router with all routes attached
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_cafe))
        .route("/cafes", get(list_cafes))
        .route("/delete/:cafe_name", get(delete_cafe))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 302 Found pointing at the café list
pub(crate) fn redirect_to_cafes() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, CAFES_ROUTE)]).into_response()
}
