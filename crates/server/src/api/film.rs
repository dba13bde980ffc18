//! Film lookup endpoint

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::api::AppState;
use crate::error::{ApiError, ApiResult};
use crate::orchestrator::FilmDetail;

/// GET /film/{title}
///
/// Case-insensitive exact title match against the catalog. A miss is a
/// plain 404, not a server error.
pub async fn film_detail(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<FilmDetail>> {
    state
        .service
        .lookup_film(&title)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no film titled {:?}", title)))
}

/// Build film lookup routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/film/:title", get(film_detail))
}
