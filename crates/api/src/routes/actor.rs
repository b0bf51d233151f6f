//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list).post(actor::create))
        .route(
            "/{id}",
            get(actor::get_by_id).put(actor::update).delete(actor::delete),
        )
}
