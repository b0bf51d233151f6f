pub mod actor;
pub mod company;
pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the server root.
///
/// ```text
/// /movies                 list, create
/// /movies/{id}            get, update, delete
/// /directors              list, create
/// /directors/{id}         get, update, delete
/// /actors                 list, create
/// /actors/{id}            get, update, delete
/// /companies              list, create
/// /companies/{id}         get, update, delete
/// /genres                 list, create
/// /genres/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/directors", director::router())
        .nest("/actors", actor::router())
        .nest("/companies", company::router())
        .nest("/genres", genre::router())
}
