mod health;
mod lists;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health` — service health and database connectivity
/// - `/list` — game list management (create, browse, update, delete)
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/list", lists::router())
}
