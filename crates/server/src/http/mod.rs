//! HTTP routes for player records.

mod error;
mod handlers;
mod params;

pub use error::ApiError;
pub use params::PlayerQuery;

use axum::Router;
use axum::routing::get;
use roster_runtime::PlayerService;

/// Create the HTTP router with all player routes.
///
/// Routes are nested under `prefix` unless it is empty or `/`.
pub fn router(service: PlayerService, prefix: &str) -> Router {
    let players = Router::new()
        .route(
            "/players",
            get(handlers::list_players).post(handlers::create_player),
        )
        .route("/players/count", get(handlers::count_players))
        .route(
            "/players/:id",
            get(handlers::get_player)
                .post(handlers::update_player)
                .delete(handlers::delete_player),
        )
        .with_state(service);

    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return players;
    }

    let prefix = if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{prefix}")
    };
    Router::new().nest(&prefix, players)
}
