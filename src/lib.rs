pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;

/// The full application router with its state attached.
pub fn app(state: state::AppState) -> Router {
    routes::routes().with_state(state)
}
