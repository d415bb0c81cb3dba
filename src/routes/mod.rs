use axum::{
    routing::{post, put},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod tasks;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let task_router = Router::new()
        .route("/", post(tasks::routes::create).get(tasks::routes::list))
        .route(
            "/{task_id}",
            put(tasks::routes::update).delete(tasks::routes::delete),
        );

    Router::new()
        .nest("/tasks", task_router)
        .layer(TraceLayer::new_for_http())
}
