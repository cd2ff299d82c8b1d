//! Regular Hours API 模块

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stores/{store_id}/hours/regular", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_week).put(handler::replace_week))
        .route("/{day_of_week}", put(handler::update_day))
}
