//! Effective Hours API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stores/{store_id}/hours/effective", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::get))
}
