//! Holiday Calendar API 模块 (全局，非门店级)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/holidays", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).put(handler::replace_all))
}
