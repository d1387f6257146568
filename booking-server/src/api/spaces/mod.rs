//! Space Pricing API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/spaces", get(handler::list))
        .route(
            "/api/spaces/{space_type}",
            get(handler::get_by_type).put(handler::upsert),
        )
}
