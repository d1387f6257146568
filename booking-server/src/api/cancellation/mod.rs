//! Cancellation Fee API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/booking/reservations/{id}/calculate-cancellation-fees",
        post(handler::calculate_fees),
    )
}
