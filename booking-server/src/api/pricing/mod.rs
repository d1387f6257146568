//! Price Calculation API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/calculate-price | POST | 价格预览 (宽松校验) |
//! | /api/calculate-price/submit | POST | 提交前重新计算并比对客户端价格 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/calculate-price", post(handler::preview))
        .route("/api/calculate-price/submit", post(handler::submit))
}
