//! Price Calculation Handlers

use axum::{Json, extract::State};
use pricing_engine::{price_for_persistence, price_reservation};
use serde::{Deserialize, Serialize};
use shared::models::{PriceResult, ReservationRequest};

use crate::core::ServerState;
use crate::utils::AppResult;

/// 提交请求: 预约参数 + 客户端预览的价格
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPriceRequest {
    #[serde(flatten)]
    pub reservation: ReservationRequest,
    /// 报价空间不传
    #[serde(default)]
    pub submitted_price: Option<f64>,
}

/// 提交结果: 需要持久化的金额
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPriceResponse {
    pub space_type: String,
    /// `None` 表示报价空间，金额由管理员后续填写
    pub amount: Option<f64>,
    pub quote_required: bool,
}

/// POST /api/calculate-price - 价格预览
///
/// 未知空间返回 `configMissing`，报价空间返回 `quoteRequired`，都不是 0。
pub async fn preview(
    State(state): State<ServerState>,
    Json(req): Json<ReservationRequest>,
) -> Json<PriceResult> {
    let config = state.catalog.get(&req.space_type);
    Json(price_reservation(config.as_ref(), &req))
}

/// POST /api/calculate-price/submit - 提交校验
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<SubmitPriceRequest>,
) -> AppResult<Json<SubmitPriceResponse>> {
    let req = payload.reservation;
    let config = state.catalog.get(&req.space_type);
    let amount = price_for_persistence(config.as_ref(), &req, payload.submitted_price)?;

    Ok(Json(SubmitPriceResponse {
        space_type: req.space_type,
        amount,
        quote_required: amount.is_none(),
    }))
}
