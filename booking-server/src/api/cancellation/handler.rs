//! Cancellation Fee Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use pricing_engine::{plan_cancellation, validate_cancellation_context};
use serde::{Deserialize, Serialize};
use shared::models::{BookingStatus, CancellationContext, CancellationFeeResult};

use crate::core::ServerState;
use crate::utils::AppResult;

/// 取消费用计算请求
///
/// 预订记录不在本服务中，调用方传入计算所需的字段。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationFeeRequest {
    pub deposit_amount: f64,
    pub booking_date: NaiveDate,
    /// 默认今天 (服务器本地时区)
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
    pub has_payment_intent: bool,
    #[serde(default)]
    pub is_pending: bool,
    /// 管理员选择不扣款
    #[serde(default)]
    pub skip_capture: bool,
    /// 当前预订状态，传入时校验状态流转
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl CancellationFeeRequest {
    fn context(&self) -> CancellationContext {
        CancellationContext {
            deposit_amount: self.deposit_amount,
            booking_date: self.booking_date,
            evaluation_date: self.evaluation_date.unwrap_or_else(shared::util::today),
            has_payment_intent: self.has_payment_intent,
            is_pending: self.is_pending,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationFeeResponse {
    pub reservation_id: String,
    #[serde(flatten)]
    pub fees: CancellationFeeResult,
}

/// POST /api/booking/reservations/:id/calculate-cancellation-fees
pub async fn calculate_fees(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CancellationFeeRequest>,
) -> AppResult<Json<CancellationFeeResponse>> {
    let ctx = payload.context();

    let fees = match payload.status {
        Some(status) => plan_cancellation(status, &ctx, payload.skip_capture, &state.cancellation)?,
        None => {
            validate_cancellation_context(&ctx)?;
            if payload.skip_capture {
                state.cancellation.compute_waived(&ctx)
            } else {
                state.cancellation.compute(&ctx)
            }
        }
    };

    tracing::debug!(
        reservation_id = %id,
        outcome = ?fees.outcome,
        fee = fees.cancellation_fee,
        "Cancellation fees calculated"
    );

    Ok(Json(CancellationFeeResponse {
        reservation_id: id,
        fees,
    }))
}
