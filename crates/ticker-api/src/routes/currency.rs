//! 통화 조회 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /currency/all` - 지원 심볼 전체를 선언 순서대로 조회
//! - `GET /currency/{symbol}` - 단일 심볼 조회
//!
//! 두 핸들러 모두 응답 경로와 분리된 WebSocket 구독 핸드셰이크를
//! 부수 효과로 실행합니다.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use ticker_core::CurrencyRecord;
use ticker_exchange::ExchangeError;
use tracing::error;

use crate::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 통화 라우터 생성.
pub fn currency_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/all", get(get_all_currencies))
        .route("/{symbol}", get(get_currency))
}

/// 구독 핸드셰이크를 별도 태스크로 분리해 실행합니다.
///
/// 실행 결과는 알림기 내부에서 로그로만 남고 응답에는 반영되지 않습니다.
fn fire_subscription(state: &AppState) {
    let notifier = state.notifier.clone();
    tokio::spawn(async move {
        notifier.notify().await;
    });
}

/// 집계 에러를 404 응답으로 변환합니다.
///
/// 지원하지 않는 심볼과 원격 장애 모두 404이지만 에러 본문은 구분합니다.
fn to_not_found(e: &ExchangeError) -> (StatusCode, Json<ApiErrorResponse>) {
    let response = if e.is_user_error() {
        ApiErrorResponse::simple("SYMBOL_NOT_FOUND", "Can't find crypto")
    } else {
        ApiErrorResponse::simple("EXCHANGE_UNAVAILABLE", "HitBTC server cannot be connected")
    };
    (StatusCode::NOT_FOUND, Json(response))
}

/// 지원 심볼 전체 조회.
///
/// GET /currency/all
pub async fn get_all_currencies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CurrencyRecord>>> {
    fire_subscription(&state);

    let records = state.aggregator.list_all().await.map_err(|e| {
        error!(error = %e, "Failed to aggregate supported symbols");
        to_not_found(&e)
    })?;

    Ok(Json(records))
}

/// 단일 심볼 조회.
///
/// GET /currency/{symbol}
pub async fn get_currency(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<CurrencyRecord>> {
    fire_subscription(&state);

    let record = state.aggregator.resolve(&symbol).await.map_err(|e| {
        error!(symbol = %symbol, error = %e, "Failed to resolve currency");
        to_not_found(&e)
    })?;

    Ok(Json(record))
}
