//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/currency/all` - 지원 심볼 전체 조회
//! - `/currency/{symbol}` - 단일 심볼 조회

pub mod currency;
pub mod health;

pub use currency::currency_router;
pub use health::health_router;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .nest("/currency", currency_router())
}
