//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.
//! 지원 심볼 목록과 구독 파라미터는 시작 시 한 번 구성되는
//! 읽기 전용 값이므로 별도의 잠금이 필요 없습니다.

use std::sync::Arc;

use ticker_exchange::{CurrencyAggregator, SubscriptionNotifier};

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 통화 집계기 - 티커/메타데이터 병합 및 심볼 검증
    pub aggregator: Arc<CurrencyAggregator>,

    /// WebSocket 구독 알림기 - 요청 단위 fire-and-forget 핸드셰이크
    pub notifier: Arc<SubscriptionNotifier>,
}

impl AppState {
    /// 새 애플리케이션 상태 생성.
    pub fn new(aggregator: CurrencyAggregator, notifier: SubscriptionNotifier) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            notifier: Arc::new(notifier),
        }
    }
}
