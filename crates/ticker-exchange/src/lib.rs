//! HitBTC 공개 API 연동 및 통화 집계.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - MarketData trait: 시장 데이터 조회 인터페이스
//! - HitBTC 커넥터 (공개 REST API)
//! - 통화 집계기: 티커 + 메타데이터 병합, 지원 심볼 검증
//! - WebSocket 구독 알림기 (요청 단위 fire-and-forget)

pub mod aggregator;
pub mod connector;
pub mod error;
pub mod subscription;
pub mod traits;

pub use aggregator::CurrencyAggregator;
pub use connector::{HitBtcClient, HitBtcConfig};
pub use error::*;
pub use subscription::{SubscriptionNotifier, SubscriptionParams};
pub use traits::MarketData;
