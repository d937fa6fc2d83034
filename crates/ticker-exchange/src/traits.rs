//! 시장 데이터 조회 인터페이스.

use async_trait::async_trait;
use ticker_core::{CurrencyMetadata, TickerSnapshot};

use crate::error::ExchangeResult;

/// 거래소 공개 시세 조회 인터페이스.
///
/// 집계기는 이 trait을 통해서만 원격 데이터에 접근하므로
/// 테스트에서 가짜 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// 심볼 하나의 티커 스냅샷을 조회합니다.
    async fn get_ticker(&self, symbol: &str) -> ExchangeResult<TickerSnapshot>;

    /// 기준 통화 코드의 메타데이터를 조회합니다.
    async fn get_currency(&self, code: &str) -> ExchangeResult<CurrencyMetadata>;
}
