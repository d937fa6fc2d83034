//! 통화 레코드 집계.
//!
//! 티커 스냅샷과 통화 메타데이터를 하나의 통합 레코드로 병합하고,
//! 심볼이 지원 목록에 있는지 검증합니다.

use std::sync::Arc;

use ticker_core::{is_supported, split_symbol, CurrencyRecord, SUPPORTED_SYMBOLS};
use tracing::{debug, warn};

use crate::error::{ExchangeError, ExchangeResult};
use crate::traits::MarketData;

/// 통화 집계기.
///
/// 원격 조회는 `MarketData` trait을 통해서만 수행합니다.
pub struct CurrencyAggregator {
    market: Arc<dyn MarketData>,
}

impl CurrencyAggregator {
    /// 새 집계기 생성.
    pub fn new(market: Arc<dyn MarketData>) -> Self {
        Self { market }
    }

    /// 심볼 하나를 통합 통화 레코드로 집계합니다.
    ///
    /// 순서: 티커 조회 → 메타데이터 조회(앞 3글자) → 심볼 분해 →
    /// 레코드 구성 → 지원 목록 검증.
    ///
    /// 지원 목록 검증은 원격 호출과 레코드 구성 이후에 수행됩니다.
    /// 지원하지 않는 심볼도 원격 조회까지는 진행되며, 마지막 멤버십
    /// 검사에서 레코드가 버려집니다. 거부 여부는 원격 호출 성공과
    /// 무관하게 멤버십만으로 결정됩니다.
    ///
    /// # Errors
    /// - 6글자 미만이거나 ASCII가 아닌 심볼: 슬라이스 전에
    ///   `SymbolNotFound`로 거부
    /// - 원격 전송 실패: `NetworkError`
    /// - 지원 목록에 없는 심볼: `SymbolNotFound`
    pub async fn resolve(&self, symbol: &str) -> ExchangeResult<CurrencyRecord> {
        let Some(parts) = split_symbol(symbol) else {
            warn!(symbol, "Malformed symbol rejected before slicing");
            return Err(ExchangeError::SymbolNotFound(symbol.to_string()));
        };

        let ticker = self.market.get_ticker(symbol).await?;
        let metadata = self.market.get_currency(&parts.base).await?;

        let record = CurrencyRecord {
            id: parts.base,
            full_name: metadata.full_name,
            ask: ticker.ask,
            bid: ticker.bid,
            last: ticker.last,
            open: ticker.open,
            low: ticker.low,
            high: ticker.high,
            fee_currency: parts.quote,
        };

        if !is_supported(symbol) {
            warn!(symbol, "Symbol not in supported set");
            return Err(ExchangeError::SymbolNotFound(symbol.to_string()));
        }

        debug!(symbol, id = %record.id, "Currency record aggregated");
        Ok(record)
    }

    /// 지원 심볼 전체를 선언 순서대로 집계합니다.
    ///
    /// 순차 실행이며 병렬 조회는 하지 않습니다. 하나라도 실패하면
    /// 첫 에러를 그대로 반환하고 부분 결과는 버립니다.
    pub async fn list_all(&self) -> ExchangeResult<Vec<CurrencyRecord>> {
        let mut records = Vec::with_capacity(SUPPORTED_SYMBOLS.len());

        for symbol in SUPPORTED_SYMBOLS {
            records.push(self.resolve(symbol).await?);
        }

        Ok(records)
    }
}
