//! 통화 스냅샷 도메인 모델.
//!
//! 이 모듈은 원격 거래소 페이로드와 통합 응답 레코드를 정의합니다:
//! - `CurrencyRecord` - 티커와 메타데이터를 병합한 통합 출력 엔티티
//! - `TickerSnapshot` - 원본 티커 페이로드 (요청 단위 임시 값)
//! - `CurrencyMetadata` - 원본 통화 메타데이터 페이로드

use serde::{Deserialize, Serialize};

/// 티커 스냅샷과 통화 메타데이터를 병합한 통합 통화 레코드.
///
/// 요청마다 새로 구성되며, 구성 이후에는 변경되지 않습니다.
/// JSON 필드명은 기존 API 소비자와의 호환을 위해 유지합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// 기준 통화 코드 (심볼의 앞 3글자)
    pub id: String,
    /// 통화 전체 이름 (예: "Bitcoin")
    pub full_name: String,
    /// 매도 호가
    pub ask: String,
    /// 매수 호가
    pub bid: String,
    /// 최근 체결가
    pub last: String,
    /// 시가
    pub open: String,
    /// 저가
    pub low: String,
    /// 고가
    pub high: String,
    /// 호가/수수료 통화 코드
    #[serde(rename = "currency")]
    pub fee_currency: String,
}

/// 거래소 티커 엔드포인트의 원본 페이로드.
///
/// 본문이 기대한 JSON이 아니면 모든 필드가 빈 문자열인 기본값으로
/// 대체됩니다 (관대한 디코딩). 하나의 조회 호출에만 사용되는 임시 값입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TickerSnapshot {
    /// 매도 호가
    pub ask: String,
    /// 매수 호가
    pub bid: String,
    /// 최근 체결가
    pub last: String,
    /// 시가
    pub open: String,
    /// 저가
    pub low: String,
    /// 고가
    pub high: String,
    /// 수수료 통화
    #[serde(rename = "currency")]
    pub fee_currency: String,
    /// 기준 통화 거래량
    pub volume: String,
    /// 호가 통화 거래량
    #[serde(rename = "volume_quote")]
    pub quote_volume: String,
    /// 스냅샷 시각
    pub timestamp: String,
}

/// 거래소 통화 엔드포인트의 원본 페이로드.
///
/// 전체 이름만 사용하고 나머지 원격 필드는 무시합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyMetadata {
    /// 통화 전체 이름
    pub full_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_record_json_field_names() {
        let record = CurrencyRecord {
            id: "BTC".to_string(),
            full_name: "Bitcoin".to_string(),
            ask: "50000".to_string(),
            bid: "49990".to_string(),
            last: "49995".to_string(),
            open: "49000".to_string(),
            low: "48500".to_string(),
            high: "50500".to_string(),
            fee_currency: "USD".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();

        // 기존 소비자가 의존하는 필드명 유지
        assert!(json.contains(r#""id":"BTC""#));
        assert!(json.contains(r#""full_name":"Bitcoin""#));
        assert!(json.contains(r#""currency":"USD""#));
        assert!(!json.contains("fee_currency"));
    }

    #[test]
    fn test_ticker_snapshot_decodes_partial_body() {
        // 누락된 필드는 기본값으로 채운다
        let snapshot: TickerSnapshot =
            serde_json::from_str(r#"{"ask":"0.054","bid":"0.053"}"#).unwrap();

        assert_eq!(snapshot.ask, "0.054");
        assert_eq!(snapshot.bid, "0.053");
        assert_eq!(snapshot.last, "");
        assert_eq!(snapshot.timestamp, "");
    }

    #[test]
    fn test_ticker_snapshot_default_is_zero_valued() {
        let snapshot = TickerSnapshot::default();
        assert_eq!(snapshot.ask, "");
        assert_eq!(snapshot.volume, "");
    }

    #[test]
    fn test_currency_metadata_ignores_unknown_fields() {
        let metadata: CurrencyMetadata = serde_json::from_str(
            r#"{"full_name":"Ethereum","payin_enabled":true,"precision_payout":9}"#,
        )
        .unwrap();

        assert_eq!(metadata.full_name, "Ethereum");
    }
}
