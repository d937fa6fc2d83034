//! 거래 심볼 정의 및 분해 규칙.
//!
//! 이 모듈은 심볼 관련 타입과 규칙을 정의합니다:
//! - `SUPPORTED_SYMBOLS` - 서비스가 지원하는 고정 심볼 목록
//! - `SymbolParts` - 심볼에서 분해된 기준/호가 통화 코드
//! - `split_symbol` - 고정 폭 슬라이스 기반 분해 규칙

/// 서비스가 지원하는 거래 심볼.
///
/// 닫힌 고정 목록이며, 선언 순서가 전체 조회의 응답 순서입니다.
/// WebSocket 구독 심볼 목록도 여기서 파생됩니다.
pub const SUPPORTED_SYMBOLS: [&str; 2] = ["BTCUSDT", "ETHBTC"];

/// 호가 통화를 4~6번째 글자로 잘라내는 특수 심볼.
///
/// 일반 규칙(마지막 3글자)을 따르지 않는 유일한 심볼입니다.
/// 규칙은 정확한 문자열 일치로만 적용하며 다른 심볼로 일반화하지 않습니다.
const MID_SLICE_QUOTE_SYMBOL: &str = "BTCUSDT";

/// 심볼에서 분해된 기준/호가 통화 코드.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParts {
    /// 기준 통화 코드 (예: BTC, ETH)
    pub base: String,
    /// 호가/수수료 통화 코드 (예: USD, BTC)
    pub quote: String,
}

/// 심볼이 지원 목록에 있는지 확인합니다.
pub fn is_supported(symbol: &str) -> bool {
    SUPPORTED_SYMBOLS.contains(&symbol)
}

/// 심볼을 기준/호가 통화 코드로 분해합니다.
///
/// 기준 통화는 항상 앞 3글자입니다. 호가 통화는 `BTCUSDT`에 한해
/// 4~6번째 글자를 사용하고, 그 외에는 마지막 3글자를 사용합니다.
///
/// 6글자 미만이거나 ASCII가 아닌 심볼은 슬라이스 전에 걸러져
/// `None`을 반환합니다.
pub fn split_symbol(symbol: &str) -> Option<SymbolParts> {
    if symbol.len() < 6 || !symbol.is_ascii() {
        return None;
    }

    let base = symbol[..3].to_string();
    let quote = if symbol == MID_SLICE_QUOTE_SYMBOL {
        symbol[3..6].to_string()
    } else {
        symbol[symbol.len() - 3..].to_string()
    };

    Some(SymbolParts { base, quote })
}
