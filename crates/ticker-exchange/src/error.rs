//! 거래소 연동 에러 타입.

use thiserror::Error;

/// 거래소 연동 관련 에러.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// 네트워크/전송 계층 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 지원하지 않거나 형식이 잘못된 심볼
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// 직렬화/역직렬화 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// WebSocket 에러
    #[error("WebSocket error: {0}")]
    WebSocket(String),
}

impl ExchangeError {
    /// 사용자 입력 문제로 발생한 에러인지 확인.
    ///
    /// HTTP 계층에서 원격 장애와 구분해 응답 메시지를 고를 때 사용합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ExchangeError::SymbolNotFound(_))
    }
}

/// 거래소 작업 Result 타입.
pub type ExchangeResult<T> = Result<T, ExchangeError>;
