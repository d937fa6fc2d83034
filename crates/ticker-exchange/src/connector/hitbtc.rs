//! HitBTC 거래소 커넥터.
//!
//! HitBTC 공개 REST API(v3)에 대한 조회 구현.
//! 인증이 필요 없는 공개 엔드포인트만 사용합니다.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use ticker_core::{CurrencyMetadata, TickerSnapshot};
use tracing::{debug, warn};

use crate::error::{ExchangeError, ExchangeResult};
use crate::traits::MarketData;

// ============================================================================
// 설정
// ============================================================================

/// HitBTC 클라이언트 설정.
#[derive(Debug, Clone)]
pub struct HitBtcConfig {
    /// REST API 기본 URL
    pub rest_base_url: String,
    /// 공개 WebSocket URL
    pub ws_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for HitBtcConfig {
    fn default() -> Self {
        Self {
            rest_base_url: "https://api.hitbtc.com/api/3".to_string(),
            ws_url: "wss://api.hitbtc.com/api/3/ws/public".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HitBtcConfig {
    /// REST 기본 URL을 교체한 설정 (테스트 서버용).
    pub fn with_rest_base_url(mut self, url: impl Into<String>) -> Self {
        self.rest_base_url = url.into();
        self
    }

    /// WebSocket URL을 교체한 설정 (테스트 서버용).
    pub fn with_ws_url(mut self, url: impl Into<String>) -> Self {
        self.ws_url = url.into();
        self
    }
}

// ============================================================================
// HitBTC 클라이언트
// ============================================================================

/// HitBTC 공개 API 클라이언트.
pub struct HitBtcClient {
    config: HitBtcConfig,
    client: Client,
}

impl HitBtcClient {
    /// 새 HitBTC 클라이언트 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `ExchangeError::NetworkError`를 반환합니다.
    pub fn new(config: HitBtcConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ExchangeError::NetworkError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// 공개 API 요청 (인증 불필요).
    ///
    /// 전송 실패는 에러로 반환합니다. 본문이 기대한 JSON이 아니면
    /// (원격 에러 응답 포함) 기본값 페이로드로 대체합니다.
    async fn public_get<T>(&self, path: &str) -> ExchangeResult<T>
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        let url = format!("{}{}", self.config.rest_base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ExchangeError::NetworkError(e.to_string()))?;

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!(path, error = %e, "Failed to parse response body, using defaults");
            T::default()
        }))
    }
}

#[async_trait]
impl MarketData for HitBtcClient {
    async fn get_ticker(&self, symbol: &str) -> ExchangeResult<TickerSnapshot> {
        self.public_get(&format!("/public/ticker/{}", symbol)).await
    }

    async fn get_currency(&self, code: &str) -> ExchangeResult<CurrencyMetadata> {
        self.public_get(&format!("/public/currency/{}", code)).await
    }
}
