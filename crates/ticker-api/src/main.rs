//! 통화 시세 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 지원 심볼의 티커/메타데이터 통합 조회 엔드포인트를 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{Method, StatusCode};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use ticker_api::routes::create_api_router;
use ticker_api::state::AppState;
use ticker_core::{init_logging, LogConfig, SUPPORTED_SYMBOLS};
use ticker_exchange::{
    CurrencyAggregator, HitBtcClient, HitBtcConfig, SubscriptionNotifier, SubscriptionParams,
};

/// 서버 설정 구조체.
struct ServerConfig {
    /// 바인딩할 호스트 주소
    host: String,
    /// 바인딩할 포트
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// 환경 변수에서 설정 로드.
    fn from_env() -> Self {
        let host = std::env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// CORS 미들웨어 구성.
///
/// 공개 읽기 전용 API이므로 모든 origin의 GET 요청을 허용합니다.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET])
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 (30초) - 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // tracing 초기화
    init_logging(&LogConfig::from_env())?;

    info!("Starting ticker API server...");

    // 설정 로드
    let config = ServerConfig::from_env();
    let addr = config.socket_addr().map_err(|e| {
        error!(
            host = %config.host,
            port = config.port,
            error = %e,
            "Invalid socket address, check API_HOST and API_PORT"
        );
        e
    })?;

    // HitBTC 클라이언트 및 집계기 생성
    let exchange_config = HitBtcConfig::default();
    let ws_url = exchange_config.ws_url.clone();
    let client = HitBtcClient::new(exchange_config)?;
    let aggregator = CurrencyAggregator::new(Arc::new(client));

    // 구독 파라미터는 시작 시 한 번 구성되고 이후 변경되지 않는다
    let params = SubscriptionParams {
        symbols: SUPPORTED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
    };
    let notifier = SubscriptionNotifier::new(ws_url, params);

    let state = Arc::new(AppState::new(aggregator, notifier));
    let app = create_router(state);

    info!(%addr, "API server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
