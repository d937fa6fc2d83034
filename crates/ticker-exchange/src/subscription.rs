//! WebSocket 구독 알림.
//!
//! 요청마다 일회성 WebSocket 연결을 열어 구독 메시지를 보내고
//! 서버 프레임 하나를 읽은 뒤 연결을 닫습니다. 결과는 로그로만 남기며
//! REST 응답 경로에는 어떤 영향도 주지 않습니다.

use futures::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::protocol::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::{debug, info, warn};

use crate::error::{ExchangeError, ExchangeResult};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// 구독 대상 채널.
const SUBSCRIPTION_CHANNEL: &str = "orderbook/top/1000ms";

/// 구독 요청 id. 응답과 상관시키지 않는 fire-and-forget 값.
const SUBSCRIPTION_REQUEST_ID: u64 = 123;

// ============================================================================
// 구독 메시지 타입
// ============================================================================

/// 구독 요청 파라미터.
///
/// 프로세스 시작 시 한 번 구성되고 이후 변경되지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionParams {
    /// 구독할 심볼 목록
    pub symbols: Vec<String>,
}

/// 구독 요청 메시지.
#[derive(Debug, Serialize)]
struct SubscribeMessage<'a> {
    method: &'a str,
    ch: &'a str,
    params: &'a SubscriptionParams,
    id: u64,
}

// ============================================================================
// 구독 알림기
// ============================================================================

/// 요청 단위 WebSocket 구독 알림기.
///
/// 상태 흐름: 연결 → 구독 전송 → 프레임 1개 수신 → 종료.
/// 어느 단계에서 실패하든 연결은 해제되고 에러는 로그로만 남습니다.
pub struct SubscriptionNotifier {
    ws_url: String,
    params: SubscriptionParams,
}

impl SubscriptionNotifier {
    /// 새 구독 알림기 생성.
    pub fn new(ws_url: impl Into<String>, params: SubscriptionParams) -> Self {
        Self {
            ws_url: ws_url.into(),
            params,
        }
    }

    /// 구독 핸드셰이크를 수행합니다.
    ///
    /// 호출자는 결과를 검사하지 않습니다. 실패는 여기서 로그로 소화되고
    /// 집계 경로의 결과에는 영향을 주지 않습니다.
    pub async fn notify(&self) {
        if let Err(e) = self.run_handshake().await {
            warn!(error = %e, "Subscription handshake failed");
        }
    }

    /// 연결 수립과 해제를 포함한 핸드셰이크 전체.
    async fn run_handshake(&self) -> ExchangeResult<()> {
        debug!("Connecting to WebSocket: {}", self.ws_url);

        let (mut ws, _) = connect_async(&self.ws_url)
            .await
            .map_err(|e| ExchangeError::WebSocket(e.to_string()))?;
        info!("WebSocket connected");

        let result = self.subscribe_and_read(&mut ws).await;

        // 성공/실패 모든 경로에서 연결을 닫는다
        if let Err(e) = ws.close(None).await {
            debug!(error = %e, "WebSocket close failed");
        }

        result
    }

    /// 구독 메시지 전송 후 서버 프레임 하나를 대기합니다.
    async fn subscribe_and_read(&self, ws: &mut WsStream) -> ExchangeResult<()> {
        let msg = SubscribeMessage {
            method: "subscribe",
            ch: SUBSCRIPTION_CHANNEL,
            params: &self.params,
            id: SUBSCRIPTION_REQUEST_ID,
        };

        let json =
            serde_json::to_string(&msg).map_err(|e| ExchangeError::ParseError(e.to_string()))?;

        ws.send(Message::Text(json.into()))
            .await
            .map_err(|e| ExchangeError::WebSocket(e.to_string()))?;
        debug!(symbols = ?self.params.symbols, "Subscription request sent");

        match ws.next().await {
            Some(Ok(frame)) => {
                info!(len = frame.len(), "Received first server frame");
                Ok(())
            }
            Some(Err(e)) => Err(ExchangeError::WebSocket(e.to_string())),
            None => Err(ExchangeError::WebSocket(
                "connection closed before first frame".to_string(),
            )),
        }
    }
}
