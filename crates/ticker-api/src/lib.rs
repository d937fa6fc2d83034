//! # Ticker API
//!
//! 통화 시세 REST API 서버 라이브러리.
//!
//! 라우트, 공유 상태, 통합 에러 응답 타입을 제공합니다.

pub mod error;
pub mod routes;
pub mod state;
