//! # Ticker Core
//!
//! 통화 시세 서비스의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 서비스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 통합 통화 레코드 및 원격 페이로드 구조체
//! - 지원 심볼 목록 및 심볼 분해 규칙
//! - 로깅 인프라

pub mod domain;
pub mod logging;
pub mod types;

pub use domain::*;
pub use logging::*;
pub use types::*;
