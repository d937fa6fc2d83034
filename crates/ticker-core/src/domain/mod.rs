//! 통화 시세 서비스의 도메인 모델.

mod currency;

pub use currency::*;
