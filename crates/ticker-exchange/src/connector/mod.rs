//! 거래소 커넥터.

mod hitbtc;

pub use hitbtc::{HitBtcClient, HitBtcConfig};
