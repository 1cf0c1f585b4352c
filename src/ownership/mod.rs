//! 총 보유 비용(TCO) 계산 모듈 모음.

pub mod tco;

pub use tco::*;
