//! 대출 상환 계산 모듈 모음.

pub mod amortization;

pub use amortization::*;
