//! TTL(Title/Tax/License) 수수료 계산 모듈 모음.

pub mod county_table;
pub mod ttl;

pub use county_table::*;
pub use ttl::*;
