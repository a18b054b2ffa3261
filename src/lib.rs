// 模組定義
pub mod config;
pub mod domain_types;
pub mod filter;
pub mod timezone;
