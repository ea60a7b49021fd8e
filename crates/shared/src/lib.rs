//! # Merge Queue Demo 共有ユーティリティ
//!
//! API クレートから使用される共通の型とミドルウェアを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（HTTP 変換は API クレートの責務）
//! - tracing 初期化と tower ミドルウェアは `observability` feature で有効化する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
