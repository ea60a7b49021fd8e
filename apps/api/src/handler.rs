//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証と演算はドメイン層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `index`: API 概要（`GET /`）
//! - `health`: ヘルスチェック（`GET /health`）
//! - `calculate`: 集約演算（`POST /api/calculate`, `/api/sum`, `/api/product`）
//! - `fallback`: 未定義ルート（404）

pub mod calculate;
pub mod fallback;
pub mod health;
pub mod index;

pub use calculate::{CalculationResponse, calculate, product, sum};
pub use fallback::not_found;
pub use health::{HealthState, health_check};
pub use index::{IndexResponse, index};
