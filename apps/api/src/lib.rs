//! # Merge Queue Demo API サーバー
//!
//! 数値列の総和・総乗を計算する HTTP API。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/` | API 概要 |
//! | GET | `/health` | ヘルスチェック |
//! | POST | `/api/calculate` | `{ operation, numbers }` の演算 |
//! | POST | `/api/sum` | `{ numbers }` の総和 |
//! | POST | `/api/product` | `{ numbers }` の総乗 |
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの組み立て
//! - [`config`] - サーバー設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`middleware`] - セキュリティヘッダー等のミドルウェア
//!
//! ## 依存関係
//!
//! - `mergeq_domain`: 入力値の検証と集約演算
//! - `mergeq_shared`: レスポンス型、トレーシング、Canonical Log Line

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
