//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (DomainError)
//!        ↓ From
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + ErrorResponse JSON)
//! ```
//!
//! ## マッピング
//!
//! | ApiError | HTTP Status | body |
//! |----------|-------------|------|
//! | MalformedRequest | 400 | `{ error }` |
//! | Domain | 400 | `{ error }` |
//! | NotFound | 404 | `{ error, message }` |
//! | Internal | 500 | `{ error, message }`（固定文言） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mergeq_domain::DomainError;
use mergeq_shared::ErrorResponse;
use thiserror::Error;

/// `/api/calculate` のリクエスト形状エラー
pub const CALCULATE_SHAPE_ERROR: &str =
    r#"Invalid request. Expected { operation: "sum" | "product", numbers: number[] }"#;

/// `/api/sum`, `/api/product` のリクエスト形状エラー
pub const NUMBERS_SHAPE_ERROR: &str = "Invalid request. Expected { numbers: number[] }";

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストボディの形状が不正（400 Bad Request）
    #[error("{0}")]
    MalformedRequest(&'static str),

    /// 入力値の検証・演算で発生したエラー（400 Bad Request）
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// ルートが存在しない（404 Not Found）
    ///
    /// パスとクエリ文字列を保持する。
    #[error("ルートが見つかりません: {0}")]
    NotFound(String),

    /// 内部サーバーエラー（500 Internal Server Error）
    ///
    /// 詳細はログにのみ出力し、クライアントには固定文言を返す。
    #[error("内部サーバーエラー")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MalformedRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            ApiError::Domain(err) => {
                tracing::debug!(error = %err, "入力値の検証に失敗しました");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::bad_request(err.to_string()),
                )
            }
            ApiError::NotFound(original_url) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(&original_url),
            ),
            ApiError::Internal(err) => {
                tracing::error!("内部エラー: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
