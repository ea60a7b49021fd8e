//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 形式
//!
//! ```json
//! { "error": "Not found", "message": "Route /unknown-route not found" }
//! ```
//!
//! - `error`: エラーの概要。400 系ではクライアントが修正すべき内容をそのまま記述する
//! - `message`: 補足情報。404 / 500 のみ付与し、400 系では省略する
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、文言のハードコードを排除

use serde::{Deserialize, Serialize};

/// 500 応答の固定メッセージ（内部情報を漏らさないため）
const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            error: error.into(),
            message,
        }
    }

    /// 400 Bad Request
    ///
    /// `error` に検証失敗の内容を記述し、`message` は付与しない。
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(error, None)
    }

    /// 404 Not Found
    ///
    /// `original_url` はリクエストのパスとクエリ文字列。
    pub fn not_found(original_url: &str) -> Self {
        Self::new("Not found", Some(format!("Route {original_url} not found")))
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値。
    pub fn internal_error() -> Self {
        Self::new(
            "Internal server error",
            Some(INTERNAL_ERROR_MESSAGE.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bad_request_はmessageを持たない() {
        let error = ErrorResponse::bad_request("Invalid number: abc");

        assert_eq!(error.error, "Invalid number: abc");
        assert_eq!(error.message, None);
    }

    #[test]
    fn test_not_found_はルートをmessageに含める() {
        let error = ErrorResponse::not_found("/unknown-route?x=1");

        assert_eq!(error.error, "Not found");
        assert_eq!(
            error.message.as_deref(),
            Some("Route /unknown-route?x=1 not found")
        );
    }

    #[test]
    fn test_internal_error_は固定messageを返す() {
        let error = ErrorResponse::internal_error();

        assert_eq!(error.error, "Internal server error");
        assert_eq!(error.message.as_deref(), Some("Something went wrong!"));
    }

    #[test]
    fn test_jsonシリアライズでmessage未設定時はフィールドを省略する() {
        let json = serde_json::to_value(ErrorResponse::bad_request("bad")).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "bad" }));
    }

    #[test]
    fn test_jsonシリアライズでmessage設定時はフィールドを含める() {
        let json = serde_json::to_value(ErrorResponse::not_found("/x")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "error": "Not found", "message": "Route /x not found" })
        );
    }

    #[test]
    fn test_jsonデシリアライズでmessage省略を許容する() {
        let error: ErrorResponse = serde_json::from_str(r#"{"error": "bad"}"#).unwrap();

        assert_eq!(error, ErrorResponse::bad_request("bad"));
    }
}
