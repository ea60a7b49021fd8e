//! # 未定義ルートのハンドラ
//!
//! ルーターの `fallback` と `method_not_allowed_fallback` の両方に登録し、
//! どちらも 404 を返す。

use axum::http::Uri;

use crate::error::ApiError;

/// 404 Not Found を返す
///
/// `message` にはパスとクエリ文字列をそのまま含める。
pub async fn not_found(uri: Uri) -> ApiError {
    let original_url = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    ApiError::NotFound(original_url)
}
