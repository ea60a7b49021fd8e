//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントのレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ## 使用例
///
/// ```
/// use mergeq_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("2026-01-01T00:00:00.000Z", 12.5);
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（常に `"healthy"`）
    pub status:    String,
    /// 応答時刻（ISO 8601、UTC、ミリ秒精度）
    pub timestamp: String,
    /// プロセス起動からの経過秒数
    pub uptime:    f64,
}

impl HealthResponse {
    pub fn healthy(timestamp: impl Into<String>, uptime: f64) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: timestamp.into(),
            uptime,
        }
    }
}
