//! # API 概要ハンドラ
//!
//! `GET /` で API 名・バージョン・エンドポイント一覧を返す。

use axum::Json;
use serde::Serialize;

/// エンドポイント一覧
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub health:    &'static str,
    pub calculate: &'static str,
    pub sum:       &'static str,
    pub product:   &'static str,
}

/// `GET /` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexResponse {
    pub message:   &'static str,
    pub version:   &'static str,
    pub endpoints: Endpoints,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            message:   "Welcome to the Merge Queue Demo API!",
            version:   env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                health:    "/health",
                calculate: "/api/calculate",
                sum:       "/api/sum",
                product:   "/api/product",
            },
        }
    }
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::default())
}
