//! # アプリケーション構築
//!
//! State の組み立てとルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! 結合テストからも同じルーターを使うため、ライブラリ側に置いている。

use std::{any::Any, sync::Arc};

use axum::{
    Router,
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use mergeq_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    error::ApiError,
    handler::{HealthState, calculate, health_check, index, not_found, product, sum},
    middleware::security_headers,
};

/// ルーターを構築する
///
/// 未定義ルートとメソッド不一致はどちらも 404 を返す。
pub fn build_app(health_state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(health_state)
        .route("/", get(index))
        .route("/api/calculate", post(calculate))
        .route("/api/sum", post(sum))
        .route("/api/product", post(product))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        // レイヤー順序（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むリクエストスパンを作成
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力（スパン内）
        // 5. CatchPanicLayer: ハンドラの panic を 500 に変換
        // 6. CorsLayer: 全オリジンを許可、プリフライトに応答
        // 7. security_headers: セキュリティヘッダーを付与
        .layer(from_fn(security_headers))
        .layer(cors_layer())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

/// panic を内部エラーとして 500 応答に変換する
///
/// panic メッセージはログにのみ出力する。
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("ハンドラで panic が発生しました: {detail}")).into_response()
}
