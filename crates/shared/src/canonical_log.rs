//! # Canonical Log Line ミドルウェア
//!
//! HTTP リクエスト完了時に、そのリクエストの重要情報を1行に集約した
//! サマリログ（Canonical Log Line）を出力する tower Layer。
//! アクセスログの役割もこの1行が担う。
//!
//! ## 既存 TraceLayer との責務分離
//!
//! - TraceLayer: スパン作成（method, uri, request_id）。リクエストスコープのコンテキスト管理
//! - CanonicalLogLineLayer: リクエスト完了サマリ（method, path, status, latency）
//!
//! TraceLayer のスパン内に配置することで、スパンフィールド（request_id）が
//! JSON ログに自動的に含まれる。
//!
//! ## ログレベル
//!
//! | 結果 | レベル |
//! |------|--------|
//! | 5xx 以外のレスポンス | INFO |
//! | 5xx レスポンス | ERROR |
//! | Service エラー | ERROR |

use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Method, Request, Response};
use tower::{Layer, Service};

/// ヘルスチェックパスかどうかを判定する
fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// 1リクエスト分のサマリ
///
/// リクエスト受信時に作成し、レスポンス確定時に [`record`](Self::record) で出力する。
#[derive(Debug)]
struct RequestSummary {
    method:  Method,
    path:    String,
    started: Instant,
}

impl RequestSummary {
    /// サマリ対象のリクエストであれば記録を開始する
    fn begin<B>(request: &Request<B>) -> Option<Self> {
        let path = request.uri().path();
        if is_health_check_path(path) {
            return None;
        }

        Some(Self {
            method:  request.method().clone(),
            path:    path.to_owned(),
            started: Instant::now(),
        })
    }

    fn latency_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn record<B, E: Display>(&self, outcome: &Result<Response<B>, E>) {
        let latency_ms = self.latency_ms();
        let (method, path) = (&self.method, self.path.as_str());

        match outcome {
            Ok(response) if response.status().is_server_error() => tracing::error!(
                log.r#type = "canonical",
                http.method = %method,
                http.path = path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了（サーバーエラー）"
            ),
            Ok(response) => tracing::info!(
                log.r#type = "canonical",
                http.method = %method,
                http.path = path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了"
            ),
            Err(err) => tracing::error!(
                log.r#type = "canonical",
                http.method = %method,
                http.path = path,
                http.latency_ms = latency_ms,
                error.message = %err,
                "リクエスト処理エラー"
            ),
        }
    }
}

/// Canonical Log Line を出力する Layer
///
/// ヘルスチェックパスは出力対象外。
///
/// ```text
/// TraceLayer → CanonicalLogLineLayer → [他のミドルウェア] → handler
/// ```
#[derive(Clone, Debug)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service 実装
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let summary = RequestSummary::begin(&req);

        // poll_ready 済みの inner で呼び出し、self には新しい clone を残す
        let clone = self.inner.clone();
        let ready = std::mem::replace(&mut self.inner, clone);
        let future = { ready }.call(req);

        Box::pin(async move {
            let outcome = future.await;
            if let Some(summary) = summary {
                summary.record(&outcome);
            }
            outcome
        })
    }
}
