//! # ヘルスチェックハンドラ
//!
//! `GET /health` — Liveness Check。常に `"healthy"` を返す。
//!
//! レスポンス型は [`mergeq_shared::HealthResponse`] を参照。

use std::{sync::Arc, time::Instant};

use axum::{Json, extract::State};
use mergeq_domain::clock::Clock;
use mergeq_shared::HealthResponse;

/// ヘルスチェック用の State
pub struct HealthState {
    /// タイムスタンプの取得元
    pub clock:      Arc<dyn Clock>,
    /// プロセス起動時刻（uptime の基準）
    pub started_at: Instant,
}

impl HealthState {
    pub fn new(clock: Arc<dyn Clock>, started_at: Instant) -> Self {
        Self { clock, started_at }
    }
}

pub async fn health_check(State(state): State<Arc<HealthState>>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        state.clock.now_iso8601(),
        state.started_at.elapsed().as_secs_f64(),
    ))
}
