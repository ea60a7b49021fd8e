//! # Clock（時刻プロバイダ）
//!
//! ヘルスチェックが返すタイムスタンプを、テストで固定時刻に差し替えるための抽象化。

use chrono::{DateTime, SecondsFormat, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// 現在時刻を ISO 8601（UTC、ミリ秒精度、`Z` 終端）で返す
    ///
    /// 例: `2026-01-01T00:00:00.000Z`
    fn now_iso8601(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
