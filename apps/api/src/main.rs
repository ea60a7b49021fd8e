//! # Merge Queue Demo API サーバー
//!
//! 数値列の総和・総乗を計算する HTTP API のエントリーポイント。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,mergeq=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p mergeq-api
//!
//! # 本番環境
//! PORT=8080 LOG_FORMAT=json cargo run -p mergeq-api --release
//! ```

use std::{sync::Arc, time::Instant};

use anyhow::Context as _;
use mergeq_api::{app_builder::build_app, config::ApiConfig, handler::HealthState};
use mergeq_domain::clock::SystemClock;
use mergeq_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "mergeq-api";

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動（SIGINT / SIGTERM で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();

    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env(SERVICE_NAME);
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    let health_state = Arc::new(HealthState::new(Arc::new(SystemClock), started_at));
    let app = build_app(health_state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
    let addr = listener.local_addr()?;
    tracing::info!("API サーバーが起動しました: {}", addr);
    tracing::info!("ヘルスチェック: http://localhost:{}/health", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API サーバーを停止しました");
    Ok(())
}

/// SIGINT（Ctrl-C）または SIGTERM を待つ
///
/// ハンドラの登録に失敗したシグナルは待機対象から外す。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("シャットダウンシグナルを受信しました。処理中のリクエストの完了を待機します");
}
