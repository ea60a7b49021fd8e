//! # ミドルウェア
//!
//! API サーバー用のミドルウェアを提供する。

mod security_headers;

pub use security_headers::security_headers;
