//! # Merge Queue Demo ドメイン層
//!
//! 入力値の検証と数値列の集約演算を担う。HTTP やシリアライズ形式には依存しない
//! 純粋な関数のみで構成され、並行に呼び出しても共有状態を持たない。
//!
//! ## 処理の流れ
//!
//! ```text
//! JSON 値 ──▶ NumericInput ──▶ Validator ──▶ Reducer ──▶ f64
//!             (numeric)        (numeric)     (reducer / operation)
//! ```
//!
//! Validator は他のモジュールに依存せず、Reducer は Validator のみに依存する。
//!
//! ## モジュール構成
//!
//! - [`numeric`] - 型不明の入力値と Validator
//! - [`reducer`] - 総和・総乗・平均・最大・最小
//! - [`operation`] - API から指定可能な演算種別
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`clock`] - 時刻プロバイダ
//!
//! ## 使用例
//!
//! ```rust
//! use mergeq_domain::{NumericInput, Operation};
//! use serde_json::json;
//!
//! let numbers = NumericInput::from(json!([2, 3, 4]));
//! let operation: Operation = "product".parse()?;
//!
//! assert_eq!(operation.apply_to(&numbers)?, 24.0);
//! # Ok::<(), mergeq_domain::DomainError>(())
//! ```

pub mod clock;
pub mod error;
pub mod numeric;
pub mod operation;
pub mod reducer;

pub use error::DomainError;
pub use numeric::{NumericInput, is_valid_number};
pub use operation::Operation;
