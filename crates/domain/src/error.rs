//! # ドメイン層エラー定義
//!
//! 入力の検証失敗や集約演算の失敗を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換可能
//!
//! エラーメッセージはそのままクライアントへ返すため、英語の固定文言とする。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `InvalidInput` | 400 Bad Request | 入力が配列ではない |
//! | `InvalidElement` | 400 Bad Request | 配列要素が有限の数値ではない |
//! | `UnsupportedOperation` | 400 Bad Request | 未対応の演算種別 |
//! | `EmptyInput` | 400 Bad Request | 空配列に対する平均・最大・最小 |
//!
//! ## 使用例
//!
//! ```rust
//! use mergeq_domain::{DomainError, NumericInput};
//!
//! let error = DomainError::InvalidElement(NumericInput::String("abc".to_string()));
//! assert_eq!(error.to_string(), "Invalid number: abc");
//! ```

use thiserror::Error;

use crate::numeric::NumericInput;

/// ドメイン層で発生するエラー
///
/// 集約演算の実行中、または演算種別の解釈中に発生する失敗を表現する。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// 入力が数値列（配列）ではない
    #[error("Input must be an array")]
    InvalidInput,

    /// 配列要素が有限の数値ではない
    ///
    /// 最初に見つかった不正な要素をそのまま保持する。
    #[error("Invalid number: {0}")]
    InvalidElement(NumericInput),

    /// 空配列に対して単位元を持たない演算を実行した
    ///
    /// `action` には `"calculate average"` のような演算の説明が入る。
    #[error("Cannot {action} of empty array")]
    EmptyInput {
        /// 実行しようとした演算の説明
        action: &'static str,
    },

    /// 未対応の演算種別
    #[error("Invalid operation. Supported operations: sum, product")]
    UnsupportedOperation(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_invalid_elementのメッセージに不正な値が含まれる() {
        let error = DomainError::InvalidElement(NumericInput::Number(f64::NAN));
        assert_eq!(error.to_string(), "Invalid number: NaN");
    }

    #[test]
    fn test_empty_inputのメッセージに演算の説明が含まれる() {
        let error = DomainError::EmptyInput {
            action: "find max",
        };
        assert_eq!(error.to_string(), "Cannot find max of empty array");
    }

    #[test]
    fn test_unsupported_operationのメッセージは対応演算を列挙する() {
        let error = DomainError::UnsupportedOperation("divide".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid operation. Supported operations: sum, product"
        );
    }
}
