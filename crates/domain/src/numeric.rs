//! # 数値入力と Validator
//!
//! HTTP 境界で受け取った型不明の値を表現し、計算に使える数値かどうかを判定する。
//!
//! ## 設計判断
//!
//! JSON の値は暗黙に数値へ変換しない。受信した値はまず [`NumericInput`] の
//! いずれかのバリアントに写し、パターンマッチで数値かどうかを絞り込む。
//! これにより `"5"` や `true` が数値として扱われることはない。
//!
//! ## 使用例
//!
//! ```rust
//! use mergeq_domain::numeric::{NumericInput, is_valid_number};
//! use serde_json::json;
//!
//! let value = NumericInput::from(json!(3.5));
//! assert!(is_valid_number(&value));
//!
//! let value = NumericInput::from(json!("3.5"));
//! assert!(!is_valid_number(&value));
//! ```

use std::fmt;

use serde_json::Value;

/// 安全に整数として表現できる上限（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// 型不明の入力値
///
/// JSON の値と一対一に対応するタグ付きバリアント。
/// `Number` は NaN や無限大も保持できるため、ライブラリとして直接呼び出す場合も
/// Validator による検査が必要になる。
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    String(String),
    Bool(bool),
    Array(Vec<NumericInput>),
    Object,
    Null,
}

impl NumericInput {
    /// 計算に使える有限の数値であれば、その値を返す
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// 配列であれば要素のスライスを返す
    pub fn as_array(&self) -> Option<&[NumericInput]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Validator: 値が計算に使える数値かどうかを判定する
///
/// 数値型であり、NaN でなく、有限（±∞ でない）の場合のみ `true` を返す。
/// 副作用もエラーもない全域関数。
pub fn is_valid_number(value: &NumericInput) -> bool {
    value.as_finite().is_some()
}

impl From<&Value> for NumericInput {
    fn from(value: &Value) -> Self {
        match value {
            // arbitrary_precision 無効時は常に Some。表現できない値は NaN として不正扱いにする
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s.clone()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Object(_) => Self::Object,
            Value::Null => Self::Null,
        }
    }
}

impl From<Value> for NumericInput {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<f64>> for NumericInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values.into_iter().map(Self::Number).collect())
    }
}

impl fmt::Display for NumericInput {
    /// エラーメッセージ用の文字列表現
    ///
    /// 配列は要素をカンマで連結し、オブジェクトは `[object Object]` と表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // 配列内の null は空文字として連結される
                    if *item != Self::Null {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object => f.write_str("[object Object]"),
            Self::Null => f.write_str("null"),
        }
    }
}

/// 数値を人間可読な文字列に変換する
///
/// 整数値は小数点なし（`15`）、それ以外は最短表現（`0.25`）で出力する。
/// NaN と無限大はそれぞれ `NaN` / `Infinity` / `-Infinity` になる。
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if is_safe_integer(n) {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// 計算結果を JSON の数値に変換する
///
/// 整数値は JSON 整数（`15`）、それ以外の有限値は浮動小数点数として出力する。
/// オーバーフローで有限でなくなった値は `null` になる。
pub fn number_to_json(n: f64) -> Value {
    if is_safe_integer(n) {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

fn is_safe_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    // ===== Validator テスト =====

    #[rstest]
    #[case(5.0)]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(2.75)]
    #[case(f64::MAX)]
    #[case(f64::MIN_POSITIVE)]
    fn test_有限の数値は有効と判定される(#[case] n: f64) {
        assert!(is_valid_number(&NumericInput::Number(n)));
    }

    #[rstest]
    #[case(NumericInput::Number(f64::NAN), "NaN")]
    #[case(NumericInput::Number(f64::INFINITY), "正の無限大")]
    #[case(NumericInput::Number(f64::NEG_INFINITY), "負の無限大")]
    #[case(NumericInput::String("5".to_string()), "数字の文字列")]
    #[case(NumericInput::Bool(true), "真偽値")]
    #[case(NumericInput::Null, "null")]
    #[case(NumericInput::Object, "オブジェクト")]
    #[case(NumericInput::Array(vec![]), "空配列")]
    fn test_数値以外と非有限値は無効と判定される(
        #[case] value: NumericInput,
        #[case] _description: &str,
    ) {
        assert!(!is_valid_number(&value));
    }

    // ===== JSON からの変換テスト =====

    #[test]
    fn test_json値は対応するバリアントに変換される() {
        let value = NumericInput::from(json!([1, "a", true, null, {"k": 1}, [2.5]]));

        assert_eq!(
            value,
            NumericInput::Array(vec![
                NumericInput::Number(1.0),
                NumericInput::String("a".to_string()),
                NumericInput::Bool(true),
                NumericInput::Null,
                NumericInput::Object,
                NumericInput::Array(vec![NumericInput::Number(2.5)]),
            ])
        );
    }

    #[test]
    fn test_数字の文字列は数値に変換されない() {
        let value = NumericInput::from(json!("42"));
        assert_eq!(value.as_finite(), None);
    }

    // ===== Display テスト =====

    #[rstest]
    #[case(NumericInput::Number(3.0), "3")]
    #[case(NumericInput::Number(-10.0), "-10")]
    #[case(NumericInput::Number(2.75), "2.75")]
    #[case(NumericInput::Number(f64::NAN), "NaN")]
    #[case(NumericInput::Number(f64::INFINITY), "Infinity")]
    #[case(NumericInput::Number(f64::NEG_INFINITY), "-Infinity")]
    #[case(NumericInput::String("invalid".to_string()), "invalid")]
    #[case(NumericInput::Bool(false), "false")]
    #[case(NumericInput::Null, "null")]
    #[case(NumericInput::Object, "[object Object]")]
    #[case(NumericInput::from(vec![1.0, 2.5]), "1,2.5")]
    #[case(NumericInput::Array(vec![NumericInput::Null, NumericInput::Number(1.0)]), ",1")]
    fn test_表示文字列(#[case] value: NumericInput, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    // ===== number_to_json テスト =====

    #[test]
    fn test_整数値はjson整数になる() {
        assert_eq!(number_to_json(15.0), json!(15));
        assert_eq!(number_to_json(-0.0), json!(0));
    }

    #[test]
    fn test_小数値はjson浮動小数点数になる() {
        assert_eq!(number_to_json(0.25), json!(0.25));
    }

    #[test]
    fn test_非有限値はnullになる() {
        assert_eq!(number_to_json(f64::INFINITY), Value::Null);
        assert_eq!(number_to_json(f64::NAN), Value::Null);
    }
}
