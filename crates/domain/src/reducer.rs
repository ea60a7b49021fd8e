//! # Reducer（集約演算）
//!
//! 数値列を単一のスカラー値へ畳み込む演算を提供する。
//!
//! ## 演算一覧
//!
//! | 関数 | 単位元 / 初期値 | 空配列 |
//! |------|----------------|--------|
//! | [`sum`] | `0` | `0` を返す |
//! | [`product`] | `1` | `1` を返す |
//! | [`average`] | - | `EmptyInput` |
//! | [`max`] | `-∞` | `EmptyInput` |
//! | [`min`] | `+∞` | `EmptyInput` |
//!
//! ## 検証の二重化
//!
//! HTTP 境界でも要素を検証するが、各演算は畳み込みの途中で要素ごとに
//! Validator を再適用する。事前検証なしに直接呼び出しても不正な値で
//! 計算が進むことはなく、最初に見つかった不正な要素で失敗する。
//!
//! ## 使用例
//!
//! ```rust
//! use mergeq_domain::{NumericInput, reducer};
//!
//! let numbers = NumericInput::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let numbers = reducer::as_sequence(&numbers)?;
//!
//! assert_eq!(reducer::sum(numbers)?, 15.0);
//! assert_eq!(reducer::product(numbers)?, 120.0);
//! assert_eq!(reducer::average(numbers)?, 3.0);
//! # Ok::<(), mergeq_domain::DomainError>(())
//! ```

use crate::{DomainError, numeric::NumericInput};

/// 入力を数値列として解釈する
///
/// 配列でない入力は [`DomainError::InvalidInput`] になる。
pub fn as_sequence(input: &NumericInput) -> Result<&[NumericInput], DomainError> {
    input.as_array().ok_or(DomainError::InvalidInput)
}

/// 総和を求める
///
/// 空配列では加法の単位元 `0` を返す。
pub fn sum(numbers: &[NumericInput]) -> Result<f64, DomainError> {
    fold_valid(numbers, 0.0, |acc, n| acc + n)
}

/// 総乗を求める
///
/// 空配列では乗法の単位元 `1` を返す。
pub fn product(numbers: &[NumericInput]) -> Result<f64, DomainError> {
    fold_valid(numbers, 1.0, |acc, n| acc * n)
}

/// 算術平均を求める
pub fn average(numbers: &[NumericInput]) -> Result<f64, DomainError> {
    ensure_not_empty(numbers, "calculate average")?;
    Ok(sum(numbers)? / numbers.len() as f64)
}

/// 最大値を求める
pub fn max(numbers: &[NumericInput]) -> Result<f64, DomainError> {
    ensure_not_empty(numbers, "find max")?;
    fold_valid(numbers, f64::NEG_INFINITY, f64::max)
}

/// 最小値を求める
pub fn min(numbers: &[NumericInput]) -> Result<f64, DomainError> {
    ensure_not_empty(numbers, "find min")?;
    fold_valid(numbers, f64::INFINITY, f64::min)
}

/// 要素を検証しながら左畳み込みする
///
/// 不正な要素に到達した時点で、その要素を保持した
/// [`DomainError::InvalidElement`] を返して打ち切る。
fn fold_valid(
    numbers: &[NumericInput],
    init: f64,
    combine: impl Fn(f64, f64) -> f64,
) -> Result<f64, DomainError> {
    numbers.iter().try_fold(init, |acc, item| {
        item.as_finite()
            .map(|n| combine(acc, n))
            .ok_or_else(|| DomainError::InvalidElement(item.clone()))
    })
}

fn ensure_not_empty(numbers: &[NumericInput], action: &'static str) -> Result<(), DomainError> {
    if numbers.is_empty() {
        return Err(DomainError::EmptyInput { action });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn numbers(values: &[f64]) -> Vec<NumericInput> {
        values.iter().copied().map(NumericInput::Number).collect()
    }

    fn with_invalid(invalid: NumericInput) -> Vec<NumericInput> {
        vec![
            NumericInput::Number(1.0),
            NumericInput::Number(2.0),
            invalid,
            NumericInput::Number(4.0),
        ]
    }

    // ===== as_sequence テスト =====

    #[test]
    fn test_as_sequence_配列は要素のスライスを返す() {
        let input = NumericInput::from(vec![1.0, 2.0]);
        assert_eq!(as_sequence(&input).unwrap(), numbers(&[1.0, 2.0]).as_slice());
    }

    #[rstest]
    #[case(NumericInput::String("not an array".to_string()))]
    #[case(NumericInput::Number(123.0))]
    #[case(NumericInput::Null)]
    #[case(NumericInput::Object)]
    fn test_as_sequence_配列以外はinvalid_inputになる(#[case] input: NumericInput) {
        assert_eq!(as_sequence(&input), Err(DomainError::InvalidInput));
    }

    // ===== sum テスト =====

    #[rstest]
    #[case(&[1.0, 2.0, 3.0, 4.0, 5.0], 15.0)]
    #[case(&[10.0, -5.0, 3.0], 8.0)]
    #[case(&[0.0, 0.0, 0.0], 0.0)]
    #[case(&[42.0], 42.0)]
    #[case(&[1.5, 2.5, 3.0], 7.0)]
    fn test_sum_総和を求める(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(sum(&numbers(values)).unwrap(), expected);
    }

    #[test]
    fn test_sum_空配列は0を返す() {
        assert_eq!(sum(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_小数の誤差は許容範囲に収まる() {
        let result = sum(&numbers(&[0.1, 0.2, 0.3])).unwrap();
        assert!((result - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_sum_不正な要素はinvalid_elementになる() {
        let invalid = NumericInput::String("invalid".to_string());
        let result = sum(&with_invalid(invalid.clone()));

        assert_eq!(result, Err(DomainError::InvalidElement(invalid)));
        assert_eq!(result.unwrap_err().to_string(), "Invalid number: invalid");
    }

    #[test]
    fn test_sum_nanはinvalid_elementになる() {
        let result = sum(&numbers(&[1.0, f64::NAN, 3.0]));
        assert_eq!(result.unwrap_err().to_string(), "Invalid number: NaN");
    }

    #[test]
    fn test_sum_最初の不正な要素が報告される() {
        let values = vec![
            NumericInput::Number(1.0),
            NumericInput::Bool(true),
            NumericInput::Null,
        ];
        assert_eq!(
            sum(&values),
            Err(DomainError::InvalidElement(NumericInput::Bool(true)))
        );
    }

    #[test]
    fn test_sum_順序を入れ替えても結果は同じ() {
        let forward = sum(&numbers(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        let backward = sum(&numbers(&[4.0, 3.0, 2.0, 1.0])).unwrap();
        assert_eq!(forward, backward);
    }

    // ===== product テスト =====

    #[rstest]
    #[case(&[2.0, 3.0, 4.0], 24.0)]
    #[case(&[5.0, -2.0], -10.0)]
    #[case(&[1.0, 1.0, 1.0, 1.0], 1.0)]
    #[case(&[7.0], 7.0)]
    #[case(&[1.0, 2.0, 0.0, 4.0], 0.0)]
    #[case(&[2.5, 4.0], 10.0)]
    #[case(&[0.5, 0.5], 0.25)]
    fn test_product_総乗を求める(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(product(&numbers(values)).unwrap(), expected);
    }

    #[test]
    fn test_product_空配列は1を返す() {
        assert_eq!(product(&[]).unwrap(), 1.0);
    }

    #[test]
    fn test_product_不正な要素はinvalid_elementになる() {
        let invalid = NumericInput::Number(f64::INFINITY);
        assert_eq!(
            product(&with_invalid(invalid.clone())),
            Err(DomainError::InvalidElement(invalid))
        );
    }

    // ===== average テスト =====

    #[rstest]
    #[case(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0)]
    #[case(&[10.0, 20.0], 15.0)]
    #[case(&[100.0], 100.0)]
    #[case(&[1.0, 2.0], 1.5)]
    fn test_average_平均を求める(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(average(&numbers(values)).unwrap(), expected);
    }

    #[test]
    fn test_average_空配列はempty_inputになる() {
        let result = average(&[]);

        assert_eq!(
            result,
            Err(DomainError::EmptyInput {
                action: "calculate average",
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Cannot calculate average of empty array"
        );
    }

    #[test]
    fn test_average_不正な要素はinvalid_elementになる() {
        let invalid = NumericInput::Null;
        assert_eq!(
            average(&with_invalid(invalid.clone())),
            Err(DomainError::InvalidElement(invalid))
        );
    }

    // ===== max / min テスト =====

    #[rstest]
    #[case(&[1.0, 5.0, 3.0, 9.0, 2.0], 9.0)]
    #[case(&[-1.0, -5.0, -3.0], -1.0)]
    #[case(&[42.0], 42.0)]
    #[case(&[1.1, 1.9, 1.5], 1.9)]
    fn test_max_最大値を求める(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(max(&numbers(values)).unwrap(), expected);
    }

    #[rstest]
    #[case(&[1.0, 5.0, 3.0, 9.0, 2.0], 1.0)]
    #[case(&[-1.0, -5.0, -3.0], -5.0)]
    #[case(&[42.0], 42.0)]
    #[case(&[1.1, 1.9, 1.5], 1.1)]
    fn test_min_最小値を求める(#[case] values: &[f64], #[case] expected: f64) {
        assert_eq!(min(&numbers(values)).unwrap(), expected);
    }

    #[test]
    fn test_max_空配列はempty_inputになる() {
        assert_eq!(
            max(&[]).unwrap_err().to_string(),
            "Cannot find max of empty array"
        );
    }

    #[test]
    fn test_min_空配列はempty_inputになる() {
        assert_eq!(
            min(&[]).unwrap_err().to_string(),
            "Cannot find min of empty array"
        );
    }

    #[test]
    fn test_max_min_不正な要素はinvalid_elementになる() {
        let invalid = NumericInput::String("x".to_string());
        assert_eq!(
            max(&with_invalid(invalid.clone())),
            Err(DomainError::InvalidElement(invalid.clone()))
        );
        assert_eq!(
            min(&with_invalid(invalid.clone())),
            Err(DomainError::InvalidElement(invalid))
        );
    }
}
