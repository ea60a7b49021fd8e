//! # 演算種別
//!
//! HTTP API から指定可能な集約演算を表す列挙型。
//!
//! 平均・最大・最小は [`reducer`](crate::reducer) のライブラリ関数としてのみ提供し、
//! ここには含めない。

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{DomainError, numeric::NumericInput, reducer};

/// API から指定可能な集約演算
///
/// リクエストでは小文字の文字列（`"sum"` / `"product"`）で指定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// 総和（単位元 0）
    Sum,
    /// 総乗（単位元 1）
    Product,
}

impl Operation {
    /// 演算の単位元（空配列に対する結果）
    pub fn identity(self) -> f64 {
        match self {
            Self::Sum => 0.0,
            Self::Product => 1.0,
        }
    }

    /// 数値列に演算を適用する
    pub fn apply(self, numbers: &[NumericInput]) -> Result<f64, DomainError> {
        match self {
            Self::Sum => reducer::sum(numbers),
            Self::Product => reducer::product(numbers),
        }
    }

    /// 型不明の入力に演算を適用する
    ///
    /// 入力が配列でない場合は [`DomainError::InvalidInput`] を返す。
    pub fn apply_to(self, input: &NumericInput) -> Result<f64, DomainError> {
        self.apply(reducer::as_sequence(input)?)
    }
}

impl std::str::FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Self::Sum),
            "product" => Ok(Self::Product),
            _ => Err(DomainError::UnsupportedOperation(s.to_string())),
        }
    }
}
