//! # 集約演算ハンドラ
//!
//! - `POST /api/calculate` — `{ operation, numbers }` を受け取り、指定演算を適用する
//! - `POST /api/sum` — `{ numbers }` の総和
//! - `POST /api/product` — `{ numbers }` の総乗
//!
//! ## ボディの解釈
//!
//! | 条件 | 扱い |
//! |------|------|
//! | Content-Type が `application/json` 以外、または空ボディ | `{}` |
//! | JSON オブジェクト | そのフィールド |
//! | JSON 配列 | `{}`（フィールドを持たない） |
//! | JSON として不正、またはオブジェクト・配列以外 | 500 |
//!
//! ## 検証順序
//!
//! 最初に失敗した段階のエラーを返す。
//!
//! 1. 必須フィールドが揃っていること（400 形状エラー）
//! 2. `numbers` の全要素が有限の数値であること
//! 3. （`/api/calculate` のみ）`operation` が `"sum"` / `"product"` であること
//!
//! `numbers` はリクエストの JSON をそのまま返す（整数は整数のまま）。

use anyhow::Context as _;
use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, header},
};
use mergeq_domain::{
    DomainError,
    NumericInput,
    Operation,
    is_valid_number,
    numeric::number_to_json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, CALCULATE_SHAPE_ERROR, NUMBERS_SHAPE_ERROR};

/// 演算結果のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub operation: Operation,
    pub numbers:   Value,
    pub result:    Value,
}

/// 検証済みの数値列
///
/// `raw` はレスポンスでそのまま返すリクエストの配列。
struct Numbers {
    raw:      Value,
    elements: Vec<NumericInput>,
}

pub async fn calculate(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CalculationResponse>, ApiError> {
    let mut fields = parse_body(&headers, &body)?;

    let operation = fields.remove("operation").filter(is_truthy);
    let items = fields.remove("numbers").and_then(into_array);
    let (Some(operation), Some(items)) = (operation, items) else {
        return Err(ApiError::MalformedRequest(CALCULATE_SHAPE_ERROR));
    };

    let numbers = validate_numbers(items)?;
    let operation = parse_operation(&operation)?;

    respond(operation, numbers)
}

pub async fn sum(headers: HeaderMap, body: Bytes) -> Result<Json<CalculationResponse>, ApiError> {
    calculate_fixed(Operation::Sum, &headers, &body)
}

pub async fn product(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate_fixed(Operation::Product, &headers, &body)
}

/// 演算種別がルートで決まるエンドポイントの共通処理
fn calculate_fixed(
    operation: Operation,
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<Json<CalculationResponse>, ApiError> {
    let mut fields = parse_body(headers, body)?;

    let items = fields
        .remove("numbers")
        .and_then(into_array)
        .ok_or(ApiError::MalformedRequest(NUMBERS_SHAPE_ERROR))?;

    let numbers = validate_numbers(items)?;

    respond(operation, numbers)
}

fn respond(
    operation: Operation,
    numbers: Numbers,
) -> Result<Json<CalculationResponse>, ApiError> {
    let result = operation.apply(&numbers.elements)?;

    tracing::debug!(
        %operation,
        count = numbers.elements.len(),
        result,
        "演算を実行しました"
    );

    Ok(Json(CalculationResponse {
        operation,
        numbers: numbers.raw,
        result: number_to_json(result),
    }))
}

/// Content-Type が `application/json` かどうか（パラメータは無視する）
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .is_some_and(|parsed| {
            parsed.type_() == mime::APPLICATION && parsed.subtype() == mime::JSON
        })
}

/// リクエストボディをフィールドの集合として解釈する
///
/// JSON として解釈できないボディはクライアントの形状エラーではなく
/// 内部エラーとして扱う。
fn parse_body(headers: &HeaderMap, body: &Bytes) -> Result<Map<String, Value>, ApiError> {
    if !is_json_content_type(headers) || body.is_empty() {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_slice(body)
        .context("リクエストボディを JSON として解釈できません")?;

    match value {
        Value::Object(fields) => Ok(fields),
        Value::Array(_) => Ok(Map::new()),
        other => Err(ApiError::Internal(anyhow::anyhow!(
            "JSON ボディはオブジェクトか配列である必要があります: {other}"
        ))),
    }
}

fn into_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// 全要素が有限の数値であることを検証する
///
/// 最初に見つかった不正な要素でエラーを返す。
fn validate_numbers(items: Vec<Value>) -> Result<Numbers, DomainError> {
    let elements: Vec<NumericInput> = items.iter().map(NumericInput::from).collect();

    if let Some(invalid) = elements.iter().find(|item| !is_valid_number(item)) {
        return Err(DomainError::InvalidElement(invalid.clone()));
    }

    Ok(Numbers {
        raw: Value::Array(items),
        elements,
    })
}

/// `operation` フィールドを演算種別に変換する
fn parse_operation(value: &Value) -> Result<Operation, DomainError> {
    match value {
        Value::String(tag) => tag.parse(),
        other => Err(DomainError::UnsupportedOperation(other.to_string())),
    }
}

/// 値が「真」とみなせるかを判定する
///
/// `null`, `false`, `0`, 空文字列を偽とする。
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
