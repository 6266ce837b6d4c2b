//! 數值正規化
//!
//! 上游快照來自外部查詢/轉換層，欄位可能缺失、為字串或為非法數值。
//! 所有寬容解析集中在反序列化邊界，引擎本體只會看到合法的 `Decimal`。

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// 將浮點數轉為 `Decimal`，非有限值（NaN/Infinity）或超出範圍時回退為 `fallback`
pub fn to_decimal(value: f64, fallback: Decimal) -> Decimal {
    if !value.is_finite() {
        return fallback;
    }
    Decimal::try_from(value).unwrap_or(fallback)
}

/// 解析任意 JSON 值為 `Decimal`，無法解析時回退為零
fn coerce_decimal(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => n
            .to_string()
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .unwrap_or_else(|_| to_decimal(n.as_f64().unwrap_or(f64::NAN), Decimal::ZERO)),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(trimmed))
                .unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

/// serde 欄位解析器：寬容數值（null / 字串 / 非法值 ⇒ 0）
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_decimal).unwrap_or(Decimal::ZERO))
}

/// serde 欄位解析器：寬容可選數值（缺失 / null / 非法值 ⇒ None）
pub fn lenient_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Null) | None => None,
        Some(v @ serde_json::Value::Number(_)) | Some(v @ serde_json::Value::String(_)) => {
            Some(coerce_decimal(&v))
        }
        Some(_) => None,
    })
}

/// serde 欄位解析器：寬容布林值（數值非零 / "true" / "1" ⇒ true）
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        _ => false,
    })
}

/// serde 欄位解析器：寬容字串（數值 ⇒ 字串形式，其餘非字串 ⇒ 空字串）
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// serde 欄位解析器：寬容列表（非陣列 ⇒ 空列表；非法元素 ⇒ 預設值）
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_to_decimal_finite() {
        assert_eq!(to_decimal(2.5, Decimal::ZERO), Decimal::new(25, 1));
        assert_eq!(to_decimal(0.0, Decimal::ONE), Decimal::ZERO);
    }

    #[test]
    fn test_to_decimal_non_finite() {
        assert_eq!(to_decimal(f64::NAN, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY, Decimal::ONE), Decimal::ONE);
        assert_eq!(to_decimal(f64::NEG_INFINITY, Decimal::ZERO), Decimal::ZERO);
    }

    #[rstest]
    #[case(json!(10.004), "10.004")]
    #[case(json!("3.5"), "3.5")]
    #[case(json!(" 7 "), "7")]
    #[case(json!(null), "0")]
    #[case(json!("abc"), "0")]
    #[case(json!({"a": 1}), "0")]
    #[case(json!([1, 2]), "0")]
    fn test_coerce_decimal_variants(#[case] value: serde_json::Value, #[case] expected: &str) {
        assert_eq!(coerce_decimal(&value), expected.parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_lenient_list_tolerates_non_array() {
        #[derive(serde::Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "lenient_list")]
            items: Vec<crate::part::MaterialBatch>,
        }

        let holder: Holder = serde_json::from_value(json!({ "items": "oops" })).unwrap();
        assert!(holder.items.is_empty());

        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(holder.items.is_empty());
    }
}
