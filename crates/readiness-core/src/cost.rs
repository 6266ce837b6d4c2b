//! BOM 成本模型
//!
//! 成本明細與就緒摘要是兩套不同的輸入結構：明細來自 BOM 詳情轉換層，
//! 逐行攜帶單位成本、幣別與匯率。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize;

/// BOM 成本明細行
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostLineItem {
    /// 每件成品消耗數量
    #[serde(deserialize_with = "normalize::lenient_decimal")]
    pub part_qty_per_product: Decimal,

    /// 預估單位成本（以 `currency` 計價）
    #[serde(deserialize_with = "normalize::lenient_decimal")]
    pub estimated_unit_cost: Decimal,

    /// 計價幣別（ISO 4217）
    #[serde(deserialize_with = "normalize::lenient_string")]
    pub currency: String,

    /// 換算為基準幣別的匯率，缺失時視為 1
    #[serde(deserialize_with = "normalize::lenient_opt_decimal")]
    pub exchange_rate: Option<Decimal>,
}

impl CostLineItem {
    /// 創建新的成本明細行
    pub fn new(
        part_qty_per_product: Decimal,
        estimated_unit_cost: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            part_qty_per_product,
            estimated_unit_cost,
            currency: currency.into(),
            exchange_rate: None,
        }
    }

    /// 建構器模式：設置匯率
    pub fn with_exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = Some(rate);
        self
    }
}

/// BOM 詳情的成本部分
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BomCostDetails {
    /// 成本明細行（缺失或非陣列時為空）
    #[serde(deserialize_with = "normalize::lenient_list")]
    pub details: Vec<CostLineItem>,
}

impl BomCostDetails {
    /// 創建新的成本明細
    pub fn new(details: Vec<CostLineItem>) -> Self {
        Self { details }
    }
}

/// 成本摘要類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostSummaryType {
    /// 預估成本（非實際入帳成本）
    Estimated,
}

/// 成本摘要（成本彙總結果）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    /// 摘要類型
    #[serde(rename = "type")]
    pub summary_type: CostSummaryType,

    /// 摘要描述
    pub description: String,

    /// 預估總成本（基準幣別，尾端一次性四捨五入至 4 位小數）
    pub total_estimated_cost: Decimal,

    /// 基準幣別
    pub currency: String,

    /// 明細行數
    pub item_count: usize,
}
