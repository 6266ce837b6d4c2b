//! 物料摘要模型
//!
//! 一筆 `PartSummary` 對應 BOM 中一項必要物料，由外部查詢層彙總
//! 各批次/倉庫的可用數量後送入引擎。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize;

/// 物料批次（實體庫存批）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialBatch {
    /// 批次可用數量
    #[serde(deserialize_with = "normalize::lenient_decimal")]
    pub available_quantity: Decimal,

    /// 停用批次（隔離、臨期等），實體存在但不可投產
    #[serde(deserialize_with = "normalize::lenient_bool")]
    pub is_inactive_batch: bool,
}

impl MaterialBatch {
    /// 創建新的批次記錄
    pub fn new(available_quantity: Decimal) -> Self {
        Self {
            available_quantity,
            is_inactive_batch: false,
        }
    }

    /// 建構器模式：標記為停用批次
    pub fn with_inactive(mut self, is_inactive: bool) -> Self {
        self.is_inactive_batch = is_inactive;
        self
    }
}

/// BOM 物料摘要（單項必要物料的快照）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartSummary {
    /// 物料ID
    #[serde(deserialize_with = "normalize::lenient_string")]
    pub part_id: String,

    /// 物料名稱
    #[serde(deserialize_with = "normalize::lenient_string")]
    pub part_name: String,

    /// 每件成品消耗數量
    #[serde(deserialize_with = "normalize::lenient_decimal")]
    pub required_qty_per_unit: Decimal,

    /// 所有批次/倉庫彙總後的可用數量
    #[serde(deserialize_with = "normalize::lenient_decimal")]
    pub total_available_quantity: Decimal,

    /// 支撐該物料的實體批次（可為空）
    #[serde(deserialize_with = "normalize::lenient_list")]
    pub material_batches: Vec<MaterialBatch>,

    /// 僅靠該物料可支撐的成品數量（引擎推導）
    #[serde(deserialize_with = "normalize::lenient_decimal")]
    pub max_producible_units: Decimal,

    /// 是否為瓶頸物料（引擎推導）
    #[serde(deserialize_with = "normalize::lenient_bool")]
    pub is_bottleneck: bool,

    /// 是否短缺。上游可基於引擎看不到的原因（品質凍結等）預先標記，
    /// 引擎只會補充此旗標，不會清除
    #[serde(deserialize_with = "normalize::lenient_bool")]
    pub is_shortage: bool,
}

impl PartSummary {
    /// 創建新的物料摘要
    pub fn new(
        part_id: impl Into<String>,
        part_name: impl Into<String>,
        required_qty_per_unit: Decimal,
        total_available_quantity: Decimal,
    ) -> Self {
        Self {
            part_id: part_id.into(),
            part_name: part_name.into(),
            required_qty_per_unit,
            total_available_quantity,
            material_batches: Vec::new(),
            max_producible_units: Decimal::ZERO,
            is_bottleneck: false,
            is_shortage: false,
        }
    }

    /// 建構器模式：設置批次列表
    pub fn with_batches(mut self, batches: Vec<MaterialBatch>) -> Self {
        self.material_batches = batches;
        self
    }

    /// 建構器模式：設置上游短缺旗標
    pub fn with_shortage_flag(mut self, is_shortage: bool) -> Self {
        self.is_shortage = is_shortage;
        self
    }

    /// 可用數量是否足以生產一件成品
    pub fn covers_one_unit(&self) -> bool {
        self.total_available_quantity >= self.required_qty_per_unit
    }
}
