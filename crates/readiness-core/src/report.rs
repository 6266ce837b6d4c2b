//! 生產就緒報告模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::part::PartSummary;

/// 庫存健康度（可用 / 停用批次數量拆分）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockHealth {
    /// 可投產批次數量合計
    pub usable: Decimal,

    /// 停用批次數量合計
    pub inactive: Decimal,
}

impl StockHealth {
    /// 創建新的健康度記錄
    pub fn new(usable: Decimal, inactive: Decimal) -> Self {
        Self { usable, inactive }
    }

    /// 所有批次數量合計
    pub fn total(&self) -> Decimal {
        self.usable + self.inactive
    }
}

/// 生產就緒報告（引擎輸出，組裝後不再變更）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReadinessReport {
    /// 報告ID
    pub report_id: Uuid,

    /// 輸入摘要（已附加每項物料的可產數量與瓶頸旗標）
    pub summary: Vec<PartSummary>,

    /// 全局最大可產數量（瓶頸值）
    pub max_producible_units: Decimal,

    /// 短缺物料（不足以生產一件成品，或上游預先標記）
    pub shortage_parts: Vec<PartSummary>,

    /// 瓶頸物料（可產數量等於全局最小值，同值全列）
    pub bottleneck_parts: Vec<PartSummary>,

    /// 庫存健康度
    pub stock_health: StockHealth,

    /// 是否可投產（無任何短缺物料）
    pub is_ready_for_production: bool,

    /// 報告產生時間
    pub generated_at: DateTime<Utc>,
}

impl ProductionReadinessReport {
    /// 瓶頸物料ID列表（報表顯示用）
    pub fn bottleneck_part_ids(&self) -> Vec<&str> {
        self.bottleneck_parts
            .iter()
            .map(|p| p.part_id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_health_total() {
        let health = StockHealth::new(Decimal::from(30), Decimal::from(12));
        assert_eq!(health.total(), Decimal::from(42));

        let empty = StockHealth::default();
        assert_eq!(empty.total(), Decimal::ZERO);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ProductionReadinessReport {
            report_id: Uuid::new_v4(),
            summary: Vec::new(),
            max_producible_units: Decimal::ZERO,
            shortage_parts: Vec::new(),
            bottleneck_parts: Vec::new(),
            stock_health: StockHealth::default(),
            is_ready_for_production: true,
            generated_at: Utc::now(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("maxProducibleUnits").is_some());
        assert!(value.get("isReadyForProduction").is_some());
        assert!(value.get("generatedAt").is_some());
    }
}
