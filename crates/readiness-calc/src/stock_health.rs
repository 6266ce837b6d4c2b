//! 庫存健康度彙總
//!
//! 將批次層級的數量拆分為可投產與停用兩個池，合計守恆：
//! usable + inactive 等於所有批次數量之和。

use readiness_core::{PartSummary, StockHealth};
use rust_decimal::Decimal;

/// 庫存健康度計算器
pub struct StockHealthCalculator;

impl StockHealthCalculator {
    /// 彙總停用批次的影響，無批次的物料貢獻為零
    pub fn inactive_stock_impact(summary: &[PartSummary]) -> StockHealth {
        let mut usable = Decimal::ZERO;
        let mut inactive = Decimal::ZERO;

        for part in summary {
            for batch in &part.material_batches {
                if batch.is_inactive_batch {
                    inactive += batch.available_quantity;
                } else {
                    usable += batch.available_quantity;
                }
            }
        }

        StockHealth::new(usable, inactive)
    }
}
