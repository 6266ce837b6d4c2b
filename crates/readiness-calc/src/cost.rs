//! 成本彙總
//!
//! 逐行計算 數量 × 單位成本，非基準幣別的行乘以匯率換算，累加後
//! 在尾端一次性四捨五入至 4 位小數。財務數字禁止逐行捨入，多行
//! 累積的捨入誤差會造成漂移。

use readiness_core::{BomCostDetails, CostSummary, CostSummaryType};
use rust_decimal::{Decimal, RoundingStrategy};

/// 預設基準幣別
pub const DEFAULT_BASE_CURRENCY: &str = "CAD";

/// 捨入位數
const COST_SCALE: u32 = 4;

/// 成本計算器
pub struct CostCalculator;

impl CostCalculator {
    /// 以預設基準幣別估算 BOM 總成本
    pub fn estimate(details: &BomCostDetails) -> CostSummary {
        Self::estimate_in(details, DEFAULT_BASE_CURRENCY)
    }

    /// 以指定基準幣別估算 BOM 總成本
    ///
    /// 明細為空時回傳零成本摘要，不視為錯誤
    pub fn estimate_in(details: &BomCostDetails, base_currency: &str) -> CostSummary {
        if details.details.is_empty() {
            return CostSummary {
                summary_type: CostSummaryType::Estimated,
                description: "無成本明細，無法估算生產成本".to_string(),
                total_estimated_cost: Decimal::ZERO,
                currency: base_currency.to_string(),
                item_count: 0,
            };
        }

        let mut total = Decimal::ZERO;
        for line in &details.details {
            let mut amount = line.part_qty_per_product * line.estimated_unit_cost;
            if line.currency != base_currency {
                amount *= line.exchange_rate.unwrap_or(Decimal::ONE);
            }
            total += amount;
        }

        CostSummary {
            summary_type: CostSummaryType::Estimated,
            description: format!(
                "依 {} 筆成本明細估算（基準幣別 {}）",
                details.details.len(),
                base_currency
            ),
            total_estimated_cost: total
                .round_dp_with_strategy(COST_SCALE, RoundingStrategy::MidpointAwayFromZero),
            currency: base_currency.to_string(),
            item_count: details.details.len(),
        }
    }
}
