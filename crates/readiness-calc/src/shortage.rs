//! 短缺判定
//!
//! OR 語義：上游預先標記的 `is_shortage` 旗標與數量不足判定任一成立
//! 即列入短缺。上游可能基於引擎看不到的原因（品質凍結、臨期批次）
//! 標記短缺，該信號必須保留。

use readiness_core::PartSummary;

/// 短缺判定器
pub struct ShortageDetector;

impl ShortageDetector {
    /// 篩選短缺物料：旗標已標記，或可用數量不足以生產一件成品
    ///
    /// 回傳新的列表，不變更輸入
    pub fn identify(summary: &[PartSummary]) -> Vec<PartSummary> {
        summary
            .iter()
            .filter(|part| part.is_shortage || !part.covers_one_unit())
            .cloned()
            .collect()
    }
}
