//! 瓶頸分析
//!
//! 對每項物料計算「僅靠該物料可支撐的成品數量」，全局最小值即為
//! 最大可產數量；所有等於最小值的物料都是瓶頸，同值不挑單一贏家。

use readiness_core::PartSummary;
use rust_decimal::Decimal;

/// 需求量下限，避免除以零，也避免零需求物料被視為無限產能
fn requirement_floor() -> Decimal {
    // 0.0001
    Decimal::new(1, 4)
}

/// 瓶頸計算器
pub struct BottleneckCalculator;

impl BottleneckCalculator {
    /// 單項物料可支撐的成品數量：floor(可用量 / max(需求量, 0.0001))
    pub fn unit_limit(part: &PartSummary) -> Decimal {
        let requirement = part.required_qty_per_unit.max(requirement_floor());
        (part.total_available_quantity / requirement).floor()
    }

    /// 全局最大可產數量：所有物料限制值的最小值，空輸入為 0
    pub fn max_manufacturable_units(summary: &[PartSummary]) -> Decimal {
        summary
            .iter()
            .map(Self::unit_limit)
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    /// 為每項物料附加 `max_producible_units`
    ///
    /// 必須在 [`Self::mark_bottlenecks`] 之前執行，瓶頸比較依賴已附加的限制值
    pub fn attach_limits(summary: Vec<PartSummary>) -> Vec<PartSummary> {
        summary
            .into_iter()
            .map(|mut part| {
                part.max_producible_units = Self::unit_limit(&part);
                part
            })
            .collect()
    }

    /// 依已附加的限制值標記瓶頸物料（等於全局最小值者全部標記）
    pub fn mark_bottlenecks(summary: Vec<PartSummary>) -> Vec<PartSummary> {
        let min_units = match summary.iter().map(|p| p.max_producible_units).min() {
            Some(min) => min,
            None => return summary,
        };

        summary
            .into_iter()
            .map(|mut part| {
                part.is_bottleneck = part.max_producible_units == min_units;
                part
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn part(required: Decimal, available: Decimal) -> PartSummary {
        PartSummary::new("PART", "測試物料", required, available)
    }

    #[rstest]
    #[case(Decimal::from(2), Decimal::from(10), Decimal::from(5))]
    #[case(Decimal::from(5), Decimal::from(10), Decimal::from(2))]
    #[case(Decimal::from(1), Decimal::from(3), Decimal::from(3))]
    #[case(Decimal::from(3), Decimal::from(10), Decimal::from(3))]
    #[case(Decimal::from(2), Decimal::ZERO, Decimal::ZERO)]
    fn test_unit_limit(
        #[case] required: Decimal,
        #[case] available: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(BottleneckCalculator::unit_limit(&part(required, available)), expected);
    }

    #[test]
    fn test_unit_limit_zero_requirement() {
        // 零需求不可引發除以零，限制值落在 epsilon 公式上：10 / 0.0001 = 100000
        let limit = BottleneckCalculator::unit_limit(&part(Decimal::ZERO, Decimal::from(10)));
        assert_eq!(limit, Decimal::from(100_000));

        // 負需求同樣走 epsilon 下限
        let limit = BottleneckCalculator::unit_limit(&part(Decimal::from(-3), Decimal::from(10)));
        assert_eq!(limit, Decimal::from(100_000));
    }

    #[test]
    fn test_max_manufacturable_units() {
        let summary = vec![
            part(Decimal::from(2), Decimal::from(10)),
            part(Decimal::from(5), Decimal::from(10)),
            part(Decimal::from(1), Decimal::from(3)),
        ];

        assert_eq!(
            BottleneckCalculator::max_manufacturable_units(&summary),
            Decimal::from(2)
        );
    }

    #[test]
    fn test_max_manufacturable_units_empty() {
        assert_eq!(
            BottleneckCalculator::max_manufacturable_units(&[]),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_mark_bottlenecks_single_minimum() {
        let summary = BottleneckCalculator::attach_limits(vec![
            part(Decimal::from(2), Decimal::from(10)), // 限制 5
            part(Decimal::from(5), Decimal::from(10)), // 限制 2，瓶頸
            part(Decimal::from(1), Decimal::from(3)),  // 限制 3
        ]);
        let marked = BottleneckCalculator::mark_bottlenecks(summary);

        let flags: Vec<bool> = marked.iter().map(|p| p.is_bottleneck).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_mark_bottlenecks_ties_all_marked() {
        // 同為最小值的物料必須全部標記，不挑單一贏家
        let summary = BottleneckCalculator::attach_limits(vec![
            part(Decimal::from(2), Decimal::from(4)),  // 限制 2
            part(Decimal::from(5), Decimal::from(10)), // 限制 2
            part(Decimal::from(1), Decimal::from(9)),  // 限制 9
        ]);
        let marked = BottleneckCalculator::mark_bottlenecks(summary);

        assert!(marked[0].is_bottleneck);
        assert!(marked[1].is_bottleneck);
        assert!(!marked[2].is_bottleneck);
    }

    #[test]
    fn test_mark_bottlenecks_empty() {
        assert!(BottleneckCalculator::mark_bottlenecks(Vec::new()).is_empty());
    }
}
