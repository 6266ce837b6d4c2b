//! 生產就緒報告組裝
//!
//! 單趟編排：附加各物料限制值 → 標記瓶頸 → 取全局最小值 →
//! 短缺判定與庫存健康度（兩者互不依賴，並行執行）→ 組裝報告。

use chrono::Utc;
use readiness_core::{PartSummary, ProductionReadinessReport, ReadinessError};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::bottleneck::BottleneckCalculator;
use crate::shortage::ShortageDetector;
use crate::stock_health::StockHealthCalculator;

/// 報告建立事件（送往觀測端的上下文）
#[derive(Debug, Clone)]
pub struct ReadinessEvent {
    /// 全局最大可產數量
    pub max_producible_units: Decimal,

    /// 短缺物料數
    pub shortage_count: usize,

    /// 瓶頸物料數
    pub bottleneck_count: usize,
}

/// 觀測協作者：每次成功組裝報告時收到一筆事件
///
/// 事件為盡力而為，實作不得影響報告內容
pub trait ReadinessObserver: Send + Sync {
    fn report_built(&self, event: &ReadinessEvent);
}

/// 預設觀測實作：透過 tracing 發出結構化事件
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ReadinessObserver for TracingObserver {
    fn report_built(&self, event: &ReadinessEvent) {
        tracing::info!(
            max_producible_units = %event.max_producible_units,
            shortage_count = event.shortage_count,
            bottleneck_count = event.bottleneck_count,
            "生產就緒報告已產生"
        );
    }
}

/// 生產就緒報告建立器
pub struct ReadinessReportBuilder {
    /// 觀測協作者（依賴注入，測試時可替換）
    observer: Box<dyn ReadinessObserver>,
}

impl Default for ReadinessReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessReportBuilder {
    /// 創建新的報告建立器，使用 tracing 觀測
    pub fn new() -> Self {
        Self {
            observer: Box::new(TracingObserver),
        }
    }

    /// 建構器模式：替換觀測協作者
    pub fn with_observer(mut self, observer: Box<dyn ReadinessObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 組裝生產就緒報告
    ///
    /// 對型別正確的輸入總是成功；數值邊界情況已在反序列化邊界吸收。
    /// 空摘要產生 `max_producible_units = 0` 且可投產的空報告
    pub fn build(&self, summary: Vec<PartSummary>) -> ProductionReadinessReport {
        tracing::debug!("開始組裝就緒報告：物料 {} 筆", summary.len());

        // Step 1: 附加各物料限制值（瓶頸比較依賴此值）
        let enriched = BottleneckCalculator::attach_limits(summary);

        // Step 2: 標記瓶頸物料
        let marked = BottleneckCalculator::mark_bottlenecks(enriched);

        // Step 3: 全局最大可產數量
        let max_producible_units = marked
            .iter()
            .map(|p| p.max_producible_units)
            .min()
            .unwrap_or(Decimal::ZERO);

        // Step 4: 短缺判定與庫存健康度互不依賴，並行執行
        let (shortage_parts, stock_health) = rayon::join(
            || ShortageDetector::identify(&marked),
            || StockHealthCalculator::inactive_stock_impact(&marked),
        );

        let bottleneck_parts: Vec<PartSummary> =
            marked.iter().filter(|p| p.is_bottleneck).cloned().collect();

        let report = ProductionReadinessReport {
            report_id: Uuid::new_v4(),
            max_producible_units,
            is_ready_for_production: shortage_parts.is_empty(),
            shortage_parts,
            bottleneck_parts,
            stock_health,
            summary: marked,
            generated_at: Utc::now(),
        };

        self.emit(&report);
        report
    }

    /// JSON 邊界入口：輸入非陣列時回傳 [`ReadinessError::InvalidSummary`]
    ///
    /// 陣列元素逐筆寬容反序列化，非法元素退化為預設值而不中斷
    pub fn build_from_value(
        &self,
        value: &serde_json::Value,
    ) -> readiness_core::Result<ProductionReadinessReport> {
        let items = value
            .as_array()
            .ok_or_else(|| ReadinessError::InvalidSummary("生產摘要必須為陣列".to_string()))?;

        let summary: Vec<PartSummary> = items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
            .collect();

        Ok(self.build(summary))
    }

    /// 發出觀測事件。觀測端不可用或發生 panic 都不影響回傳的報告
    fn emit(&self, report: &ProductionReadinessReport) {
        let event = ReadinessEvent {
            max_producible_units: report.max_producible_units,
            shortage_count: report.shortage_parts.len(),
            bottleneck_count: report.bottleneck_parts.len(),
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.observer.report_built(&event);
        }));
        if result.is_err() {
            tracing::warn!("觀測端發生 panic，已忽略");
        }
    }
}
