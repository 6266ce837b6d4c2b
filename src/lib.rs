//! # BOM Production Readiness
//!
//! BOM 生產就緒引擎：給定成品的物料清單與各批次/倉庫的時點庫存快照，
//! 計算最大可產數量、瓶頸物料、短缺物料、庫存健康度與基準幣別的
//! 預估生產成本。
//!
//! 引擎無任何網路/檔案介面，邊界即函數呼叫：服務層送入
//! [`PartSummary`] 摘要或 [`BomCostDetails`] 成本明細，
//! 同步取回 [`ProductionReadinessReport`] 或 [`CostSummary`]。

pub use readiness_calc::{
    BottleneckCalculator, CostCalculator, ReadinessEvent, ReadinessObserver,
    ReadinessReportBuilder, ShortageDetector, StockHealthCalculator, TracingObserver,
    DEFAULT_BASE_CURRENCY,
};
pub use readiness_core::{
    normalize, BomCostDetails, CostLineItem, CostSummary, CostSummaryType, MaterialBatch,
    PartSummary, ProductionReadinessReport, ReadinessError, Result, StockHealth,
};
