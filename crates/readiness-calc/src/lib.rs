//! # Readiness Calculation Engine
//!
//! BOM 生產就緒計算引擎：瓶頸分析、短缺判定、庫存健康度與成本彙總。
//! 全部為同步純函數，消費一份時點快照，產生可重現的報告，
//! 不變更任何庫存狀態。

pub mod bottleneck;
pub mod cost;
pub mod report;
pub mod shortage;
pub mod stock_health;

// Re-export 主要類型
pub use bottleneck::BottleneckCalculator;
pub use cost::{CostCalculator, DEFAULT_BASE_CURRENCY};
pub use report::{ReadinessEvent, ReadinessObserver, ReadinessReportBuilder, TracingObserver};
pub use shortage::ShortageDetector;
pub use stock_health::StockHealthCalculator;
