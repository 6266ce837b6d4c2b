//! # Readiness Core
//!
//! BOM 生產就緒引擎的核心資料模型與類型定義

pub mod cost;
pub mod normalize;
pub mod part;
pub mod report;

// Re-export 主要類型
pub use cost::{BomCostDetails, CostLineItem, CostSummary, CostSummaryType};
pub use part::{MaterialBatch, PartSummary};
pub use report::{ProductionReadinessReport, StockHealth};

/// 就緒引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReadinessError {
    #[error("無效的生產摘要: {0}")]
    InvalidSummary(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
