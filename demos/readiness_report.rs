//! 腳踏車 BOM 生產就緒分析完整範例
//!
//! 展示從庫存快照到就緒報告與成本摘要的完整流程

use bom_readiness::*;
use rust_decimal::Decimal;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("===== Bike Production Readiness Example =====\n");

    // 步驟 1: 建立物料摘要快照（由上游查詢層彙總）
    println!("[1] Build Part Summary Snapshot");
    let summary = vec![
        PartSummary::new("FRAME-001", "車架", Decimal::from(1), Decimal::from(40)).with_batches(
            vec![
                MaterialBatch::new(Decimal::from(30)),
                MaterialBatch::new(Decimal::from(10)).with_inactive(true),
            ],
        ),
        PartSummary::new("WHEEL-001", "輪子", Decimal::from(2), Decimal::from(50)).with_batches(
            vec![MaterialBatch::new(Decimal::from(50))],
        ),
        PartSummary::new("TUBE-001", "鋼管", Decimal::from(3), Decimal::from(60)).with_batches(
            vec![MaterialBatch::new(Decimal::from(60))],
        ),
    ];
    println!("    Parts: {}\n", summary.len());

    // 步驟 2: 組裝就緒報告
    println!("[2] Build Readiness Report");
    let builder = ReadinessReportBuilder::new();
    let report = builder.build(summary);

    println!("    Max producible units: {}", report.max_producible_units);
    println!("    Bottleneck parts: {:?}", report.bottleneck_part_ids());
    println!("    Shortage parts: {}", report.shortage_parts.len());
    println!(
        "    Stock health: usable {} / inactive {}",
        report.stock_health.usable, report.stock_health.inactive
    );
    println!(
        "    Ready for production: {}\n",
        report.is_ready_for_production
    );

    // 步驟 3: 估算生產成本（基準幣別 CAD）
    println!("[3] Estimate Production Cost");
    let details = BomCostDetails::new(vec![
        CostLineItem::new(Decimal::from(1), "85.5".parse()?, "CAD"),
        CostLineItem::new(Decimal::from(2), "10.004".parse()?, "USD")
            .with_exchange_rate("1.35".parse()?),
        CostLineItem::new(Decimal::from(3), "3.2".parse()?, "CAD"),
    ]);
    let cost = CostCalculator::estimate(&details);

    println!("    {}", cost.description);
    println!(
        "    Total estimated cost: {} {}\n",
        cost.total_estimated_cost, cost.currency
    );

    // 步驟 4: 序列化為上游服務層期望的 JSON
    println!("[4] Serialize Report");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
