//! 裝箱分組主引擎

use std::time::Instant;

use ppg_core::{LineItem, Result, SizeChart};

use crate::grouping::GroupingEngine;
use crate::materialize::Materializer;
use crate::pivot::PivotBuilder;
use crate::signature::SignatureBuilder;
use crate::PackingRunResult;

/// 裝箱分組引擎
#[derive(Debug)]
pub struct PackingEngine {
    /// 尺碼表配置
    chart: SizeChart,
}

impl PackingEngine {
    /// 創建新的引擎（尺碼表先過配置檢查）
    pub fn new(chart: SizeChart) -> Result<Self> {
        chart.validate()?;
        Ok(Self { chart })
    }

    /// 使用預設尺碼表創建引擎
    pub fn with_default_chart() -> Self {
        Self {
            chart: SizeChart::default_chart(),
        }
    }

    /// 獲取尺碼表引用
    pub fn chart(&self) -> &SizeChart {
        &self.chart
    }

    /// 主計算入口：明細 → 樞紐 → 簽名 → 分組 → 報表列
    ///
    /// 空輸入回傳空結果，是否視為錯誤由呼叫端決定。
    pub fn run(&self, items: &[LineItem]) -> Result<PackingRunResult> {
        tracing::info!("開始裝箱分組計算：明細 {} 筆", items.len());
        let start_time = Instant::now();

        let mut result = PackingRunResult::empty();

        // Step 1: 數量樞紐彙整
        tracing::debug!("Step 1: 數量樞紐彙整");
        let (pivot_rows, warnings) = PivotBuilder::build(&self.chart, items);
        tracing::debug!("樞紐列數量: {}", pivot_rows.len());
        result.warnings = warnings;

        // Step 2: 簽名正規化
        tracing::debug!("Step 2: 簽名正規化");
        let signatures = SignatureBuilder::build_signatures(&pivot_rows);
        tracing::debug!("PO 數量: {}", signatures.len());

        // Step 3: 依簽名分組
        tracing::debug!("Step 3: 依簽名分組");
        let groups = GroupingEngine::group(&signatures);
        tracing::debug!("群組數量: {}", groups.len());

        // Step 4: 報表列展開與彙總
        tracing::debug!("Step 4: 報表列展開與彙總");
        result.report_rows = Materializer::expand(&self.chart, &groups);
        result.summary = Materializer::summarize(&self.chart, &result.report_rows);
        result.groups = groups;

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "裝箱分組計算完成：群組 {} 個，報表列 {} 列，耗時 {:?}",
            result.groups.len(),
            result.report_rows.len(),
            start_time.elapsed()
        );

        Ok(result)
    }
}
