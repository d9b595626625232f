//! Python 綁定實現

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use ppg_calc::PackingEngine;
use ppg_io::{DelimitedOptions, IngestResult};
use ppg_report::ReportRenderer;

/// Python 尺碼表
#[pyclass(name = "SizeChart")]
#[derive(Clone)]
pub struct PySizeChart {
    pub(crate) inner: ppg_core::SizeChart,
}

#[pymethods]
impl PySizeChart {
    /// 預設尺碼表（嬰兒與幼兒兩帶）
    #[staticmethod]
    fn default_chart() -> Self {
        Self {
            inner: ppg_core::SizeChart::default_chart(),
        }
    }

    /// 從 JSON 字串載入
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        ppg_core::SizeChart::from_json(json)
            .map(|inner| Self { inner })
            .map_err(to_py_err)
    }

    /// 轉為 JSON 字串
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// 展平後的全部尺碼
    fn all_sizes(&self) -> Vec<String> {
        self.inner.all_sizes()
    }
}

/// Python 裝箱分組引擎
#[pyclass(name = "PackingEngine")]
pub struct PyPackingEngine {
    engine: PackingEngine,
}

#[pymethods]
impl PyPackingEngine {
    #[new]
    #[pyo3(signature = (chart = None))]
    fn new(chart: Option<PySizeChart>) -> PyResult<Self> {
        let chart = chart
            .map(|c| c.inner)
            .unwrap_or_else(ppg_core::SizeChart::default_chart);
        PackingEngine::new(chart)
            .map(|engine| Self { engine })
            .map_err(to_py_err)
    }

    /// 上傳的 XLSX 位元組 → 報表 XLSX 位元組
    fn convert_xlsx<'py>(&self, py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
        let ingest = ppg_io::read_xlsx_bytes(data).map_err(to_py_err)?;
        self.render_report(py, ingest)
    }

    /// 上傳的分隔文字位元組 → 報表 XLSX 位元組
    #[pyo3(signature = (data, delimiter = ","))]
    fn convert_delimited<'py>(
        &self,
        py: Python<'py>,
        data: &[u8],
        delimiter: &str,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let options = DelimitedOptions::new().with_delimiter(parse_delimiter(delimiter)?);
        let ingest = ppg_io::read_delimited(data, options).map_err(to_py_err)?;
        self.render_report(py, ingest)
    }

    /// 執行分組並回傳彙總 JSON（群組數、PO 數、各帶總量與警告）
    fn run_summary_json(&self, data: &[u8]) -> PyResult<String> {
        let ingest = ppg_io::read_xlsx_bytes(data).map_err(to_py_err)?;
        let mut result = self.engine.run(&ingest.line_items).map_err(to_py_err)?;

        let mut warnings = ingest.warnings;
        warnings.append(&mut result.warnings);

        serde_json::to_string(&serde_json::json!({
            "run_id": result.run_id,
            "summary": result.summary,
            "warnings": warnings,
            "calculation_time_ms": result.calculation_time_ms,
        }))
        .map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// 內部方法實現（不暴露給 Python）
impl PyPackingEngine {
    fn render_report<'py>(
        &self,
        py: Python<'py>,
        ingest: IngestResult,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let result = self.engine.run(&ingest.line_items).map_err(to_py_err)?;
        let bytes = ReportRenderer::render_bytes(self.engine.chart(), &result.report_rows)
            .map_err(to_py_err)?;
        Ok(PyBytes::new(py, &bytes))
    }
}

fn parse_delimiter(delimiter: &str) -> PyResult<u8> {
    match delimiter.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(PyValueError::new_err(format!(
            "Invalid delimiter: {:?}, must be a single ASCII character",
            delimiter
        ))),
    }
}

fn to_py_err(err: ppg_core::PpgError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
