//! # PPG FFI
//!
//! Python 綁定層（PyO3）

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn ppg_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyPackingEngine>()?;
    m.add_class::<python::PySizeChart>()?;
    Ok(())
}
