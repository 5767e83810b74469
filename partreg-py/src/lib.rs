use pyo3::prelude::*;

mod assembly;
mod feature;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    feature::register(m)?;
    assembly::register(m)?;
    Ok(())
}
