use pyo3::exceptions::{PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use partreg_core::error::AssemblyError;
use partreg_core::seq::Sequence;

/// Validate a Python str/bytes as a nucleotide sequence, ignoring whitespace.
pub fn extract_sequence(obj: &Bound<'_, PyAny>) -> PyResult<Sequence> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Sequence::parse(s.to_str()?).map_err(assembly_err);
    }

    let bytes = obj
        .extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))?;
    match std::str::from_utf8(&bytes) {
        Ok(text) => Sequence::parse(text),
        Err(_) => Sequence::new(bytes),
    }
    .map_err(assembly_err)
}

/// Bad input becomes `ValueError`; engine failures become `RuntimeError`.
pub fn assembly_err(err: AssemblyError) -> PyErr {
    if err.is_fatal() {
        PyRuntimeError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}
