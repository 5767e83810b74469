use pyo3::basic::CompareOp;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyModule};

use partreg_core::seq::{
    FeatureCollection, FeatureKind, SequenceFeature as CoreSequenceFeature, Strand,
};

use crate::utils::assembly_err;

#[pyclass(frozen)]
pub struct SequenceFeature {
    pub(crate) inner: CoreSequenceFeature,
}

#[pymethods]
impl SequenceFeature {
    #[new]
    #[pyo3(signature = (name, start, end, strand=1, kind="other"))]
    fn new(name: &str, start: usize, end: usize, strand: i8, kind: &str) -> PyResult<Self> {
        let strand = Strand::try_from(strand).map_err(assembly_err)?;
        let kind = FeatureKind::from_name(kind).ok_or_else(|| {
            PyValueError::new_err(format!(
                "kind must be 'junction', 'part_body' or 'other', got {kind:?}"
            ))
        })?;
        let inner =
            CoreSequenceFeature::new(name, start, end, strand, kind).map_err(assembly_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn start(&self) -> usize {
        self.inner.start()
    }

    #[getter]
    fn end(&self) -> usize {
        self.inner.end()
    }

    #[getter]
    fn strand(&self) -> i8 {
        self.inner.strand().as_i8()
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.kind().as_str()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __richcmp__(&self, other: PyRef<'_, SequenceFeature>, op: CompareOp) -> PyResult<bool> {
        match op {
            CompareOp::Eq => Ok(self.inner == other.inner),
            CompareOp::Ne => Ok(self.inner != other.inner),
            _ => Err(PyTypeError::new_err("SequenceFeature only supports == and !=")),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SequenceFeature(name={:?}, start={}, end={}, strand={}, kind={:?})",
            self.inner.name(),
            self.inner.start(),
            self.inner.end(),
            self.inner.strand().as_i8(),
            self.inner.kind().as_str()
        )
    }
}

pub(crate) fn extract_collection(obj: &Bound<'_, PyAny>) -> PyResult<FeatureCollection> {
    let mut out = FeatureCollection::new();
    for item in obj.iter()? {
        let item = item?;
        let feature = item
            .extract::<PyRef<'_, SequenceFeature>>()
            .map_err(|_| PyTypeError::new_err("features must be SequenceFeature objects"))?;
        out.push(feature.inner.clone());
    }
    Ok(out)
}

pub(crate) fn wrap_collection(features: FeatureCollection) -> Vec<SequenceFeature> {
    features
        .into_iter()
        .map(|inner| SequenceFeature { inner })
        .collect()
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SequenceFeature>()?;
    Ok(())
}
