#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::{PyAny, PyModule};

use partreg_core::assembly::{
    AssemblyClassifier, AssemblyStandard, ClassifierOptions, ComparisonPolicy, Decision,
};

use crate::feature::{extract_collection, wrap_collection, SequenceFeature};
use crate::utils::{assembly_err, extract_sequence};

fn options(junction_window: usize, search_reverse: bool, strict: bool) -> ClassifierOptions {
    let comparison = if strict {
        ComparisonPolicy::Strict
    } else {
        ComparisonPolicy::IgnoreKind
    };
    ClassifierOptions::default()
        .with_junction_window(junction_window)
        .with_reverse_search(search_reverse)
        .with_comparison(comparison)
}

fn decision_code(decision: Decision) -> &'static str {
    match decision {
        Decision::KeepExisting => "KEEP_EXISTING",
        Decision::AdoptNew => "ADOPT_NEW",
    }
}

#[pyfunction]
#[pyo3(signature = (seq, junction_window=0, search_reverse=true))]
fn classify(
    seq: &Bound<'_, PyAny>,
    junction_window: usize,
    search_reverse: bool,
) -> PyResult<&'static str> {
    let sequence = extract_sequence(seq)?;
    let classifier = AssemblyClassifier::default()
        .with_options(options(junction_window, search_reverse, false));
    Ok(classifier.classify(&sequence).code())
}

#[pyfunction]
#[pyo3(signature = (seq, standard, junction_window=0, search_reverse=true))]
fn extract_features(
    seq: &Bound<'_, PyAny>,
    standard: &str,
    junction_window: usize,
    search_reverse: bool,
) -> PyResult<Vec<SequenceFeature>> {
    let sequence = extract_sequence(seq)?;
    let standard: AssemblyStandard = standard.parse().map_err(assembly_err)?;
    let classifier = AssemblyClassifier::default()
        .with_options(options(junction_window, search_reverse, false));
    let features = classifier
        .extract_features(&sequence, standard)
        .map_err(assembly_err)?;
    Ok(wrap_collection(features))
}

#[pyfunction]
#[pyo3(signature = (new, existing=None, strict=false))]
fn reconcile(
    new: &Bound<'_, PyAny>,
    existing: Option<&Bound<'_, PyAny>>,
    strict: bool,
) -> PyResult<(&'static str, Vec<SequenceFeature>)> {
    let new = extract_collection(new)?;
    let existing = existing.map(extract_collection).transpose()?;
    let classifier = AssemblyClassifier::default().with_options(options(0, true, strict));
    let reconciliation = classifier.reconcile(new, existing);
    Ok((
        decision_code(reconciliation.decision),
        wrap_collection(reconciliation.features),
    ))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_function(wrap_pyfunction!(extract_features, m)?)?;
    m.add_function(wrap_pyfunction!(reconcile, m)?)?;
    Ok(())
}
