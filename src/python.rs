//! Python bindings for syntaxcomp
//!
//! This module provides PyO3-based Python bindings for the Rust core.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::conllu::ConlluReader;
use crate::error::ComplexityError;
use crate::sentence::SentenceComplexity as RustSentenceComplexity;
use crate::text::TextComplexity as RustTextComplexity;

/// Convert ComplexityError to Python exception
impl From<ComplexityError> for PyErr {
    fn from(err: ComplexityError) -> PyErr {
        match err {
            ComplexityError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

fn config(verbose: bool) -> AnalysisConfig {
    AnalysisConfig::new().verbose(verbose)
}

/// Complexity measures for a single sentence.
///
/// Built from CoNLL-U text; only the first sentence is analysed.
#[pyclass(name = "SentenceComplexity")]
#[derive(Clone)]
pub struct PySentenceComplexity {
    inner: RustSentenceComplexity,
}

#[pymethods]
impl PySentenceComplexity {
    /// Analyse the first sentence of a CoNLL-U string.
    ///
    /// Args:
    ///     annotation: CoNLL-U formatted text
    ///     verbose: If True, info() starts with the text and the tree
    ///
    /// Raises:
    ///     ValueError: If the annotation is empty or malformed
    #[new]
    #[pyo3(signature = (annotation, verbose=false))]
    fn new(annotation: &str, verbose: bool) -> PyResult<Self> {
        let sentence = ConlluReader::from_str(annotation)
            .next()
            .ok_or(ComplexityError::EmptyInput)??;
        let inner = RustSentenceComplexity::with_config(&sentence, &config(verbose))?;
        Ok(PySentenceComplexity { inner })
    }

    #[getter]
    fn text(&self) -> String {
        self.inner.text().to_string()
    }

    #[getter]
    fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    #[getter]
    fn clause_count(&self) -> usize {
        self.inner.clause_count()
    }

    #[getter]
    fn clauses(&self) -> Vec<String> {
        self.inner.clause_texts().into_iter().map(String::from).collect()
    }

    #[getter]
    fn tunit_count(&self) -> usize {
        self.inner.tunit_count()
    }

    #[getter]
    fn tunits(&self) -> Vec<String> {
        self.inner.tunit_texts().into_iter().map(String::from).collect()
    }

    #[getter]
    fn np_count(&self) -> usize {
        self.inner.np_count()
    }

    #[getter]
    fn nps(&self) -> Vec<String> {
        self.inner.np_texts().into_iter().map(String::from).collect()
    }

    #[getter]
    fn tree_depth(&self) -> usize {
        self.inner.tree_depth()
    }

    #[getter]
    fn dependency_distances(&self) -> Vec<usize> {
        self.inner.dependency_distances().to_vec()
    }

    #[getter]
    fn mean_dependency_distance(&self) -> f64 {
        self.inner.mean_dependency_distance()
    }

    #[getter]
    fn pos_chain(&self) -> Vec<String> {
        self.inner.pos_chain().to_vec()
    }

    #[getter]
    fn deprel_chain(&self) -> Vec<String> {
        self.inner.deprel_chain().to_vec()
    }

    /// Report with one labelled metric per line.
    fn info(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "<SentenceComplexity words={} clauses={} depth={}>",
            self.inner.word_count(),
            self.inner.clause_count(),
            self.inner.tree_depth()
        )
    }
}

/// Complexity measures aggregated over a text.
#[pyclass(name = "TextComplexity")]
#[derive(Clone)]
pub struct PyTextComplexity {
    inner: RustTextComplexity,
}

#[pymethods]
impl PyTextComplexity {
    /// Analyse every sentence of a CoNLL-U string.
    ///
    /// Args:
    ///     annotation: CoNLL-U formatted text
    ///     verbose: If True, info() starts with the text
    ///
    /// Raises:
    ///     ValueError: If there is no sentence with words, or a tree is malformed
    #[new]
    #[pyo3(signature = (annotation, verbose=false))]
    fn new(annotation: &str, verbose: bool) -> PyResult<Self> {
        let inner = RustTextComplexity::read(ConlluReader::from_str(annotation), &config(verbose))?;
        Ok(PyTextComplexity { inner })
    }

    /// Analyse a CoNLL-U file.
    ///
    /// Automatically detects and handles gzip-compressed files (.conllu.gz).
    ///
    /// Args:
    ///     file_path: Path to CoNLL-U file
    ///     verbose: If True, info() starts with the text
    ///
    /// Raises:
    ///     IOError: If the file cannot be read
    #[classmethod]
    #[pyo3(signature = (file_path, verbose=false))]
    fn from_file(
        _cls: &Bound<'_, pyo3::types::PyType>,
        file_path: &str,
        verbose: bool,
    ) -> PyResult<Self> {
        let reader = ConlluReader::from_file(PathBuf::from(file_path))?;
        let inner = RustTextComplexity::read(reader, &config(verbose))?;
        Ok(PyTextComplexity { inner })
    }

    #[getter]
    fn text(&self) -> String {
        self.inner.text().to_string()
    }

    /// Per-sentence measures for the sentences that contain words.
    fn sentences(&self) -> Vec<PySentenceComplexity> {
        self.inner
            .sentences()
            .iter()
            .map(|inner| PySentenceComplexity {
                inner: inner.clone(),
            })
            .collect()
    }

    #[getter]
    fn sentence_count(&self) -> usize {
        self.inner.sentence_count()
    }

    #[getter]
    fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    #[getter]
    fn clause_count(&self) -> usize {
        self.inner.clause_count()
    }

    #[getter]
    fn tunit_count(&self) -> usize {
        self.inner.tunit_count()
    }

    #[getter]
    fn np_count(&self) -> usize {
        self.inner.np_count()
    }

    #[getter]
    fn mean_sentence_length(&self) -> f64 {
        self.inner.mean_sentence_length()
    }

    #[getter]
    fn mean_clause_length(&self) -> f64 {
        self.inner.mean_clause_length()
    }

    #[getter]
    fn mean_tunit_length(&self) -> f64 {
        self.inner.mean_tunit_length()
    }

    #[getter]
    fn clauses_per_sentence(&self) -> f64 {
        self.inner.clauses_per_sentence()
    }

    #[getter]
    fn clauses_per_tunit(&self) -> f64 {
        self.inner.clauses_per_tunit()
    }

    #[getter]
    fn mean_tree_depth(&self) -> f64 {
        self.inner.tree_depth().mean
    }

    #[getter]
    fn median_tree_depth(&self) -> f64 {
        self.inner.tree_depth().median
    }

    #[getter]
    fn min_tree_depth(&self) -> f64 {
        self.inner.tree_depth().min
    }

    #[getter]
    fn max_tree_depth(&self) -> f64 {
        self.inner.tree_depth().max
    }

    #[getter]
    fn mean_dependency_distance(&self) -> f64 {
        self.inner.mean_dependency_distance()
    }

    #[getter]
    fn node_to_terminal_ratio(&self) -> f64 {
        self.inner.node_to_terminal_ratio()
    }

    #[getter]
    fn pos_distance(&self) -> Option<f64> {
        self.inner.pos_distance()
    }

    #[getter]
    fn deprel_distance(&self) -> Option<f64> {
        self.inner.deprel_distance()
    }

    #[getter]
    fn average_np_length(&self) -> f64 {
        self.inner.average_np_length()
    }

    #[getter]
    fn complex_np_ratio(&self) -> f64 {
        self.inner.complex_np_ratio()
    }

    #[getter]
    fn combined_count(&self) -> usize {
        self.inner.combined_count()
    }

    #[getter]
    fn coordinate_count(&self) -> usize {
        self.inner.coordinate_count()
    }

    #[getter]
    fn subordinate_count(&self) -> usize {
        self.inner.subordinate_count()
    }

    #[getter]
    fn coordinate_to_combined(&self) -> f64 {
        self.inner.coordinate_to_combined()
    }

    #[getter]
    fn subordinate_to_combined(&self) -> f64 {
        self.inner.subordinate_to_combined()
    }

    #[getter]
    fn coordinate_to_subordinate(&self) -> f64 {
        self.inner.coordinate_to_subordinate()
    }

    #[getter]
    fn coordinate_to_sentence(&self) -> f64 {
        self.inner.coordinate_to_sentence()
    }

    #[getter]
    fn subordinate_to_sentence(&self) -> f64 {
        self.inner.subordinate_to_sentence()
    }

    /// Percentage of clauses per introducing relation, as (relation, percent) pairs.
    #[getter]
    fn clause_percentages(&self) -> Vec<(String, f64)> {
        self.inner
            .clause_percentages()
            .into_iter()
            .map(|(relation, percentage)| (relation.to_string(), percentage))
            .collect()
    }

    /// Report with one labelled metric per line.
    fn info(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "<TextComplexity sentences={} words={}>",
            self.inner.sentence_count(),
            self.inner.word_count()
        )
    }
}

#[pyfunction]
fn __version__() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pymodule]
fn syntaxcomp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySentenceComplexity>()?;
    m.add_class::<PyTextComplexity>()?;
    m.add_function(wrap_pyfunction!(__version__, m)?)?;

    Ok(())
}
