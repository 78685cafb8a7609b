//! Syntaxcomp: syntactic complexity measures from dependency parses
//!
//! Reads CoNLL-U annotations, builds a dependency tree per sentence and
//! extracts clauses, T-units and noun phrases from it. Sentence measures
//! are aggregated into text-level counts, ratios and summary statistics.
//! Core implementation in Rust with Python bindings.

pub mod bytes; // Byte-level field helpers for the reader
pub mod clause; // Clause extraction
pub mod config; // Analysis settings
pub mod conllu; // CoNLL-U file parsing
pub mod error; // Error taxonomy
pub mod metrics; // Depth, distance, edit distance and summary statistics
pub mod np; // Noun phrase extraction
pub mod report; // Human-readable reports
pub mod sentence; // Sentence-level measures
pub mod taxonomy; // Relation label classification
pub mod text; // Text-level aggregation
pub mod tree; // Tokens, sentences and dependency trees
pub mod tunit; // T-unit extraction

// Python bindings
#[cfg(feature = "pyo3")]
pub mod python;

// Re-exports for convenience
pub use clause::{Clause, ClauseKind};
pub use config::{AnalysisConfig, NpComplexityRule};
pub use conllu::ConlluReader;
pub use error::{ComplexityError, MalformedTreeError, Result, UnsupportedInputError};
pub use metrics::Summary;
pub use np::NounPhrase;
pub use sentence::SentenceComplexity;
pub use taxonomy::Role;
pub use text::TextComplexity;
pub use tree::{Features, Sentence, Token, Tree};
pub use tunit::TUnit;
