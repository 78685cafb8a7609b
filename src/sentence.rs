//! Sentence-level complexity measures

use crate::clause::{Clause, extract_clauses};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::metrics::{self, NodeCounts};
use crate::np::{NounPhrase, extract_nps};
use crate::tree::{Sentence, Tree};
use crate::tunit::{TUnit, extract_tunits};
use serde::Serialize;

/// Complexity measures for one sentence, computed once on construction
#[derive(Debug, Clone, Serialize)]
pub struct SentenceComplexity {
    text: String,
    #[serde(skip)]
    tree: Tree,
    word_count: usize,
    clauses: Vec<Clause>,
    tunits: Vec<TUnit>,
    nps: Vec<NounPhrase>,
    tree_depth: usize,
    dependency_distances: Vec<usize>,
    pos_chain: Vec<String>,
    deprel_chain: Vec<String>,
    node_counts: NodeCounts,
    #[serde(skip)]
    verbose: bool,
}

impl SentenceComplexity {
    /// Analyse a sentence with the default settings
    pub fn new(sentence: &Sentence) -> Result<Self> {
        Self::with_config(sentence, &AnalysisConfig::default())
    }

    pub fn with_config(sentence: &Sentence, config: &AnalysisConfig) -> Result<Self> {
        let tree = sentence.tree()?;

        let words: Vec<_> = tree
            .nodes()
            .iter()
            .map(|node| &node.token)
            .filter(|token| token.is_word())
            .collect();
        let pos_chain = words.iter().map(|token| token.upos.clone()).collect();
        let deprel_chain = words.iter().map(|token| token.deprel.clone()).collect();
        let word_count = words.len();

        let clauses = extract_clauses(&tree);
        let tunits = extract_tunits(&tree, &clauses);
        let nps = extract_nps(&tree, &config.np_rule);

        Ok(Self {
            text: sentence.text(),
            word_count,
            tree_depth: tree.max_depth(),
            dependency_distances: metrics::dependency_distances(&tree),
            node_counts: NodeCounts::of(&tree),
            pos_chain,
            deprel_chain,
            clauses,
            tunits,
            nps,
            tree,
            verbose: config.verbose,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Number of tokens that are not punctuation or symbols
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clause_texts(&self) -> Vec<&str> {
        self.clauses.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn tunits(&self) -> &[TUnit] {
        &self.tunits
    }

    pub fn tunit_count(&self) -> usize {
        self.tunits.len()
    }

    pub fn tunit_texts(&self) -> Vec<&str> {
        self.tunits.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn nps(&self) -> &[NounPhrase] {
        &self.nps
    }

    pub fn np_count(&self) -> usize {
        self.nps.len()
    }

    pub fn np_texts(&self) -> Vec<&str> {
        self.nps.iter().map(|np| np.text.as_str()).collect()
    }

    pub fn complex_np_count(&self) -> usize {
        self.nps.iter().filter(|np| np.complex).count()
    }

    pub fn tree_depth(&self) -> usize {
        self.tree_depth
    }

    pub fn dependency_distances(&self) -> &[usize] {
        &self.dependency_distances
    }

    /// Mean dependency distance over the sentence's words, 0.0 without words
    pub fn mean_dependency_distance(&self) -> f64 {
        let distances: Vec<f64> = self.dependency_distances.iter().map(|&d| d as f64).collect();
        metrics::mean(&distances).unwrap_or(0.0)
    }

    pub fn pos_chain(&self) -> &[String] {
        &self.pos_chain
    }

    pub fn deprel_chain(&self) -> &[String] {
        &self.deprel_chain
    }

    pub fn node_counts(&self) -> NodeCounts {
        self.node_counts
    }

    pub fn node_to_terminal_ratio(&self) -> f64 {
        self.node_counts.ratio()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
