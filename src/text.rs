//! Text-level aggregation of sentence measures
//!
//! Counts are summed across sentences and ratios are taken from the sums,
//! never averaged from per-sentence ratios. Per-sentence scalars are
//! reduced to a [`Summary`].

use crate::clause::ClauseKind;
use crate::config::AnalysisConfig;
use crate::conllu::ConlluReader;
use crate::error::{ComplexityError, Result};
use crate::metrics::{self, NodeCounts, Summary};
use crate::sentence::SentenceComplexity;
use crate::taxonomy::CLAUSE_RELATIONS;
use crate::tree::Sentence;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;

/// Complexity measures for a whole text, computed once on construction
#[derive(Debug, Clone, Serialize)]
pub struct TextComplexity {
    text: String,
    sentences: Vec<SentenceComplexity>,
    word_count: usize,
    clause_count: usize,
    tunit_count: usize,
    np_count: usize,
    np_word_count: usize,
    complex_np_count: usize,
    coordinate_count: usize,
    subordinate_count: usize,
    sentence_length: Summary,
    clauses_per_sentence: Summary,
    tunits_per_sentence: Summary,
    nps_per_sentence: Summary,
    tree_depth: Summary,
    dependency_distance: Summary,
    node_counts: NodeCounts,
    pos_distance: Option<f64>,
    deprel_distance: Option<f64>,
    clause_relations: Vec<(String, usize)>,
    #[serde(skip)]
    verbose: bool,
}

impl TextComplexity {
    /// Analyse a text with the default settings
    pub fn new(sentences: &[Sentence]) -> Result<Self> {
        Self::with_config(sentences, &AnalysisConfig::default())
    }

    /// Analyse every sentence, failing on the first malformed one
    pub fn with_config(sentences: &[Sentence], config: &AnalysisConfig) -> Result<Self> {
        let analyses = sentences
            .iter()
            .map(|sentence| SentenceComplexity::with_config(sentence, config))
            .collect::<Result<Vec<_>>>()?;
        Self::from_analyses(analyses, config.verbose)
    }

    /// Parse a CoNLL-U string and analyse it
    pub fn from_conllu(text: &str) -> Result<Self> {
        Self::read(ConlluReader::from_str(text), &AnalysisConfig::default())
    }

    /// Read a CoNLL-U file (plain or gzipped) and analyse it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::read(ConlluReader::from_file(path)?, &AnalysisConfig::default())
    }

    /// Analyse every sentence a reader yields
    pub fn read<R: BufRead>(reader: ConlluReader<R>, config: &AnalysisConfig) -> Result<Self> {
        let sentences = reader.collect::<std::result::Result<Vec<_>, _>>()?;
        Self::with_config(&sentences, config)
    }

    /// Reduce sentence analyses that were computed elsewhere
    ///
    /// The analyses are independent of each other, so callers may compute
    /// them in parallel and hand the ordered results here. Sentences without
    /// any word are left out of the text measures.
    pub fn from_analyses(analyses: Vec<SentenceComplexity>, verbose: bool) -> Result<Self> {
        let mut sentences = Vec::with_capacity(analyses.len());
        for (index, analysis) in analyses.into_iter().enumerate() {
            if analysis.word_count() == 0 {
                eprintln!("Warning: skipping sentence {} with no words", index + 1);
                continue;
            }
            sentences.push(analysis);
        }
        if sentences.is_empty() {
            return Err(ComplexityError::EmptyInput);
        }

        let mut node_counts = NodeCounts::default();
        let mut relation_counts: FxHashMap<&str, usize> = FxHashMap::default();
        let (mut coordinate_count, mut subordinate_count) = (0, 0);
        for sentence in &sentences {
            node_counts += sentence.node_counts();
            for clause in sentence.clauses() {
                *relation_counts.entry(clause.relation.as_str()).or_default() += 1;
                match clause.kind {
                    ClauseKind::Coordinate => coordinate_count += 1,
                    ClauseKind::Subordinate => subordinate_count += 1,
                    ClauseKind::Main => {}
                }
            }
        }
        let clause_relations = order_relations(relation_counts);

        let counts = |f: fn(&SentenceComplexity) -> usize| -> Vec<usize> {
            sentences.iter().map(f).collect()
        };
        let word_counts = counts(SentenceComplexity::word_count);
        let clause_counts = counts(SentenceComplexity::clause_count);
        let tunit_counts = counts(SentenceComplexity::tunit_count);
        let np_counts = counts(SentenceComplexity::np_count);
        let depths = counts(SentenceComplexity::tree_depth);
        let distances: Vec<f64> = sentences
            .iter()
            .map(SentenceComplexity::mean_dependency_distance)
            .collect();

        let pos_chains: Vec<&[String]> = sentences.iter().map(|s| s.pos_chain()).collect();
        let deprel_chains: Vec<&[String]> = sentences.iter().map(|s| s.deprel_chain()).collect();

        let summary =
            |values: &[usize]| Summary::of_counts(values).ok_or(ComplexityError::EmptyInput);

        Ok(Self {
            text: sentences
                .iter()
                .map(SentenceComplexity::text)
                .collect::<Vec<_>>()
                .join(" "),
            word_count: word_counts.iter().sum(),
            clause_count: clause_counts.iter().sum(),
            tunit_count: tunit_counts.iter().sum(),
            np_count: np_counts.iter().sum(),
            np_word_count: sentences
                .iter()
                .flat_map(|s| s.nps())
                .map(|np| np.len())
                .sum(),
            complex_np_count: sentences.iter().map(|s| s.complex_np_count()).sum(),
            coordinate_count,
            subordinate_count,
            sentence_length: summary(&word_counts)?,
            clauses_per_sentence: summary(&clause_counts)?,
            tunits_per_sentence: summary(&tunit_counts)?,
            nps_per_sentence: summary(&np_counts)?,
            tree_depth: summary(&depths)?,
            dependency_distance: Summary::of(&distances).ok_or(ComplexityError::EmptyInput)?,
            node_counts,
            pos_distance: metrics::mean_pairwise_distance(&pos_chains),
            deprel_distance: metrics::mean_pairwise_distance(&deprel_chains),
            clause_relations,
            verbose,
            sentences,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[SentenceComplexity] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    pub fn tunit_count(&self) -> usize {
        self.tunit_count
    }

    pub fn np_count(&self) -> usize {
        self.np_count
    }

    pub fn complex_np_count(&self) -> usize {
        self.complex_np_count
    }

    pub fn mean_sentence_length(&self) -> f64 {
        metrics::ratio(self.word_count, self.sentence_count())
    }

    pub fn mean_clause_length(&self) -> f64 {
        metrics::ratio(self.word_count, self.clause_count)
    }

    pub fn mean_tunit_length(&self) -> f64 {
        metrics::ratio(self.word_count, self.tunit_count)
    }

    pub fn clauses_per_sentence(&self) -> f64 {
        metrics::ratio(self.clause_count, self.sentence_count())
    }

    pub fn clauses_per_tunit(&self) -> f64 {
        metrics::ratio(self.clause_count, self.tunit_count)
    }

    /// Words per sentence
    pub fn sentence_length(&self) -> Summary {
        self.sentence_length
    }

    pub fn clause_count_summary(&self) -> Summary {
        self.clauses_per_sentence
    }

    pub fn tunit_count_summary(&self) -> Summary {
        self.tunits_per_sentence
    }

    pub fn np_count_summary(&self) -> Summary {
        self.nps_per_sentence
    }

    pub fn tree_depth(&self) -> Summary {
        self.tree_depth
    }

    /// Summary of the per-sentence mean dependency distances
    pub fn dependency_distance(&self) -> Summary {
        self.dependency_distance
    }

    /// Mean of the sentence means
    pub fn mean_dependency_distance(&self) -> f64 {
        self.dependency_distance.mean
    }

    pub fn node_to_terminal_ratio(&self) -> f64 {
        self.node_counts.ratio()
    }

    /// Mean pairwise edit distance between POS chains; `None` for one sentence
    pub fn pos_distance(&self) -> Option<f64> {
        self.pos_distance
    }

    /// Mean pairwise edit distance between deprel chains; `None` for one sentence
    pub fn deprel_distance(&self) -> Option<f64> {
        self.deprel_distance
    }

    pub fn average_np_length(&self) -> f64 {
        metrics::ratio(self.np_word_count, self.np_count)
    }

    pub fn complex_np_ratio(&self) -> f64 {
        metrics::ratio(self.complex_np_count, self.np_count)
    }

    /// Coordinate plus subordinate clauses
    pub fn combined_count(&self) -> usize {
        self.coordinate_count + self.subordinate_count
    }

    pub fn coordinate_count(&self) -> usize {
        self.coordinate_count
    }

    pub fn subordinate_count(&self) -> usize {
        self.subordinate_count
    }

    pub fn coordinate_to_combined(&self) -> f64 {
        metrics::ratio(self.coordinate_count, self.combined_count())
    }

    pub fn subordinate_to_combined(&self) -> f64 {
        metrics::ratio(self.subordinate_count, self.combined_count())
    }

    pub fn coordinate_to_subordinate(&self) -> f64 {
        metrics::ratio(self.coordinate_count, self.subordinate_count)
    }

    pub fn coordinate_to_sentence(&self) -> f64 {
        metrics::ratio(self.coordinate_count, self.sentence_count())
    }

    pub fn subordinate_to_sentence(&self) -> f64 {
        metrics::ratio(self.subordinate_count, self.sentence_count())
    }

    /// Clause counts per introducing relation, known relations first
    pub fn clause_relations(&self) -> &[(String, usize)] {
        &self.clause_relations
    }

    /// Share of clauses introduced by each relation, in percent
    pub fn clause_percentages(&self) -> Vec<(&str, f64)> {
        self.clause_relations
            .iter()
            .map(|(relation, count)| {
                (relation.as_str(), metrics::percentage(*count, self.clause_count))
            })
            .collect()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Known clause relations in their fixed order, then any others by name
fn order_relations(counts: FxHashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut ordered: Vec<(String, usize)> = CLAUSE_RELATIONS
        .iter()
        .filter_map(|relation| counts.get(relation).map(|&n| (relation.to_string(), n)))
        .collect();
    let mut others: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(relation, _)| !CLAUSE_RELATIONS.contains(relation))
        .map(|(relation, n)| (relation.to_string(), n))
        .collect();
    others.sort();
    ordered.extend(others);
    ordered
}
