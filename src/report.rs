//! Human-readable reports
//!
//! One `Label: value` line per metric. Counts print as integers, means and
//! ratios with two decimals, percentages with one decimal and a `%`.
//! In verbose mode a report starts with the text and, for sentences, the
//! indented tree dump.

use crate::sentence::SentenceComplexity;
use crate::text::TextComplexity;
use std::fmt;

impl fmt::Display for SentenceComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_verbose() {
            writeln!(f, "{}", self.text())?;
            write!(f, "{}", self.tree().dump())?;
        }
        writeln!(f, "Number of Words: {}", self.word_count())?;
        writeln!(f, "Number of Clauses: {}", self.clause_count())?;
        writeln!(f, "Clauses: {:?}", self.clause_texts())?;
        writeln!(f, "Number of T-Units: {}", self.tunit_count())?;
        writeln!(f, "T-Units: {:?}", self.tunit_texts())?;
        writeln!(f, "Number of NPs: {}", self.np_count())?;
        writeln!(f, "NPs: {:?}", self.np_texts())?;
        writeln!(f, "Tree Depth: {}", self.tree_depth())?;
        writeln!(f, "Mean Dependency Distance: {:.2}", self.mean_dependency_distance())?;
        writeln!(f, "POS Chain: {:?}", self.pos_chain())?;
        writeln!(f, "deprel Chain: {:?}", self.deprel_chain())
    }
}

impl fmt::Display for TextComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_verbose() {
            writeln!(f, "{}", self.text())?;
        }
        let depth = self.tree_depth();

        writeln!(f, "Number of Sentences: {}", self.sentence_count())?;
        writeln!(f, "Number of Words: {}", self.word_count())?;
        writeln!(f, "Number of Clauses: {}", self.clause_count())?;
        writeln!(f, "Number of T-Units: {}", self.tunit_count())?;
        writeln!(f, "Mean Sentence Length: {:.2}", self.mean_sentence_length())?;
        writeln!(f, "Mean Clause Length: {:.2}", self.mean_clause_length())?;
        writeln!(f, "Mean T-Unit Length: {:.2}", self.mean_tunit_length())?;
        writeln!(f, "Mean Number of Clauses per Sentence: {:.2}", self.clauses_per_sentence())?;
        writeln!(f, "Mean Number of Clauses per T-Unit: {:.2}", self.clauses_per_tunit())?;
        writeln!(f, "Mean Tree Depth: {:.2}", depth.mean)?;
        writeln!(f, "Median Tree Depth: {}", depth.median)?;
        writeln!(f, "Minimum Tree Depth: {}", depth.min)?;
        writeln!(f, "Maximum Tree Depth: {}", depth.max)?;
        writeln!(f, "Mean Dependency Distance: {:.2}", self.mean_dependency_distance())?;
        writeln!(f, "Node-to-Terminal-Node Ratio: {:.2}", self.node_to_terminal_ratio())?;
        // Undefined for a single sentence
        if let Some(distance) = self.pos_distance() {
            writeln!(f, "Average Levenshtein Distance between POS: {distance:.2}")?;
        }
        if let Some(distance) = self.deprel_distance() {
            writeln!(f, "Average Levenshtein Distance between deprel: {distance:.2}")?;
        }
        writeln!(f, "Average NP Length: {:.2}", self.average_np_length())?;
        writeln!(f, "Complex NP Ratio: {:.2}", self.complex_np_ratio())?;
        writeln!(f, "Number of Combined Clauses: {}", self.combined_count())?;
        writeln!(f, "Number of Coordinate Clauses: {}", self.coordinate_count())?;
        writeln!(f, "Number of Subordinate Clauses: {}", self.subordinate_count())?;
        writeln!(f, "Coordinate to Combined Clause Ratio: {:.2}", self.coordinate_to_combined())?;
        writeln!(f, "Subordinate to Combined Clause Ratio: {:.2}", self.subordinate_to_combined())?;
        writeln!(
            f,
            "Coordinate to Subordinate Clause Ratio: {:.2}",
            self.coordinate_to_subordinate()
        )?;
        writeln!(f, "Coordinate Clause to Sentence Ratio: {:.2}", self.coordinate_to_sentence())?;
        writeln!(f, "Subordinate Clause to Sentence Ratio: {:.2}", self.subordinate_to_sentence())?;
        for (relation, percentage) in self.clause_percentages() {
            writeln!(f, "Percentage of {relation} Clauses: {percentage:.1}%")?;
        }
        Ok(())
    }
}
