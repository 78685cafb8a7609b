//! Analysis settings

use serde::Serialize;

/// When a noun phrase counts as complex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NpComplexityRule {
    /// Dependents beyond the head that make a phrase complex on their own
    pub min_dependents: usize,
    /// Whether an adjectival, nominal or relative-clause modifier alone suffices
    pub modifier_trigger: bool,
}

impl Default for NpComplexityRule {
    fn default() -> Self {
        Self {
            min_dependents: 2,
            modifier_trigger: true,
        }
    }
}

/// Settings shared by sentence and text analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    pub np_rule: NpComplexityRule,
    /// Prepend the sentence text and tree dump to rendered reports
    pub verbose: bool,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn np_rule(mut self, np_rule: NpComplexityRule) -> Self {
        self.np_rule = np_rule;
        self
    }
}
