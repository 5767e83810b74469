use crate::assembly::compare::ComparisonPolicy;

/// Knobs shared by detectors, extractors and the comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Extra bases allowed before the prefix and after the suffix.
    pub junction_window: usize,
    /// Also accept parts deposited as their reverse complement.
    pub search_reverse: bool,
    pub comparison: ComparisonPolicy,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            junction_window: 0,
            search_reverse: true,
            comparison: ComparisonPolicy::IgnoreKind,
        }
    }
}

impl ClassifierOptions {
    pub fn with_junction_window(mut self, junction_window: usize) -> Self {
        self.junction_window = junction_window;
        self
    }

    pub fn with_reverse_search(mut self, search_reverse: bool) -> Self {
        self.search_reverse = search_reverse;
        self
    }

    pub fn with_comparison(mut self, comparison: ComparisonPolicy) -> Self {
        self.comparison = comparison;
        self
    }
}
