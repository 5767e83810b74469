//! Assembly-standard classification, feature extraction and reconciliation.
//!
//! Each [`AssemblyStandard`] owns a detector (`detect`) and an extractor
//! (`extract`). An [`AssemblyClassifier`] walks a [`StandardRegistry`] in
//! order, extracts features for the first standard whose detector accepts a
//! sequence, and decides with an [`AnnotationComparator`] whether previously
//! stored features survive re-analysis.

pub mod classifier;
pub mod compare;
pub mod detect;
pub mod extract;
pub mod options;
pub mod registry;
pub mod signature;

pub use classifier::{
    AnalysisOutcome, AnalysisRequest, AssemblyClassifier, Decision, Reconciliation,
};
pub use compare::{AnnotationComparator, ComparisonPolicy, Equivalence};
pub use options::ClassifierOptions;
pub use registry::StandardRegistry;

use crate::error::AssemblyError;
use crate::seq::FeatureCollection;
use std::fmt;
use std::str::FromStr;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssemblyStandard {
    BiobrickA,
    BiobrickB,
    Raw,
    Unknown,
}

impl AssemblyStandard {
    pub fn name(self) -> &'static str {
        match self {
            AssemblyStandard::BiobrickA => "BioBrick A",
            AssemblyStandard::BiobrickB => "BioBrick B",
            AssemblyStandard::Raw => "Raw",
            AssemblyStandard::Unknown => "Unknown",
        }
    }

    /// Stable upper-snake identifier, as stored by callers.
    pub fn code(self) -> &'static str {
        match self {
            AssemblyStandard::BiobrickA => "BIOBRICK_A",
            AssemblyStandard::BiobrickB => "BIOBRICK_B",
            AssemblyStandard::Raw => "RAW",
            AssemblyStandard::Unknown => "UNKNOWN",
        }
    }

    /// Matches anything not claimed by a more specific standard.
    pub fn is_catch_all(self) -> bool {
        self == AssemblyStandard::Raw
    }

    /// Standards defined by flanking junction motifs.
    pub fn is_flanked(self) -> bool {
        matches!(
            self,
            AssemblyStandard::BiobrickA | AssemblyStandard::BiobrickB
        )
    }
}

impl fmt::Display for AssemblyStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssemblyStandard {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            AssemblyStandard::BiobrickA,
            AssemblyStandard::BiobrickB,
            AssemblyStandard::Raw,
            AssemblyStandard::Unknown,
        ]
        .into_iter()
        .find(|standard| s == standard.name() || s.eq_ignore_ascii_case(standard.code()))
        .ok_or_else(|| AssemblyError::UnknownStandardName { name: s.to_string() })
    }
}

/// A standard together with the features extracted under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub standard: AssemblyStandard,
    pub features: FeatureCollection,
}
