#[macro_use]
mod par;

pub mod alphabets;
pub mod assembly;
pub mod error;
pub mod seq;

pub use assembly::{
    AnalysisOutcome, AnalysisRequest, AssemblyClassifier, AssemblyStandard, Classification,
    ClassifierOptions, ComparisonPolicy, Decision, Equivalence, Reconciliation, StandardRegistry,
};
pub use error::{AssemblyError, AssemblyResult, SequenceDefect};
pub use seq::{FeatureCollection, FeatureKind, Sequence, SequenceFeature, Strand};
