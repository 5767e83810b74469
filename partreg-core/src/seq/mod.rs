pub mod feature;
pub mod search;
pub mod sequence;

pub use feature::{FeatureCollection, FeatureKind, SequenceFeature, Strand};
pub use sequence::{normalize_seq_bytes, Sequence, SequenceLabel};
