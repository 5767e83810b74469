use crate::seq::{FeatureCollection, SequenceFeature};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Equivalence {
    Equivalent,
    Different,
}

impl Equivalence {
    pub fn is_equivalent(self) -> bool {
        self == Equivalence::Equivalent
    }
}

/// Which feature fields take part in structural equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComparisonPolicy {
    /// Name, start, end and strand. Re-tagging a feature's kind in place is
    /// not a structural change.
    #[default]
    IgnoreKind,
    /// Also require identical kinds.
    Strict,
}

/// Structural equality of two feature collections, in order.
///
/// Not a set comparison: `[a, b]` and `[b, a]` differ, since feature order
/// along a sequence carries meaning.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnnotationComparator {
    policy: ComparisonPolicy,
}

impl AnnotationComparator {
    pub fn new(policy: ComparisonPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ComparisonPolicy {
        self.policy
    }

    pub fn compare(&self, a: &FeatureCollection, b: &FeatureCollection) -> Equivalence {
        if a.len() != b.len() {
            return Equivalence::Different;
        }
        let same = a
            .iter()
            .zip(b.iter())
            .all(|(fa, fb)| self.features_match(fa, fb));
        if same {
            Equivalence::Equivalent
        } else {
            Equivalence::Different
        }
    }

    fn features_match(&self, a: &SequenceFeature, b: &SequenceFeature) -> bool {
        let located = a.name() == b.name()
            && a.start() == b.start()
            && a.end() == b.end()
            && a.strand() == b.strand();
        match self.policy {
            ComparisonPolicy::IgnoreKind => located,
            ComparisonPolicy::Strict => located && a.kind() == b.kind(),
        }
    }
}

/// [`AnnotationComparator::compare`] under the default policy.
pub fn compare(a: &FeatureCollection, b: &FeatureCollection) -> Equivalence {
    AnnotationComparator::default().compare(a, b)
}
