use crate::error::{AssemblyError, AssemblyResult};
use std::fmt;
use std::ops::Index;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn as_i8(self) -> i8 {
        match self {
            Strand::Forward => 1,
            Strand::Reverse => -1,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Strand::Forward => Strand::Reverse,
            Strand::Reverse => Strand::Forward,
        }
    }
}

impl TryFrom<i8> for Strand {
    type Error = AssemblyError;

    fn try_from(strand: i8) -> AssemblyResult<Self> {
        match strand {
            1 => Ok(Strand::Forward),
            -1 => Ok(Strand::Reverse),
            _ => Err(AssemblyError::InvalidStrand { strand }),
        }
    }
}

impl From<Strand> for i8 {
    fn from(strand: Strand) -> i8 {
        strand.as_i8()
    }
}

/// What a feature marks. Junctions and part bodies come from extractors;
/// anything a curator added is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Junction,
    PartBody,
    Other,
}

impl FeatureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKind::Junction => "junction",
            FeatureKind::PartBody => "part_body",
            FeatureKind::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "junction" => Some(FeatureKind::Junction),
            "part_body" => Some(FeatureKind::PartBody),
            "other" => Some(FeatureKind::Other),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named region with inclusive, zero-based `start..=end` coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SequenceFeature {
    name: Box<str>,
    start: usize,
    end: usize,
    strand: Strand,
    kind: FeatureKind,
}

impl SequenceFeature {
    pub fn new(
        name: impl Into<Box<str>>,
        start: usize,
        end: usize,
        strand: Strand,
        kind: FeatureKind,
    ) -> AssemblyResult<Self> {
        if start > end {
            return Err(AssemblyError::InvalidLocation {
                start,
                end,
                len: None,
            });
        }
        Ok(Self {
            name: name.into(),
            start,
            end,
            strand,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }

    pub fn overlaps(&self, other: &SequenceFeature) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn with_kind(mut self, kind: FeatureKind) -> Self {
        self.kind = kind;
        self
    }

    /// The same feature in the coordinates of the reverse complement of a
    /// sequence of length `len`.
    pub fn reverse_complement(&self, len: usize) -> Self {
        debug_assert!(self.end < len);
        let mut out = self.clone();
        out.start = len - 1 - self.end;
        out.end = len - 1 - self.start;
        out.strand = self.strand.flip();
        out
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureCollection {
    features: Vec<SequenceFeature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the given order; stored annotations are compared as persisted.
    pub fn from_features(features: Vec<SequenceFeature>) -> Self {
        Self { features }
    }

    pub fn push(&mut self, feature: SequenceFeature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&SequenceFeature> {
        self.features.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequenceFeature> {
        self.features.iter()
    }

    pub fn as_slice(&self) -> &[SequenceFeature] {
        &self.features
    }

    pub fn into_vec(self) -> Vec<SequenceFeature> {
        self.features
    }

    pub fn junctions(&self) -> impl Iterator<Item = &SequenceFeature> {
        self.features
            .iter()
            .filter(|f| f.kind() == FeatureKind::Junction)
    }

    pub fn part_body(&self) -> Option<&SequenceFeature> {
        self.features
            .iter()
            .find(|f| f.kind() == FeatureKind::PartBody)
    }

    pub(crate) fn sort_by_position(&mut self) {
        self.features.sort_by_key(|f| f.start());
    }

    /// Check every feature lies inside a sequence of `len` bases.
    pub fn validate_within(&self, len: usize) -> AssemblyResult<()> {
        match self.features.iter().find(|f| f.end() >= len) {
            Some(f) => Err(AssemblyError::InvalidLocation {
                start: f.start(),
                end: f.end(),
                len: Some(len),
            }),
            None => Ok(()),
        }
    }

    pub fn has_overlapping_junctions(&self) -> bool {
        let junctions: Vec<&SequenceFeature> = self.junctions().collect();
        junctions
            .iter()
            .enumerate()
            .any(|(i, a)| junctions[i + 1..].iter().any(|b| a.overlaps(b)))
    }
}

impl Index<usize> for FeatureCollection {
    type Output = SequenceFeature;

    fn index(&self, index: usize) -> &Self::Output {
        &self.features[index]
    }
}

impl FromIterator<SequenceFeature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = SequenceFeature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FeatureCollection {
    type Item = SequenceFeature;
    type IntoIter = std::vec::IntoIter<SequenceFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a SequenceFeature;
    type IntoIter = std::slice::Iter<'a, SequenceFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
