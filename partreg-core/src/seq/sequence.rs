use crate::alphabets::dna;
use crate::error::{AssemblyError, AssemblyResult, SequenceDefect};
use crate::seq::search::SearchView;
use std::fmt;
use std::str::FromStr;

/// A validated nucleotide sequence handed to the engine for one request.
///
/// Construction is the input boundary: empty strings and bytes outside the
/// IUPAC nucleotide alphabet are refused here, so nothing downstream has to
/// re-check. Case is preserved; matching folds case on a private copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    id: Option<Box<str>>,
    bytes: Vec<u8>,
}

impl Sequence {
    pub fn new(bytes: impl Into<Vec<u8>>) -> AssemblyResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(AssemblyError::InvalidSequence(SequenceDefect::Empty));
        }
        if let Some((pos, b)) = dna::iupac().first_foreign(bytes.as_slice()) {
            return Err(AssemblyError::InvalidSequence(
                SequenceDefect::InvalidChar {
                    ch: b as char,
                    pos,
                },
            ));
        }
        Ok(Self { id: None, bytes })
    }

    /// Like [`Sequence::new`], after dropping ASCII whitespace.
    pub fn parse(text: &str) -> AssemblyResult<Self> {
        Self::new(normalize_seq_bytes(text))
    }

    pub fn with_id(mut self, id: impl Into<Box<str>>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Identity used in logs and error context.
    pub fn label(&self) -> SequenceLabel<'_> {
        SequenceLabel(self)
    }

    pub(crate) fn search_view(&self) -> SearchView {
        SearchView::new(&self.bytes)
    }
}

impl FromStr for Sequence {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SequenceLabel<'a>(&'a Sequence);

impl fmt::Display for SequenceLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.id() {
            Some(id) => write!(f, "{id} ({} bp)", self.0.len()),
            None => write!(f, "<unnamed> ({} bp)", self.0.len()),
        }
    }
}

pub fn normalize_seq_bytes(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for b in input.bytes() {
        if !b.is_ascii_whitespace() {
            out.push(b);
        }
    }
    out
}
