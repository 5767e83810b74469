//! Junction motifs that define each flanked assembly standard.
//!
//! Detectors and extractors of one standard read the same signature, so the
//! place a detector looked for a motif is exactly where the extractor looks.

use crate::seq::search::{self, Window};

/// BioBrick (RFC 10) prefix: EcoRI, NotI, XbaI.
pub const BIOBRICK_A_PREFIX: &str = "GAATTCGCGGCCGCTTCTAGAG";
/// Prefix used when the part is a coding sequence starting with ATG.
pub const BIOBRICK_A_CDS_PREFIX: &str = "GAATTCGCGGCCGCTTCTAG";
/// BioBrick (RFC 10) suffix: SpeI, NotI, PstI.
pub const BIOBRICK_A_SUFFIX: &str = "TACTAGTAGCGGCCGCTGCAG";

/// BglBrick prefix: EcoRI, BglII.
pub const BIOBRICK_B_PREFIX: &str = "GAATTCAAAAGATCT";
/// BglBrick suffix: BamHI, XhoI.
pub const BIOBRICK_B_SUFFIX: &str = "GGATCCTAACTCGAG";

#[derive(Debug)]
pub struct JunctionSignature {
    /// Tried in order; the first one present wins.
    pub prefixes: &'static [&'static str],
    pub suffix: &'static str,
    pub prefix_name: &'static str,
    pub suffix_name: &'static str,
    pub body_name: &'static str,
}

pub static BIOBRICK_A: JunctionSignature = JunctionSignature {
    prefixes: &[BIOBRICK_A_PREFIX, BIOBRICK_A_CDS_PREFIX],
    suffix: BIOBRICK_A_SUFFIX,
    prefix_name: "BioBrick A prefix",
    suffix_name: "BioBrick A suffix",
    body_name: "BioBrick A part",
};

pub static BIOBRICK_B: JunctionSignature = JunctionSignature {
    prefixes: &[BIOBRICK_B_PREFIX],
    suffix: BIOBRICK_B_SUFFIX,
    prefix_name: "BioBrick B prefix",
    suffix_name: "BioBrick B suffix",
    body_name: "BioBrick B part",
};

/// Where a signature's junctions sit in a case-folded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JunctionHit {
    pub prefix_start: usize,
    pub prefix_len: usize,
    pub suffix_start: usize,
    pub suffix_len: usize,
}

impl JunctionHit {
    pub fn prefix_end(&self) -> usize {
        self.prefix_start + self.prefix_len - 1
    }

    pub fn suffix_end(&self) -> usize {
        self.suffix_start + self.suffix_len - 1
    }

    /// Inclusive span strictly between the junctions, if any bases are there.
    pub fn interior(&self) -> Option<(usize, usize)> {
        let first = self.prefix_start + self.prefix_len;
        (self.suffix_start > first).then(|| (first, self.suffix_start - 1))
    }
}

/// Result of probing one orientation of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Found(JunctionHit),
    MissingPrefix,
    MissingSuffix,
}

impl JunctionSignature {
    /// Leftmost prefix occurrence in the head window, with its length.
    pub fn locate_prefix(&self, view: &[u8], slack: usize) -> Option<(usize, usize)> {
        self.prefixes.iter().find_map(|motif| {
            let window = Window::head(view.len(), motif.len(), slack);
            search::find(view, motif.as_bytes(), window).map(|pos| (pos, motif.len()))
        })
    }

    /// Leftmost suffix occurrence in the tail window at or after `from`.
    pub fn locate_suffix(&self, view: &[u8], slack: usize, from: usize) -> Option<usize> {
        let window = Window::tail(view.len(), self.suffix.len(), slack).starting_at(from);
        search::find(view, self.suffix.as_bytes(), window)
    }

    pub fn probe(&self, view: &[u8], slack: usize) -> Probe {
        let Some((prefix_start, prefix_len)) = self.locate_prefix(view, slack) else {
            return Probe::MissingPrefix;
        };
        match self.locate_suffix(view, slack, prefix_start + prefix_len) {
            Some(suffix_start) => Probe::Found(JunctionHit {
                prefix_start,
                prefix_len,
                suffix_start,
                suffix_len: self.suffix.len(),
            }),
            None => Probe::MissingSuffix,
        }
    }

    /// Shortest sequence that could carry this signature.
    pub fn min_len(&self) -> usize {
        let shortest_prefix = self.prefixes.iter().map(|p| p.len()).min().unwrap_or(0);
        shortest_prefix + self.suffix.len()
    }
}
