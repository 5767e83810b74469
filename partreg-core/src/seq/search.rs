use crate::alphabets::dna;
use memchr::memmem;
use std::cell::OnceCell;

/// Case-folded haystack of one sequence, with its reverse complement built on
/// first use.
#[derive(Debug)]
pub struct SearchView {
    forward: Vec<u8>,
    reverse: OnceCell<Vec<u8>>,
}

impl SearchView {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            forward: dna::fold_case(bytes),
            reverse: OnceCell::new(),
        }
    }

    pub fn forward(&self) -> &[u8] {
        &self.forward
    }

    pub fn reverse(&self) -> &[u8] {
        self.reverse
            .get_or_init(|| dna::reverse_complement(&self.forward))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Half-open byte range `[start, end)` of a haystack to search in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Leading window wide enough to hold a motif of `motif_len` shifted by up to `slack` bases.
    pub fn head(len: usize, motif_len: usize, slack: usize) -> Self {
        Self {
            start: 0,
            end: slack.saturating_add(motif_len).min(len),
        }
    }

    /// Trailing counterpart of [`Window::head`].
    pub fn tail(len: usize, motif_len: usize, slack: usize) -> Self {
        Self {
            start: len.saturating_sub(slack.saturating_add(motif_len)),
            end: len,
        }
    }

    /// Drop everything before `pos`.
    pub fn starting_at(self, pos: usize) -> Self {
        Self {
            start: self.start.max(pos),
            end: self.end,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Leftmost occurrence of `motif` inside `window`, as an offset into `hay`.
pub fn find(hay: &[u8], motif: &[u8], window: Window) -> Option<usize> {
    let len = hay.len();
    let start = window.start.min(len);
    let end = window.end.min(len);
    if start > end {
        return None;
    }
    if motif.is_empty() {
        return Some(start);
    }
    if motif.len() > end - start {
        return None;
    }

    memmem::find(&hay[start..end], motif).map(|i| start + i)
}

/// Number of (possibly overlapping) occurrences of `motif` anywhere in `hay`.
pub fn count_overlap(hay: &[u8], motif: &[u8]) -> usize {
    if motif.is_empty() {
        return hay.len() + 1;
    }

    let finder = memmem::Finder::new(motif);
    let mut count = 0usize;
    let mut i = 0usize;

    while i <= hay.len().saturating_sub(motif.len()) {
        match finder.find(&hay[i..]) {
            Some(pos) => {
                count += 1;
                i += pos + 1;
            }
            None => break,
        }
    }

    count
}
