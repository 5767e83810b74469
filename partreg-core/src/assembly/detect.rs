//! Per-standard structural detectors.
//!
//! Detectors are pure predicates: absence of a signature is `false`, never an
//! error. The raw detector accepts everything and must be consulted last.

use crate::assembly::options::ClassifierOptions;
use crate::assembly::signature::{JunctionSignature, Probe, BIOBRICK_A, BIOBRICK_B};
use crate::assembly::AssemblyStandard;
use crate::seq::search::SearchView;
use crate::seq::Sequence;
use log::trace;

/// Which way round a flanked part was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    Reverse,
}

/// Orientation in which `signature` is present, forward taking precedence.
pub(crate) fn flanked(
    signature: &JunctionSignature,
    view: &SearchView,
    options: &ClassifierOptions,
) -> Option<Orientation> {
    if view.len() < signature.min_len() {
        return None;
    }
    let slack = options.junction_window;
    match signature.probe(view.forward(), slack) {
        Probe::Found(_) => return Some(Orientation::Forward),
        probe => trace!("{}: forward probe {:?}", signature.prefix_name, probe),
    }
    if !options.search_reverse {
        return None;
    }
    match signature.probe(view.reverse(), slack) {
        Probe::Found(_) => Some(Orientation::Reverse),
        probe => {
            trace!("{}: reverse probe {:?}", signature.prefix_name, probe);
            None
        }
    }
}

pub fn detect_biobrick_a(view: &SearchView, options: &ClassifierOptions) -> bool {
    flanked(&BIOBRICK_A, view, options).is_some()
}

pub fn detect_biobrick_b(view: &SearchView, options: &ClassifierOptions) -> bool {
    flanked(&BIOBRICK_B, view, options).is_some()
}

pub fn detect_raw(_view: &SearchView) -> bool {
    true
}

pub(crate) fn detect_view(
    standard: AssemblyStandard,
    view: &SearchView,
    options: &ClassifierOptions,
) -> bool {
    match standard {
        AssemblyStandard::BiobrickA => detect_biobrick_a(view, options),
        AssemblyStandard::BiobrickB => detect_biobrick_b(view, options),
        AssemblyStandard::Raw => detect_raw(view),
        AssemblyStandard::Unknown => false,
    }
}

/// Does `sequence` carry the structural signature of `standard`?
pub fn detect(standard: AssemblyStandard, sequence: &Sequence, options: &ClassifierOptions) -> bool {
    detect_view(standard, &sequence.search_view(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::dna::reverse_complement;
    use crate::assembly::signature::{
        BIOBRICK_A_PREFIX, BIOBRICK_A_SUFFIX, BIOBRICK_B_PREFIX, BIOBRICK_B_SUFFIX,
    };

    fn seq(text: &str) -> Sequence {
        Sequence::parse(text).unwrap()
    }

    #[test]
    fn biobrick_a_forward() {
        let s = seq(&format!("{BIOBRICK_A_PREFIX}ATGAAATAA{BIOBRICK_A_SUFFIX}"));
        let opts = ClassifierOptions::default();
        assert!(detect(AssemblyStandard::BiobrickA, &s, &opts));
        assert!(!detect(AssemblyStandard::BiobrickB, &s, &opts));
        assert!(detect(AssemblyStandard::Raw, &s, &opts));
        assert!(!detect(AssemblyStandard::Unknown, &s, &opts));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let s = seq(&format!("{BIOBRICK_B_PREFIX}ccgg{BIOBRICK_B_SUFFIX}").to_lowercase());
        assert!(detect(
            AssemblyStandard::BiobrickB,
            &s,
            &ClassifierOptions::default()
        ));
    }

    #[test]
    fn reverse_orientation_is_optional() {
        let forward = format!("{BIOBRICK_A_PREFIX}ATGAAATAA{BIOBRICK_A_SUFFIX}");
        let rc = String::from_utf8(reverse_complement(forward.as_bytes())).unwrap();
        let s = seq(&rc);
        let view = s.search_view();

        let opts = ClassifierOptions::default();
        assert_eq!(flanked(&BIOBRICK_A, &view, &opts), Some(Orientation::Reverse));

        let opts = opts.with_reverse_search(false);
        assert_eq!(flanked(&BIOBRICK_A, &view, &opts), None);
    }

    #[test]
    fn internal_motifs_outside_window_are_ignored() {
        let s = seq(&format!("TTTT{BIOBRICK_A_PREFIX}ACGT{BIOBRICK_A_SUFFIX}TTTT"));
        let opts = ClassifierOptions::default();
        assert!(!detect(AssemblyStandard::BiobrickA, &s, &opts));
        assert!(detect(
            AssemblyStandard::BiobrickA,
            &s,
            &opts.with_junction_window(4)
        ));
    }

    #[test]
    fn short_sequences_never_match_flanked_standards() {
        let s = seq("GAATTC");
        let opts = ClassifierOptions::default().with_junction_window(100);
        assert!(!detect(AssemblyStandard::BiobrickA, &s, &opts));
        assert!(!detect(AssemblyStandard::BiobrickB, &s, &opts));
        assert!(detect(AssemblyStandard::Raw, &s, &opts));
    }
}
