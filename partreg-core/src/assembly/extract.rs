//! Per-standard feature extractors.
//!
//! An extractor is only called after its standard's detector accepted the
//! same sequence. If it then cannot find a motif the two disagree, which is
//! reported as [`AssemblyError::ExtractionInconsistency`] and never papered over.

use crate::assembly::options::ClassifierOptions;
use crate::assembly::signature::{JunctionHit, JunctionSignature, Probe, BIOBRICK_A, BIOBRICK_B};
use crate::assembly::AssemblyStandard;
use crate::error::{AssemblyError, AssemblyResult};
use crate::seq::search::{self, SearchView};
use crate::seq::{FeatureCollection, FeatureKind, Sequence, SequenceFeature, Strand};
use log::{debug, error};

fn build_features(
    signature: &JunctionSignature,
    hit: &JunctionHit,
) -> AssemblyResult<FeatureCollection> {
    let mut features = FeatureCollection::new();
    features.push(SequenceFeature::new(
        signature.prefix_name,
        hit.prefix_start,
        hit.prefix_end(),
        Strand::Forward,
        FeatureKind::Junction,
    )?);
    if let Some((start, end)) = hit.interior() {
        features.push(SequenceFeature::new(
            signature.body_name,
            start,
            end,
            Strand::Forward,
            FeatureKind::PartBody,
        )?);
    }
    features.push(SequenceFeature::new(
        signature.suffix_name,
        hit.suffix_start,
        hit.suffix_end(),
        Strand::Forward,
        FeatureKind::Junction,
    )?);
    Ok(features)
}

fn note_repeated_motifs(signature: &JunctionSignature, hay: &[u8], sequence: &Sequence) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for motif in signature.prefixes.iter().copied().chain(std::iter::once(signature.suffix)) {
        let n = search::count_overlap(hay, motif.as_bytes());
        if n > 1 {
            debug!(
                "{}: motif {} occurs {} times, using the leftmost in its window",
                sequence.label(),
                motif,
                n
            );
        }
    }
}

fn inconsistency(
    standard: AssemblyStandard,
    motif: &'static str,
    sequence: &Sequence,
) -> AssemblyError {
    error!(
        "extraction inconsistency: {} matched {} but motif {} is missing",
        sequence.label(),
        standard,
        motif
    );
    AssemblyError::ExtractionInconsistency {
        standard,
        motif,
        sequence: sequence.label().to_string().into_boxed_str(),
    }
}

fn extract_flanked(
    standard: AssemblyStandard,
    signature: &JunctionSignature,
    sequence: &Sequence,
    view: &SearchView,
    options: &ClassifierOptions,
) -> AssemblyResult<FeatureCollection> {
    let slack = options.junction_window;

    let forward = match signature.probe(view.forward(), slack) {
        Probe::Found(hit) => {
            note_repeated_motifs(signature, view.forward(), sequence);
            return build_features(signature, &hit);
        }
        missing => missing,
    };

    if options.search_reverse {
        if let Probe::Found(hit) = signature.probe(view.reverse(), slack) {
            note_repeated_motifs(signature, view.reverse(), sequence);
            // Located on the reverse complement; map back onto the sequence as given.
            let len = view.len();
            let mut features: FeatureCollection = build_features(signature, &hit)?
                .into_iter()
                .map(|f| f.reverse_complement(len))
                .collect();
            features.sort_by_position();
            return Ok(features);
        }
    }

    let motif = match forward {
        Probe::MissingSuffix => signature.suffix,
        _ => signature.prefixes[0],
    };
    Err(inconsistency(standard, motif, sequence))
}

pub fn extract_biobrick_a(
    sequence: &Sequence,
    view: &SearchView,
    options: &ClassifierOptions,
) -> AssemblyResult<FeatureCollection> {
    extract_flanked(AssemblyStandard::BiobrickA, &BIOBRICK_A, sequence, view, options)
}

pub fn extract_biobrick_b(
    sequence: &Sequence,
    view: &SearchView,
    options: &ClassifierOptions,
) -> AssemblyResult<FeatureCollection> {
    extract_flanked(AssemblyStandard::BiobrickB, &BIOBRICK_B, sequence, view, options)
}

/// Raw parts make no structural promises, so there is nothing to extract.
pub fn extract_raw() -> FeatureCollection {
    FeatureCollection::new()
}

pub(crate) fn extract_view(
    standard: AssemblyStandard,
    sequence: &Sequence,
    view: &SearchView,
    options: &ClassifierOptions,
) -> AssemblyResult<FeatureCollection> {
    let features = match standard {
        AssemblyStandard::BiobrickA => extract_biobrick_a(sequence, view, options)?,
        AssemblyStandard::BiobrickB => extract_biobrick_b(sequence, view, options)?,
        AssemblyStandard::Raw => extract_raw(),
        AssemblyStandard::Unknown => {
            return Err(AssemblyError::NoStandardMatched {
                sequence: sequence.label().to_string().into_boxed_str(),
            })
        }
    };
    debug_assert!(!features.has_overlapping_junctions());
    debug_assert!(features.validate_within(sequence.len()).is_ok());
    Ok(features)
}

/// Features of `sequence` under `standard`, which its detector must have accepted.
pub fn extract(
    standard: AssemblyStandard,
    sequence: &Sequence,
    options: &ClassifierOptions,
) -> AssemblyResult<FeatureCollection> {
    extract_view(standard, sequence, &sequence.search_view(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::dna::reverse_complement;
    use crate::assembly::signature::{
        BIOBRICK_A_CDS_PREFIX, BIOBRICK_A_PREFIX, BIOBRICK_A_SUFFIX, BIOBRICK_B_PREFIX,
        BIOBRICK_B_SUFFIX,
    };

    fn seq(text: &str) -> Sequence {
        Sequence::parse(text).unwrap()
    }

    fn spans(features: &FeatureCollection) -> Vec<(&str, usize, usize, i8)> {
        features
            .iter()
            .map(|f| (f.name(), f.start(), f.end(), f.strand().as_i8()))
            .collect()
    }

    #[test]
    fn biobrick_b_junctions_and_body() {
        let s = seq(&format!("{BIOBRICK_B_PREFIX}ATGCCCTAA{BIOBRICK_B_SUFFIX}"));
        let features = extract(AssemblyStandard::BiobrickB, &s, &ClassifierOptions::default())
            .unwrap();
        assert_eq!(
            spans(&features),
            vec![
                ("BioBrick B prefix", 0, 14, 1),
                ("BioBrick B part", 15, 23, 1),
                ("BioBrick B suffix", 24, 38, 1),
            ]
        );
        assert_eq!(features.junctions().count(), 2);
        assert_eq!(features[1].kind(), FeatureKind::PartBody);
    }

    #[test]
    fn empty_interior_yields_two_junctions() {
        let s = seq(&format!("{BIOBRICK_A_PREFIX}{BIOBRICK_A_SUFFIX}"));
        let features = extract(AssemblyStandard::BiobrickA, &s, &ClassifierOptions::default())
            .unwrap();
        assert_eq!(features.len(), 2);
        assert!(features.part_body().is_none());
    }

    #[test]
    fn cds_prefix_is_shorter() {
        let s = seq(&format!("{BIOBRICK_A_CDS_PREFIX}ATGAAATAA{BIOBRICK_A_SUFFIX}"));
        let features = extract(AssemblyStandard::BiobrickA, &s, &ClassifierOptions::default())
            .unwrap();
        assert_eq!(features[0].end(), 19);
        assert_eq!(features[1].start(), 20);
    }

    #[test]
    fn reverse_part_maps_back_to_given_coordinates() {
        let forward = format!("{BIOBRICK_A_PREFIX}ATGAAATAA{BIOBRICK_A_SUFFIX}");
        let rc = String::from_utf8(reverse_complement(forward.as_bytes())).unwrap();
        let s = seq(&rc);
        let features = extract(AssemblyStandard::BiobrickA, &s, &ClassifierOptions::default())
            .unwrap();
        // suffix (21) + body (9) + prefix (22) = 52 bases
        assert_eq!(
            spans(&features),
            vec![
                ("BioBrick A suffix", 0, 20, -1),
                ("BioBrick A part", 21, 29, -1),
                ("BioBrick A prefix", 30, 51, -1),
            ]
        );
        assert!(!features.has_overlapping_junctions());
    }

    #[test]
    fn raw_extracts_nothing() {
        let s = seq("ACGTACGTACGT");
        let features = extract(AssemblyStandard::Raw, &s, &ClassifierOptions::default()).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn unknown_has_no_extractor() {
        let s = seq("ACGT");
        let err = extract(AssemblyStandard::Unknown, &s, &ClassifierOptions::default())
            .unwrap_err();
        assert!(matches!(err, AssemblyError::NoStandardMatched { .. }));
    }

    #[test]
    fn missing_motif_is_an_inconsistency() {
        let s = seq(&format!("ACGTACGT{BIOBRICK_A_SUFFIX}")).with_id("part-7");
        let err = extract(AssemblyStandard::BiobrickA, &s, &ClassifierOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            AssemblyError::ExtractionInconsistency {
                standard: AssemblyStandard::BiobrickA,
                motif: BIOBRICK_A_PREFIX,
                sequence: "part-7 (29 bp)".into(),
            }
        );
        assert!(err.is_fatal());

        let s = seq(&format!("{BIOBRICK_B_PREFIX}ACGTACGT"));
        let err = extract(AssemblyStandard::BiobrickB, &s, &ClassifierOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::ExtractionInconsistency { motif, .. } if motif == BIOBRICK_B_SUFFIX
        ));
    }
}
