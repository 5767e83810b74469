use crate::assembly::compare::{AnnotationComparator, Equivalence};
use crate::assembly::detect::detect_view;
use crate::assembly::extract::extract_view;
use crate::assembly::options::ClassifierOptions;
use crate::assembly::registry::StandardRegistry;
use crate::assembly::{AssemblyStandard, Classification};
use crate::error::{AssemblyError, AssemblyResult};
use crate::seq::search::SearchView;
use crate::seq::{FeatureCollection, Sequence};
use log::{debug, trace};

/// Outcome of comparing fresh features with stored ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    KeepExisting,
    AdoptNew,
}

/// The decision and the feature set the caller should persist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    pub decision: Decision,
    pub features: FeatureCollection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub standard: AssemblyStandard,
    pub reconciliation: Reconciliation,
}

impl AnalysisOutcome {
    pub fn decision(&self) -> Decision {
        self.reconciliation.decision
    }

    pub fn features(&self) -> &FeatureCollection {
        &self.reconciliation.features
    }
}

/// One sequence plus whatever annotation the caller has on file for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub sequence: Sequence,
    pub existing: Option<FeatureCollection>,
}

impl AnalysisRequest {
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            existing: None,
        }
    }

    pub fn with_existing(mut self, existing: FeatureCollection) -> Self {
        self.existing = Some(existing);
        self
    }
}

/// Classifies sequences against a registry and reconciles their features.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent calls. Nothing is retried: every failure is a deterministic
/// function of the input and goes straight back to the caller.
#[derive(Clone, Copy, Debug)]
pub struct AssemblyClassifier<'r> {
    registry: &'r StandardRegistry,
    options: ClassifierOptions,
}

impl Default for AssemblyClassifier<'static> {
    fn default() -> Self {
        Self::new(StandardRegistry::global())
    }
}

impl<'r> AssemblyClassifier<'r> {
    pub fn new(registry: &'r StandardRegistry) -> Self {
        Self {
            registry,
            options: ClassifierOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ClassifierOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    pub fn registry(&self) -> &'r StandardRegistry {
        self.registry
    }

    fn classify_view(&self, sequence: &Sequence, view: &SearchView) -> AssemblyStandard {
        for &standard in self.registry.standards() {
            trace!("{}: trying {}", sequence.label(), standard);
            if detect_view(standard, view, &self.options) {
                debug!("{}: classified as {}", sequence.label(), standard);
                return standard;
            }
        }
        debug!("{}: no registered standard matched", sequence.label());
        AssemblyStandard::Unknown
    }

    /// First registered standard whose detector accepts `sequence`, or
    /// `Unknown` when the registry has no catch-all.
    pub fn classify(&self, sequence: &Sequence) -> AssemblyStandard {
        self.classify_view(sequence, &sequence.search_view())
    }

    /// [`classify`](Self::classify) for unvalidated text.
    pub fn classify_str(&self, text: &str) -> AssemblyResult<AssemblyStandard> {
        let sequence = Sequence::parse(text)?;
        Ok(self.classify(&sequence))
    }

    fn extract_with_view(
        &self,
        sequence: &Sequence,
        view: &SearchView,
        standard: AssemblyStandard,
    ) -> AssemblyResult<FeatureCollection> {
        if !self.registry.contains(standard) {
            return Err(AssemblyError::NoStandardMatched {
                sequence: sequence.label().to_string().into_boxed_str(),
            });
        }
        let features = extract_view(standard, sequence, view, &self.options)?;
        debug!(
            "{}: extracted {} {} features",
            sequence.label(),
            features.len(),
            standard
        );
        Ok(features)
    }

    /// Features of `sequence` under `standard`.
    pub fn extract_features(
        &self,
        sequence: &Sequence,
        standard: AssemblyStandard,
    ) -> AssemblyResult<FeatureCollection> {
        self.extract_with_view(sequence, &sequence.search_view(), standard)
    }

    /// Classify and extract in one pass.
    pub fn determine_features(&self, sequence: &Sequence) -> AssemblyResult<Classification> {
        let view = sequence.search_view();
        let standard = self.classify_view(sequence, &view);
        if standard == AssemblyStandard::Unknown {
            return Err(AssemblyError::NoStandardMatched {
                sequence: sequence.label().to_string().into_boxed_str(),
            });
        }
        let features = self.extract_with_view(sequence, &view, standard)?;
        Ok(Classification { standard, features })
    }

    /// Keep `existing` only if it is structurally equivalent to `new`;
    /// otherwise the fresh features replace it wholesale.
    pub fn reconcile(
        &self,
        new: FeatureCollection,
        existing: Option<FeatureCollection>,
    ) -> Reconciliation {
        let Some(existing) = existing else {
            return Reconciliation {
                decision: Decision::AdoptNew,
                features: new,
            };
        };
        let comparator = AnnotationComparator::new(self.options.comparison);
        match comparator.compare(&new, &existing) {
            Equivalence::Equivalent => Reconciliation {
                decision: Decision::KeepExisting,
                features: existing,
            },
            Equivalence::Different => Reconciliation {
                decision: Decision::AdoptNew,
                features: new,
            },
        }
    }

    /// Classify, extract and reconcile against the caller's stored features.
    pub fn analyze(
        &self,
        sequence: &Sequence,
        existing: Option<FeatureCollection>,
    ) -> AssemblyResult<AnalysisOutcome> {
        let Classification { standard, features } = self.determine_features(sequence)?;
        let reconciliation = self.reconcile(features, existing);
        debug!(
            "{}: {} with {} features, {:?}",
            sequence.label(),
            standard,
            reconciliation.features.len(),
            reconciliation.decision
        );
        Ok(AnalysisOutcome {
            standard,
            reconciliation,
        })
    }

    pub fn classify_batch(&self, sequences: &[Sequence]) -> Vec<AssemblyStandard> {
        par_map!(sequences, |sequence| self.classify(sequence))
    }

    /// Independent [`analyze`](Self::analyze) calls; one failure does not affect the others.
    pub fn analyze_batch(&self, requests: &[AnalysisRequest]) -> Vec<AssemblyResult<AnalysisOutcome>> {
        par_map!(requests, |request: &AnalysisRequest| {
            self.analyze(&request.sequence, request.existing.clone())
        })
    }
}
