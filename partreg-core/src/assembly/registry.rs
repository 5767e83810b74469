use crate::assembly::AssemblyStandard;
use crate::error::{AssemblyError, AssemblyResult};
use std::sync::LazyLock;

/// Ordered, read-only table of the standards a classifier tries.
///
/// Order is the tie-break: a sequence that satisfies several signatures gets
/// the first registered one. The default order is BioBrick A, BioBrick B,
/// then the raw catch-all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandardRegistry {
    order: Vec<AssemblyStandard>,
}

static GLOBAL: LazyLock<StandardRegistry> = LazyLock::new(StandardRegistry::default);

impl Default for StandardRegistry {
    fn default() -> Self {
        Self {
            order: vec![
                AssemblyStandard::BiobrickA,
                AssemblyStandard::BiobrickB,
                AssemblyStandard::Raw,
            ],
        }
    }
}

impl StandardRegistry {
    pub fn new(order: Vec<AssemblyStandard>) -> AssemblyResult<Self> {
        if order.contains(&AssemblyStandard::Unknown) {
            return Err(AssemblyError::InvalidRegistry {
                msg: "Unknown is a classification outcome, not a registrable standard".into(),
            });
        }
        for (i, standard) in order.iter().enumerate() {
            if order[..i].contains(standard) {
                return Err(AssemblyError::InvalidRegistry {
                    msg: format!("{standard} registered twice"),
                });
            }
        }
        if let Some(pos) = order.iter().position(|s| s.is_catch_all()) {
            if pos + 1 != order.len() {
                return Err(AssemblyError::InvalidRegistry {
                    msg: format!("{} must be registered last", order[pos]),
                });
            }
        }
        Ok(Self { order })
    }

    /// Process-wide default registry, built on first use.
    pub fn global() -> &'static StandardRegistry {
        &GLOBAL
    }

    pub fn standards(&self) -> &[AssemblyStandard] {
        &self.order
    }

    pub fn contains(&self, standard: AssemblyStandard) -> bool {
        self.order.contains(&standard)
    }

    pub fn has_catch_all(&self) -> bool {
        self.order.last().is_some_and(|s| s.is_catch_all())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
