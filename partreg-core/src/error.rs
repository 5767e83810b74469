use std::fmt;
use thiserror::Error;

use crate::assembly::AssemblyStandard;

/// Why a nucleotide string was refused at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceDefect {
    Empty,
    InvalidChar { ch: char, pos: usize },
}

impl fmt::Display for SequenceDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceDefect::Empty => write!(f, "sequence is empty"),
            SequenceDefect::InvalidChar { ch, pos } => {
                write!(f, "invalid character '{ch}' at position {pos}")
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("invalid sequence: {0}")]
    InvalidSequence(SequenceDefect),

    #[error("no assembly standard matched sequence {sequence} (is the raw catch-all registered?)")]
    NoStandardMatched { sequence: Box<str> },

    #[error("{standard} detector matched sequence {sequence} but motif {motif} could not be located")]
    ExtractionInconsistency {
        standard: AssemblyStandard,
        motif: &'static str,
        sequence: Box<str>,
    },

    #[error("invalid feature location: start={start}, end={end}{}", bound_suffix(.len))]
    InvalidLocation {
        start: usize,
        end: usize,
        len: Option<usize>,
    },

    #[error("invalid strand: {strand} (must be 1 or -1)")]
    InvalidStrand { strand: i8 },

    #[error("invalid standard registry: {msg}")]
    InvalidRegistry { msg: String },

    #[error("unknown assembly standard name: {name:?}")]
    UnknownStandardName { name: String },
}

impl AssemblyError {
    /// Errors that must abort the current request rather than be reported as bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AssemblyError::NoStandardMatched { .. } | AssemblyError::ExtractionInconsistency { .. }
        )
    }
}

pub type AssemblyResult<T> = Result<T, AssemblyError>;

fn bound_suffix(len: &Option<usize>) -> String {
    match len {
        Some(len) => format!(", sequence length={len}"),
        None => String::new(),
    }
}
