use thiserror::Error;

use crate::types::{OpKind, Side};

/// An edit script that does not describe an alignment of exactly the
/// sequences it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("step {step} ({kind}) reads {side} token {index}, but the {side} has only {len} tokens")]
    IndexOutOfRange {
        step: usize,
        kind: OpKind,
        side: Side,
        index: usize,
        len: usize,
    },
    #[error("step {step} ({kind}) is tagged with {side} position {tagged}, but the {side} cursor is at {cursor}")]
    PositionMismatch {
        step: usize,
        kind: OpKind,
        side: Side,
        tagged: usize,
        cursor: usize,
    },
    #[error("step {step} is labelled equal, but reference token {reference} differs from hypothesis token {hypothesis}")]
    NotEqual {
        step: usize,
        reference: usize,
        hypothesis: usize,
    },
    #[error("script ends with the {side} cursor at {cursor}, but the {side} has {len} tokens")]
    Unconsumed { side: Side, cursor: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("contract violation: {0}")]
    ContractViolation(#[from] Violation),
    #[error("word error rate is undefined for an empty reference")]
    UndefinedRate,
}

pub type Result<T> = std::result::Result<T, Error>;
