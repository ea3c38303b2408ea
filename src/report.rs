use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result, Violation};
use crate::types::{EditOp, EditScript, OpKind, Side};

/// One aligned position, ready for a presentation layer to style.
/// Token text is passed through untouched; escaping is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSegment<'a, T> {
    pub kind: OpKind,
    pub reference: Option<&'a T>,
    pub hypothesis: Option<&'a T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub edit_script: EditScript,
    /// Edit distance. Equals `errors` unless the alignment used a
    /// non-unit substitution weight.
    pub distance: usize,
    /// Number of non-equal steps; the word error rate counts these.
    pub errors: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub substitutions: usize,
    pub equals: usize,
    pub reference_length: usize,
    pub hypothesis_length: usize,
}

impl AlignmentReport {
    pub fn word_error_rate(&self) -> WordErrorRate {
        if self.reference_length == 0 {
            WordErrorRate::Undefined
        } else {
            WordErrorRate::Defined(100.0 * self.errors as f64 / self.reference_length as f64)
        }
    }

    pub fn error_rate_percent(&self) -> Result<f64> {
        match self.word_error_rate() {
            WordErrorRate::Defined(percent) => Ok(percent),
            WordErrorRate::Undefined => Err(Error::UndefinedRate),
        }
    }
}

/// Error count over reference length, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordErrorRate {
    Defined(f64),
    /// The reference has no tokens.
    Undefined,
}

impl fmt::Display for WordErrorRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordErrorRate::Defined(percent) => {
                let rounded = (percent * 100.0).round() / 100.0;
                write!(f, "{rounded}%")
            }
            WordErrorRate::Undefined => f.write_str("undefined"),
        }
    }
}

struct Cursor<'a, T> {
    tokens: &'a [T],
    side: Side,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    fn new(tokens: &'a [T], side: Side) -> Self {
        Self {
            tokens,
            side,
            position: 0,
        }
    }

    fn take(&mut self, step: usize, kind: OpKind, tagged: usize) -> std::result::Result<&'a T, Violation> {
        let token = self.tokens.get(self.position).ok_or(Violation::IndexOutOfRange {
            step,
            kind,
            side: self.side,
            index: self.position,
            len: self.tokens.len(),
        })?;
        if tagged != self.position {
            return Err(Violation::PositionMismatch {
                step,
                kind,
                side: self.side,
                tagged,
                cursor: self.position,
            });
        }
        self.position += 1;
        Ok(token)
    }

    fn finish(&self) -> std::result::Result<(), Violation> {
        if self.position == self.tokens.len() {
            Ok(())
        } else {
            Err(Violation::Unconsumed {
                side: self.side,
                cursor: self.position,
                len: self.tokens.len(),
            })
        }
    }
}

/// Pairs every step of `script` with the tokens it consumes.
///
/// Fails if the script is not an alignment of exactly `reference` and
/// `hypothesis`.
pub fn render_segments<'a, T: PartialEq>(
    reference: &'a [T],
    hypothesis: &'a [T],
    script: &EditScript,
) -> Result<Vec<LabeledSegment<'a, T>>> {
    let mut ref_cursor = Cursor::new(reference, Side::Reference);
    let mut hyp_cursor = Cursor::new(hypothesis, Side::Hypothesis);
    let mut segments = Vec::with_capacity(script.len());
    for (step, op) in script.iter().enumerate() {
        let kind = op.kind();
        let segment = match *op {
            EditOp::Equal {
                reference: r,
                hypothesis: h,
            } => {
                let ref_token = ref_cursor.take(step, kind, r)?;
                let hyp_token = hyp_cursor.take(step, kind, h)?;
                if ref_token != hyp_token {
                    return Err(Violation::NotEqual {
                        step,
                        reference: r,
                        hypothesis: h,
                    }
                    .into());
                }
                LabeledSegment {
                    kind,
                    reference: Some(ref_token),
                    hypothesis: Some(hyp_token),
                }
            }
            EditOp::Substitution {
                reference: r,
                hypothesis: h,
            } => LabeledSegment {
                kind,
                reference: Some(ref_cursor.take(step, kind, r)?),
                hypothesis: Some(hyp_cursor.take(step, kind, h)?),
            },
            EditOp::Deletion { reference: r } => LabeledSegment {
                kind,
                reference: Some(ref_cursor.take(step, kind, r)?),
                hypothesis: None,
            },
            EditOp::Insertion { hypothesis: h } => LabeledSegment {
                kind,
                reference: None,
                hypothesis: Some(hyp_cursor.take(step, kind, h)?),
            },
        };
        segments.push(segment);
    }
    ref_cursor.finish()?;
    hyp_cursor.finish()?;
    Ok(segments)
}

/// Counts the operations of `script` after checking it against both sequences.
pub fn build_report<T: PartialEq>(
    reference: &[T],
    hypothesis: &[T],
    script: &EditScript,
) -> Result<AlignmentReport> {
    let segments = render_segments(reference, hypothesis, script)?;
    let mut report = AlignmentReport {
        edit_script: script.clone(),
        distance: 0,
        errors: 0,
        insertions: 0,
        deletions: 0,
        substitutions: 0,
        equals: 0,
        reference_length: reference.len(),
        hypothesis_length: hypothesis.len(),
    };
    for segment in &segments {
        match segment.kind {
            OpKind::Equal => report.equals += 1,
            OpKind::Substitution => report.substitutions += 1,
            OpKind::Deletion => report.deletions += 1,
            OpKind::Insertion => report.insertions += 1,
        }
    }
    report.errors = report.insertions + report.deletions + report.substitutions;
    report.distance = report.errors;
    Ok(report)
}
