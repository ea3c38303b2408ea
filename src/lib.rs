//! # wer-diff
//!
//! Word-level alignment of a reference transcript against a hypothesis.
//! The aligner computes a minimum edit distance table and backtraces it into
//! an edit script; the reporter checks that script against the two token
//! sequences and derives counts, the word error rate, and labelled segments
//! for display.
//!
//! ## Example
//!
//! ```rust
//! use wer_diff::{align, tokenize, OpKind};
//!
//! let reference = tokenize("the cat sat");
//! let hypothesis = tokenize("the dog sat");
//! let alignment = align(&reference, &hypothesis);
//! assert_eq!(alignment.distance, 1);
//! assert_eq!(
//!     alignment.script.kinds(),
//!     vec![OpKind::Equal, OpKind::Substitution, OpKind::Equal]
//! );
//!
//! let report = alignment.report(&reference, &hypothesis).unwrap();
//! assert_eq!(report.word_error_rate().to_string(), "33.33%");
//! ```

pub mod alignment;
pub mod error;
pub mod report;
pub mod tokenizer;
pub mod types;

pub use alignment::{align, align_weighted, edit_distance, Alignment, DistanceTable};
pub use error::{Error, Result, Violation};
pub use report::{build_report, render_segments, AlignmentReport, LabeledSegment, WordErrorRate};
pub use tokenizer::{tokenize, Token, TokenParser};
pub use types::{EditOp, EditScript, OpKind, Side};
