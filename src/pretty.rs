use std::fmt::Display;

use colored::Colorize;
use wer_diff::{LabeledSegment, OpKind};

/// One displayed row: the reference line above the hypothesis line, with
/// aligned tokens starting in the same column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub reference: String,
    pub hypothesis: String,
}

struct RowOutput {
    reference: String,
    hypothesis: String,
    out: Vec<Row>,
}

impl RowOutput {
    fn new() -> Self {
        Self {
            reference: String::new(),
            hypothesis: String::new(),
            out: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if self.reference.is_empty() && self.hypothesis.is_empty() {
            return;
        }
        self.out.push(Row {
            reference: self.reference.trim_end().to_string(),
            hypothesis: self.hypothesis.trim_end().to_string(),
        });
        self.reference.clear();
        self.hypothesis.clear();
    }

    // Widths are measured on the raw text, colors add no visible columns.
    fn pad(&mut self, left_width: usize, right_width: usize) {
        let width = left_width.max(right_width);
        self.reference.extend(std::iter::repeat(' ').take(width - left_width + 1));
        self.hypothesis
            .extend(std::iter::repeat(' ').take(width - right_width + 1));
    }

    fn add_same(&mut self, text: &str) {
        self.reference.push_str(text);
        self.hypothesis.push_str(text);
        let width = text.chars().count();
        self.pad(width, width);
    }

    fn add_substitution(&mut self, left: &str, right: &str) {
        self.reference.push_str(&left.red().to_string());
        self.hypothesis.push_str(&right.green().to_string());
        self.pad(left.chars().count(), right.chars().count());
    }

    fn add_deletion(&mut self, text: &str) {
        self.reference
            .push_str(&text.red().strikethrough().to_string());
        self.pad(text.chars().count(), 0);
    }

    fn add_insertion(&mut self, text: &str) {
        self.hypothesis.push_str(&text.green().to_string());
        self.pad(0, text.chars().count());
    }

    fn output(mut self) -> Vec<Row> {
        self.flush();
        self.out
    }
}

fn text<T: Display>(token: Option<&T>) -> String {
    token.map(|t| t.to_string()).unwrap_or_default()
}

/// Lays segments out in rows, starting a new row after every `row_width`
/// reference tokens. Insertions do not count towards the width; `0` keeps
/// everything on one row.
pub fn rows<T: Display>(segments: &[LabeledSegment<'_, T>], row_width: usize) -> Vec<Row> {
    let mut output = RowOutput::new();
    let mut reference_tokens = 0;
    for segment in segments {
        let reference = text(segment.reference);
        let hypothesis = text(segment.hypothesis);
        match segment.kind {
            OpKind::Equal => output.add_same(&reference),
            OpKind::Substitution => output.add_substitution(&reference, &hypothesis),
            OpKind::Deletion => output.add_deletion(&reference),
            OpKind::Insertion => output.add_insertion(&hypothesis),
        }
        if segment.kind != OpKind::Insertion {
            reference_tokens += 1;
            if row_width > 0 && reference_tokens == row_width {
                reference_tokens = 0;
                output.flush();
            }
        }
    }
    output.output()
}

pub fn pretty(rows: &[Row]) {
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("- {}", row.reference);
        println!("+ {}", row.hypothesis);
    }
}
