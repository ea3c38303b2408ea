use log::{debug, trace};
use serde::Serialize;

use crate::error::Result;
use crate::report::{build_report, AlignmentReport};
use crate::types::{EditOp, EditScript};

/// Cost of inserting or deleting a single token.
const INDEL_COST: usize = 1;

/// `(m + 1) x (n + 1)` grid where cell `(i, j)` is the edit distance between
/// the first `i` reference tokens and the first `j` hypothesis tokens.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    pub fn build<T: PartialEq>(reference: &[T], hypothesis: &[T], substitution_cost: usize) -> Self {
        let rows = reference.len() + 1;
        let cols = hypothesis.len() + 1;
        let mut cells = vec![0; rows * cols];
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }
        for (i, r) in reference.iter().enumerate() {
            let i = i + 1;
            for (j, h) in hypothesis.iter().enumerate() {
                let j = j + 1;
                let deletion = cells[(i - 1) * cols + j] + INDEL_COST;
                let insertion = cells[i * cols + j - 1] + INDEL_COST;
                let substitution = cells[(i - 1) * cols + j - 1]
                    .saturating_add(if r == h { 0 } else { substitution_cost });
                cells[i * cols + j] = deletion.min(insertion).min(substitution);
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.at(i, j))
        } else {
            None
        }
    }

    /// Distance between the full sequences, i.e. the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.at(self.rows - 1, self.cols - 1)
    }

    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Up,
    Left,
}

/// Walks from `(m, n)` back to `(0, 0)`. At every cell the predecessor is the
/// lowest-valued one among those that realise the cell's value, with ties
/// going diagonal, then up, then left.
fn backtrace<T: PartialEq>(
    table: &DistanceTable,
    reference: &[T],
    hypothesis: &[T],
    substitution_cost: usize,
) -> EditScript {
    let (mut i, mut j) = (reference.len(), hypothesis.len());
    let mut ops = Vec::with_capacity(i.max(j));
    while (i, j) != (0, 0) {
        let current = table.at(i, j);
        let diagonal = (i > 0 && j > 0).then(|| {
            let added = if reference[i - 1] == hypothesis[j - 1] {
                0
            } else {
                substitution_cost
            };
            (table.at(i - 1, j - 1), added, Step::Diagonal)
        });
        let up = (i > 0).then(|| (table.at(i - 1, j), INDEL_COST, Step::Up));
        let left = (j > 0).then(|| (table.at(i, j - 1), INDEL_COST, Step::Left));

        let best = [diagonal, up, left]
            .into_iter()
            .flatten()
            .filter(|(value, added, _)| value.saturating_add(*added) == current)
            .fold(None, |best: Option<(usize, Step)>, (value, _, step)| match best {
                Some((lowest, _)) if lowest <= value => best,
                _ => Some((value, step)),
            });
        let Some((_, step)) = best else {
            unreachable!("cell ({i}, {j}) has no predecessor realising distance {current}");
        };

        let op = match step {
            Step::Diagonal => {
                i -= 1;
                j -= 1;
                if reference[i] == hypothesis[j] {
                    EditOp::Equal {
                        reference: i,
                        hypothesis: j,
                    }
                } else {
                    EditOp::Substitution {
                        reference: i,
                        hypothesis: j,
                    }
                }
            }
            Step::Up => {
                i -= 1;
                EditOp::Deletion { reference: i }
            }
            Step::Left => {
                j -= 1;
                EditOp::Insertion { hypothesis: j }
            }
        };
        trace!("backtrace step to ({i}, {j}): {op:?}");
        ops.push(op);
    }
    ops.reverse();
    EditScript::from_ops(ops)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub script: EditScript,
    pub distance: usize,
}

impl Alignment {
    pub fn into_parts(self) -> (EditScript, usize) {
        (self.script, self.distance)
    }

    /// Like [`build_report`], but `distance` is this alignment's table
    /// distance, which differs from the error count under a non-unit weight.
    pub fn report<T: PartialEq>(&self, reference: &[T], hypothesis: &[T]) -> Result<AlignmentReport> {
        let mut report = build_report(reference, hypothesis, &self.script)?;
        report.distance = self.distance;
        Ok(report)
    }
}

/// Aligns with unit costs for substitution, insertion and deletion.
pub fn align<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Alignment {
    align_weighted(reference, hypothesis, 1)
}

/// Aligns with a custom substitution weight. Insertions and deletions cost 1.
///
/// Total over all inputs, including empty sequences on either side.
pub fn align_weighted<T: PartialEq>(
    reference: &[T],
    hypothesis: &[T],
    substitution_cost: usize,
) -> Alignment {
    let table = DistanceTable::build(reference, hypothesis, substitution_cost);
    let distance = table.distance();
    debug!(
        "aligned {}x{} table, substitution cost {substitution_cost}, distance {distance}",
        table.rows(),
        table.cols()
    );
    let script = backtrace(&table, reference, hypothesis, substitution_cost);
    Alignment { script, distance }
}

/// Edit distance only, keeping two rows of the table instead of all of it.
pub fn edit_distance<T: PartialEq>(reference: &[T], hypothesis: &[T], substitution_cost: usize) -> usize {
    let n = hypothesis.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    for (i, r) in reference.iter().enumerate() {
        curr[0] = i + 1;
        for (j, h) in hypothesis.iter().enumerate() {
            let cost = if r == h { 0 } else { substitution_cost };
            curr[j + 1] = (prev[j + 1] + INDEL_COST)
                .min(curr[j] + INDEL_COST)
                .min(prev[j].saturating_add(cost));
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}
