use std::fmt;

use serde::Serialize;

/// One step of an alignment. Positions are 0-based indices into the
/// sequence(s) the step consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    Equal { reference: usize, hypothesis: usize },
    Substitution { reference: usize, hypothesis: usize },
    Deletion { reference: usize },
    Insertion { hypothesis: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    Equal,
    Substitution,
    Deletion,
    Insertion,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Equal => "equal",
            OpKind::Substitution => "substitution",
            OpKind::Deletion => "deletion",
            OpKind::Insertion => "insertion",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EditOp {
    pub fn kind(&self) -> OpKind {
        match self {
            EditOp::Equal { .. } => OpKind::Equal,
            EditOp::Substitution { .. } => OpKind::Substitution,
            EditOp::Deletion { .. } => OpKind::Deletion,
            EditOp::Insertion { .. } => OpKind::Insertion,
        }
    }

    /// Reference position consumed by this step, if any.
    pub fn reference(&self) -> Option<usize> {
        match self {
            EditOp::Equal { reference, .. } => Some(*reference),
            EditOp::Substitution { reference, .. } => Some(*reference),
            EditOp::Deletion { reference } => Some(*reference),
            EditOp::Insertion { .. } => None,
        }
    }

    /// Hypothesis position consumed by this step, if any.
    pub fn hypothesis(&self) -> Option<usize> {
        match self {
            EditOp::Equal { hypothesis, .. } => Some(*hypothesis),
            EditOp::Substitution { hypothesis, .. } => Some(*hypothesis),
            EditOp::Deletion { .. } => None,
            EditOp::Insertion { hypothesis } => Some(*hypothesis),
        }
    }
}

/// Ordered edit operations, reading from the start of both sequences to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Wraps raw operations. Nothing is validated here; the reporter checks
    /// the script against the sequences it is applied to.
    pub fn from_ops(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn kinds(&self) -> Vec<OpKind> {
        self.ops.iter().map(EditOp::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;
    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Reference,
    Hypothesis,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Reference => f.write_str("reference"),
            Side::Hypothesis => f.write_str("hypothesis"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_consumption() {
        let sub = EditOp::Substitution {
            reference: 2,
            hypothesis: 3,
        };
        assert_eq!(sub.reference(), Some(2));
        assert_eq!(sub.hypothesis(), Some(3));
        assert_eq!(EditOp::Deletion { reference: 1 }.hypothesis(), None);
        assert_eq!(EditOp::Insertion { hypothesis: 0 }.reference(), None);
    }

    #[test]
    fn serializes_tagged() {
        let script = EditScript::from_ops(vec![
            EditOp::Equal {
                reference: 0,
                hypothesis: 0,
            },
            EditOp::Insertion { hypothesis: 1 },
        ]);
        let json = serde_json::to_string(&script).unwrap();
        assert_eq!(
            json,
            r#"[{"op":"equal","reference":0,"hypothesis":0},{"op":"insertion","hypothesis":1}]"#
        );
    }
}
