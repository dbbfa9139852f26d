// Nested NMN program expressions

use serde::{Deserialize, Serialize};

/// A single module invocation in an NMN program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramNode {
    pub name: String,
    pub identifier: i64,
}

/// Either a program node or an ordered list of nodes and subtrees.
///
/// The tree is owned and acyclic. Its depth comes from the model's program
/// length, so the walkers below keep an explicit stack instead of
/// recursing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NestedProgram {
    Program(ProgramNode),
    Nested(Vec<NestedProgram>),
}

impl NestedProgram {
    /// Number of levels from the root to the deepest element. A bare node
    /// has depth 1, as does an empty list.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1usize)];

        while let Some((expr, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let NestedProgram::Nested(children) = expr {
                stack.extend(children.iter().map(|child| (child, depth + 1)));
            }
        }

        max_depth
    }

    /// Program nodes in pre-order, left to right.
    pub fn programs(&self) -> Vec<&ProgramNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(expr) = stack.pop() {
            match expr {
                NestedProgram::Program(node) => out.push(node),
                NestedProgram::Nested(children) => stack.extend(children.iter().rev()),
            }
        }

        out
    }

    /// Look up a node by identifier, e.g. to pair it with its execution
    /// trace.
    pub fn find(&self, identifier: i64) -> Option<&ProgramNode> {
        self.programs().into_iter().find(|node| node.identifier == identifier)
    }
}
