use serde::Serialize;

use assistant_lang::ast::ControlVars;
use assistant_lang::Value;

/// The dual result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Usable for branching.
    pub logical: bool,
    /// The data the expression carries, kept even when `logical` is false.
    pub value: Value,
}

impl Evaluation {
    pub fn new(logical: bool, value: impl Into<Value>) -> Self {
        Self {
            logical,
            value: value.into(),
        }
    }
}

/// A script section as handed over by the loader: a header line such as
/// `if $foo` or `else`, and an opaque body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<B> {
    pub header: String,
    pub body: B,
}

impl<B> Section<B> {
    pub fn new(header: impl Into<String>, body: B) -> Self {
        Self {
            header: header.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BranchKind {
    If,
    Else,
}

impl BranchKind {
    pub fn index(self) -> usize {
        match self {
            BranchKind::If => 0,
            BranchKind::Else => 1,
        }
    }
}

/// Which side of an if/else applies.
#[derive(Debug, PartialEq, Eq)]
pub struct Branch<'s, B> {
    pub kind: BranchKind,
    /// The section after the `if` is an `else` the walker must step over.
    pub skip_next: bool,
    /// Body to run; `None` when the condition is false and there is no else.
    pub body: Option<&'s B>,
}

/// One iteration's binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LoopItem {
    Scalar(Value),
    Pair(String, Value),
}

/// Loop control variables with the items they iterate over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoopIterable {
    pub control_vars: ControlVars,
    pub items: Vec<LoopItem>,
}
