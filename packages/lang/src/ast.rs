use serde::Serialize;

/// The single form an expression takes once an optional `not` is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// `$(command line)`: the command line between the parentheses.
    CommandSub(String),
    /// `$name`, `${name}` or `"$name"`: the normalized name.
    Variable(String),
    /// `defined $name`: the normalized name.
    Defined(String),
}

/// A parsed expression string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    /// Set by a leading `not `. Inverts the logical result only.
    pub negated: bool,
    pub expr: Expr,
}

impl Expression {
    pub fn new(expr: Expr) -> Self {
        Expression {
            negated: false,
            expr,
        }
    }

    pub fn negate(expr: Expr) -> Self {
        Expression {
            negated: true,
            expr,
        }
    }
}

/// Loop control variables: one scalar name, or a key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<String>")]
pub enum ControlVars {
    Single(String),
    Pair(String, String),
}

impl ControlVars {
    pub fn names(&self) -> Vec<&str> {
        match self {
            ControlVars::Single(name) => vec![name],
            ControlVars::Pair(key, value) => vec![key, value],
        }
    }
}

impl From<ControlVars> for Vec<String> {
    fn from(vars: ControlVars) -> Self {
        match vars {
            ControlVars::Single(name) => vec![name],
            ControlVars::Pair(key, value) => vec![key, value],
        }
    }
}

/// A decomposed `for ... in ...` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForHeader {
    pub control_vars: ControlVars,
    /// Everything after `in`, verbatim (trimmed).
    pub expression: String,
}

/// Left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AssignTargets {
    /// `$x`: receives the value result.
    Value(String),
    /// `$ok, $x`: the first receives the logical result, the second the value.
    LogicalAndValue(String, String),
}
