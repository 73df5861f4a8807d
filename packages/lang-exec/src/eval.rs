//! Expression evaluation: expression + environment -> (logical, value).

use assistant_lang::ast::{Expr, Expression};
use assistant_lang::parser::parse_expression;
use assistant_lang::{SyntaxResult, Value};

use crate::control::Evaluation;
use crate::host::{CommandHost, CommandMode};
use crate::state::Environment;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate an expression value.
///
/// Text is parsed as an expression. Any other value is an already-evaluated
/// literal: its truthiness is the logical result and it is returned as-is.
pub fn evaluate(
    env: &Environment,
    host: &dyn CommandHost,
    expression: &Value,
) -> SyntaxResult<Evaluation> {
    match expression {
        Value::Text(text) => evaluate_str(env, host, text),
        literal => {
            tracing::debug!(kind = literal.type_name(), "literal expression");
            Ok(Evaluation::new(literal.is_truthy(), literal.clone()))
        }
    }
}

/// Parse and evaluate an expression string.
pub fn evaluate_str(
    env: &Environment,
    host: &dyn CommandHost,
    text: &str,
) -> SyntaxResult<Evaluation> {
    let parsed = parse_expression(text)?;
    Ok(evaluate_parsed(env, host, &parsed))
}

/// Evaluate an already-parsed expression. Cannot fail: a command that does
/// not succeed is a false result, not an error.
pub fn evaluate_parsed(
    env: &Environment,
    host: &dyn CommandHost,
    expression: &Expression,
) -> Evaluation {
    let (logical, value) = match &expression.expr {
        Expr::CommandSub(command_line) => run_substitution(env, host, command_line),
        Expr::Variable(name) => match env.get(name) {
            Some(value) if value.is_truthy() => (true, value.clone()),
            _ => (false, Value::empty()),
        },
        Expr::Defined(name) => (
            env.contains(name),
            env.get(name).cloned().unwrap_or_default(),
        ),
    };
    tracing::debug!(
        form = form_name(&expression.expr),
        negated = expression.negated,
        logical,
        "evaluated expression"
    );
    Evaluation::new(logical != expression.negated, value)
}

// ---------------------------------------------------------------------------
// Command substitution
// ---------------------------------------------------------------------------

fn run_substitution(env: &Environment, host: &dyn CommandHost, command_line: &str) -> (bool, Value) {
    match host.run_command(CommandMode::Unchecked, command_line, env) {
        Ok(outcome) => (outcome.is_success(), Value::Text(outcome.output)),
        Err(fault) => {
            tracing::debug!(error = %fault, command_line, "command substitution faulted");
            (false, Value::Text(fault.into_output()))
        }
    }
}

fn form_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::CommandSub(_) => "command",
        Expr::Variable(_) => "variable",
        Expr::Defined(_) => "defined",
    }
}
