use assistant_lang::ast::ControlVars;
use assistant_lang::parser::parse_for;
use assistant_lang::{SyntaxError, SyntaxResult, Value};

use crate::control::{LoopItem, LoopIterable};
use crate::eval::evaluate_str;
use crate::host::CommandHost;
use crate::state::Environment;

/// Resolve a `for` header into its control variables and the items to bind
/// on each iteration.
///
/// The loop runs over the expression's value regardless of its logical
/// result, so a failing command still iterates over its output.
pub fn resolve_iterable(
    env: &Environment,
    host: &dyn CommandHost,
    header: &str,
) -> SyntaxResult<LoopIterable> {
    let parsed = parse_for(header).inspect_err(|e| tracing::error!("{e}"))?;
    let value = evaluate_str(env, host, &parsed.expression)
        .inspect_err(|e| tracing::error!("{e}"))?
        .value;

    let items = match (&parsed.control_vars, value) {
        (ControlVars::Pair(..), Value::Mapping(map)) => map
            .into_iter()
            .map(|(key, value)| LoopItem::Pair(key, value))
            .collect(),
        (ControlVars::Pair(..), other) => {
            let err = SyntaxError::Destructure {
                type_name: other.type_name(),
                expression: parsed.expression,
            };
            tracing::error!("{err}");
            return Err(err);
        }
        (ControlVars::Single(_), Value::Text(text)) => text
            .split_whitespace()
            .map(|word| LoopItem::Scalar(Value::text(word)))
            .collect(),
        (ControlVars::Single(name), other) => {
            tracing::warn!(
                name,
                kind = other.type_name(),
                expression = %parsed.expression,
                "loop over non-text value has no items"
            );
            Vec::new()
        }
    };

    tracing::debug!(header, items = items.len(), "resolved loop");
    Ok(LoopIterable {
        control_vars: parsed.control_vars,
        items,
    })
}
