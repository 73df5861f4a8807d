use assistant_lang::ast::AssignTargets;
use assistant_lang::parser::parse_targets;
use assistant_lang::{SyntaxResult, Value};

use crate::eval::evaluate;
use crate::host::CommandHost;
use crate::state::Environment;

/// Evaluate `rhs` and bind the result to the targets named by `lhs`.
///
/// `$x` binds the value. `$ok, $x` binds the logical result to `ok` and the
/// value to `x`. A false logical result is still a successful assignment.
pub fn assign(
    env: &mut Environment,
    host: &dyn CommandHost,
    lhs: &str,
    rhs: &Value,
) -> SyntaxResult<()> {
    let targets = parse_targets(lhs)?;
    let evaluation = evaluate(env, host, rhs)?;
    match targets {
        AssignTargets::Value(name) => {
            tracing::debug!(name = %name, "assign");
            env.set(name, evaluation.value);
        }
        AssignTargets::LogicalAndValue(logical_name, value_name) => {
            tracing::debug!(
                logical_name = %logical_name,
                value_name = %value_name,
                logical = evaluation.logical,
                "assign"
            );
            env.set(logical_name, evaluation.logical);
            env.set(value_name, evaluation.value);
        }
    }
    Ok(())
}
