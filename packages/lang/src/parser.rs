use crate::ast::{AssignTargets, ControlVars, Expr, Expression, ForHeader};
use crate::error::{SyntaxError, SyntaxResult};
use crate::lexer::{eat_keyword, read_var_token, skip_whitespace};
use crate::names::var_name;

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// Parse an expression string.
///
/// Forms, tried in order against the trimmed input:
/// `not <expr>` (once), `$(<command line>)`, `$name` / `"$name"`,
/// `defined $name`.
pub fn parse_expression(input: &str) -> SyntaxResult<Expression> {
    let trimmed = input.trim();
    match trimmed.strip_prefix("not ") {
        Some(rest) => Ok(Expression::negate(parse_form(rest, input)?)),
        None => Ok(Expression::new(parse_form(trimmed, input)?)),
    }
}

/// Parse one non-negated form. `original` is reported in errors.
fn parse_form(text: &str, original: &str) -> SyntaxResult<Expr> {
    if text.starts_with("$(") {
        return parse_command_sub(text, original);
    }
    if text.starts_with('$') || text.starts_with("\"$") {
        return Ok(Expr::Variable(var_name(text)?));
    }
    if let Some(token) = text.strip_prefix("defined ") {
        return Ok(Expr::Defined(var_name(token)?));
    }
    Err(SyntaxError::Expression(original.to_string()))
}

/// Everything between `$(` and the final `)` is the command line, passed on
/// untouched.
fn parse_command_sub(text: &str, original: &str) -> SyntaxResult<Expr> {
    match text.strip_prefix("$(").and_then(|rest| rest.strip_suffix(')')) {
        Some(command_line) => Ok(Expr::CommandSub(command_line.to_string())),
        None => Err(SyntaxError::UnterminatedSubstitution(original.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Loop headers
// ---------------------------------------------------------------------------

/// Parse `for $v in <expr>`, `for ${v} in <expr>` or `for $k, $v in <expr>`.
pub fn parse_for(header: &str) -> SyntaxResult<ForHeader> {
    let malformed = || SyntaxError::ForHeader(header.to_string());
    let chars: Vec<char> = header.chars().collect();
    let mut pos = 0;

    skip_whitespace(&chars, &mut pos);
    if !eat_keyword(&chars, &mut pos, "for") {
        return Err(malformed());
    }
    skip_whitespace(&chars, &mut pos);

    let first = read_var_token(&chars, &mut pos).ok_or_else(malformed)?;
    let mut spaced = skip_whitespace(&chars, &mut pos);
    let second = if chars.get(pos) == Some(&',') {
        pos += 1;
        skip_whitespace(&chars, &mut pos);
        let token = read_var_token(&chars, &mut pos).ok_or_else(malformed)?;
        spaced = skip_whitespace(&chars, &mut pos);
        Some(token)
    } else {
        None
    };

    if !spaced || !eat_keyword(&chars, &mut pos, "in") {
        return Err(malformed());
    }
    skip_whitespace(&chars, &mut pos);

    let expression: String = chars[pos..].iter().collect();
    let expression = expression.trim_end();
    if expression.is_empty() {
        return Err(malformed());
    }

    let control_vars = match second {
        Some(second) => ControlVars::Pair(var_name(&first)?, var_name(&second)?),
        None => ControlVars::Single(var_name(&first)?),
    };
    Ok(ForHeader {
        control_vars,
        expression: expression.to_string(),
    })
}

// ---------------------------------------------------------------------------
// If / else headers
// ---------------------------------------------------------------------------

/// Strip the `if` marker from a condition header, returning the condition.
pub fn if_condition(header: &str) -> SyntaxResult<&str> {
    header
        .strip_prefix("if")
        .map(str::trim)
        .ok_or_else(|| SyntaxError::IfHeader(header.to_string()))
}

/// Whether a section's keyword marks it as an `else` clause.
pub fn is_else(keyword: &str) -> bool {
    keyword == "else"
}

// ---------------------------------------------------------------------------
// Assignment targets
// ---------------------------------------------------------------------------

/// Parse the left-hand side of an assignment: `$x` or `$ok, $x`.
pub fn parse_targets(lhs: &str) -> SyntaxResult<AssignTargets> {
    match lhs.split_once(',') {
        None => Ok(AssignTargets::Value(var_name(lhs)?)),
        Some((_, rest)) if rest.contains(',') => {
            Err(SyntaxError::TooManyTargets(lhs.to_string()))
        }
        Some((logical, value)) => Ok(AssignTargets::LogicalAndValue(
            var_name(logical)?,
            var_name(value)?,
        )),
    }
}
