use crate::error::{SyntaxError, SyntaxResult};

/// Normalize a variable token (`$foo`, `${foo}`, `"$foo"`, `'${foo}'`) into
/// the bare name used as an environment key.
pub fn var_name(token: &str) -> SyntaxResult<String> {
    let name = strip_one(token.trim(), &['"', '\''], &['"', '\'']);
    let Some(name) = name.strip_prefix('$') else {
        return Err(SyntaxError::VariableName(token.to_string()));
    };
    Ok(strip_one(name, &['{'], &['}']).to_string())
}

/// Remove at most one leading char from `open` and one trailing char from
/// `close`.
fn strip_one<'a>(s: &'a str, open: &[char], close: &[char]) -> &'a str {
    let s = s.strip_prefix(open).unwrap_or(s);
    s.strip_suffix(close).unwrap_or(s)
}
