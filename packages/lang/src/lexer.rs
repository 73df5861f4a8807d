//! Character-level scanning helpers shared by the expression and loop-header
//! parsers.
//!
//! All helpers work on a pre-collected `&[char]` with a moving `pos` cursor.

/// Skip spaces and tabs (and any other Unicode whitespace).
/// Returns true if at least one character was skipped.
pub fn skip_whitespace(chars: &[char], pos: &mut usize) -> bool {
    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_whitespace() {
        *pos += 1;
    }
    *pos > start
}

/// Consume `keyword` if it appears at `pos` and is followed by whitespace.
/// The whitespace itself is not consumed.
pub fn eat_keyword(chars: &[char], pos: &mut usize, keyword: &str) -> bool {
    let mut end = *pos;
    for expected in keyword.chars() {
        if end >= chars.len() || chars[end] != expected {
            return false;
        }
        end += 1;
    }
    if end < chars.len() && chars[end].is_whitespace() {
        *pos = end;
        true
    } else {
        false
    }
}

/// Read a variable token: `$` followed by either a `{...}` group or a run of
/// characters up to whitespace or a comma. Returns `None` (leaving `pos`
/// untouched) if there is no `$` at the cursor.
pub fn read_var_token(chars: &[char], pos: &mut usize) -> Option<String> {
    if chars.get(*pos) != Some(&'$') {
        return None;
    }
    let mut end = *pos + 1;
    if chars.get(end) == Some(&'{') {
        while end < chars.len() && chars[end] != '}' {
            end += 1;
        }
        if end >= chars.len() {
            return None; // unterminated ${
        }
        end += 1; // include '}'
    } else {
        while end < chars.len() && !chars[end].is_whitespace() && chars[end] != ',' {
            end += 1;
        }
    }
    let token: String = chars[*pos..end].iter().collect();
    // A bare `$` or `${}` names nothing.
    if token == "$" || token == "${}" {
        return None;
    }
    *pos = end;
    Some(token)
}
