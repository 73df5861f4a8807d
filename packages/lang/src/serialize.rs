use serde_json::json;

use crate::ast::{Expression, ForHeader};

/// Serialize a parsed expression to a JSON string.
pub fn serialize_expression(expr: &Expression) -> serde_json::Result<String> {
    serde_json::to_string(expr)
}

/// Serialize a decomposed loop header to a JSON string.
pub fn serialize_for_header(header: &ForHeader) -> serde_json::Result<String> {
    serde_json::to_string(&json!({
        "control_vars": header.control_vars.names(),
        "expression": header.expression,
    }))
}
