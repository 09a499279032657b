//! Population Tools
//!
//! The census endpoint answers with every state at once as an array of rows,
//! `[["NAME","P1_001N","state"],["Alabama","5024279","01"], ...]`, so lookups
//! are a scan over the parsed table.


use serde_json::Value;

use crate::error::{Result, StateFactsError};

/// Find the population for `state` in a bulk census response.
///
/// Matching is exact and case-sensitive on the first column; the first
/// matching row wins.
pub fn lookup_population(body: &str, state: &str) -> Result<String> {
    let rows: Vec<Vec<Value>> = serde_json::from_str(body)
        .map_err(|e| StateFactsError::parse_error("census response", &e.to_string()))?;

    let row = rows
        .iter()
        .find(|row| row.first().and_then(Value::as_str) == Some(state))
        .ok_or_else(|| StateFactsError::not_found(&format!("population for {state}")))?;

    match row.get(1) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(StateFactsError::parse_error(
            "census response",
            &format!("row for {state} has no population column"),
        )),
    }
}
