//! Session file loading.
//!
//! Accepts either a bare JSON array of sessions or the course feed shape,
//! an object whose `courses` field holds the array.

use std::path::Path;

use serde_json::Value;
use weekgrid_common::{CourseSession, InputError};

pub fn read_sessions(path: &Path) -> Result<Vec<CourseSession>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_sessions(&text)
}

pub fn parse_sessions(text: &str) -> Result<Vec<CourseSession>, InputError> {
    let value: Value = serde_json::from_str(text).map_err(|e| InputError::Parse(e.to_string()))?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("courses").ok_or_else(|| {
            InputError::Parse("object has no `courses` field".to_string())
        })?,
        other => {
            return Err(InputError::Parse(format!(
                "expected an array or an object with `courses`, got {}",
                kind(&other)
            )))
        }
    };

    serde_json::from_value(list).map_err(|e| InputError::Parse(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
