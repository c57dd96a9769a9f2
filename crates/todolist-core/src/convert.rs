//! Converters from dynamic JSON values to domain types.

use crate::{Todo, TodoError, TodoItem};
use serde_json::Value;

// ============================================================================
// Todo conversions
// ============================================================================

impl TryFrom<&Value> for Todo {
    type Error = TodoError;

    /// Accepts `{"title": <string>, "done": <bool?>}`. Anything else is a
    /// type mismatch, including a serialized list. A blank title is invalid
    /// input.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if let Value::Object(map) = value {
            if let Some(Value::String(title)) = map.get("title") {
                let done = match map.get("done") {
                    None | Some(Value::Null) => false,
                    Some(Value::Bool(done)) => *done,
                    Some(_) => return Err(mismatch(value)),
                };
                let todo = Todo::try_new(title.clone())?;
                if done {
                    todo.mark_done();
                }
                return Ok(todo);
            }
        }
        Err(mismatch(value))
    }
}

impl TryFrom<Value> for Todo {
    type Error = TodoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Todo::try_from(&value)
    }
}

/// Short name for the shape of a JSON value, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(map) if map.contains_key("todos") => "todo list",
        Value::Object(_) => "object",
    }
}

fn mismatch(value: &Value) -> TodoError {
    TodoError::TypeMismatch {
        expected: "todo",
        found: value_kind(value),
    }
}
