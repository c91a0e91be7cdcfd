//! Typed access to the argument map of a tool call.
//!
//! Every getter takes a `required` flag. A missing required parameter is an
//! error; a missing optional one yields the type's zero value so handlers can
//! treat "absent" and "empty" the same way.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a parameter could not be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("{0} is required")]
    Missing(String),

    #[error("{name} must be {expected}")]
    WrongType { name: String, expected: &'static str },
}

fn wrong_type(name: &str, expected: &'static str) -> ParamError {
    ParamError::WrongType {
        name: name.to_string(),
        expected,
    }
}

/// Arguments of a single tool invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolParams {
    args: Map<String, Value>,
}

impl From<Map<String, Value>> for ToolParams {
    fn from(args: Map<String, Value>) -> Self {
        ToolParams { args }
    }
}

impl From<Option<Map<String, Value>>> for ToolParams {
    fn from(args: Option<Map<String, Value>>) -> Self {
        ToolParams {
            args: args.unwrap_or_default(),
        }
    }
}

impl ToolParams {
    /// Look up a parameter. JSON `null` counts as absent.
    fn lookup(&self, name: &str, required: bool) -> Result<Option<&Value>, ParamError> {
        match self.args.get(name) {
            Some(Value::Null) | None if required => Err(ParamError::Missing(name.to_string())),
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(value)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        !matches!(self.args.get(name), None | Some(Value::Null))
    }

    pub fn get_string(&self, name: &str, required: bool) -> Result<String, ParamError> {
        match self.lookup(name, required)? {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(wrong_type(name, "a string")),
        }
    }

    /// Integers arrive as JSON numbers; floats without a fractional part are
    /// accepted since some clients send every number as a double.
    pub fn get_int(&self, name: &str, required: bool) -> Result<i64, ParamError> {
        match self.lookup(name, required)? {
            None => Ok(0),
            Some(value) => as_integer(value).ok_or_else(|| wrong_type(name, "an integer")),
        }
    }

    pub fn get_bool(&self, name: &str, required: bool) -> Result<bool, ParamError> {
        match self.lookup(name, required)? {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(wrong_type(name, "a boolean")),
        }
    }

    pub fn get_array_of_integers(&self, name: &str, required: bool) -> Result<Vec<i64>, ParamError> {
        match self.lookup(name, required)? {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| as_integer(item).ok_or_else(|| wrong_type(name, "an array of integers")))
                .collect(),
            Some(_) => Err(wrong_type(name, "an array of integers")),
        }
    }

    pub fn get_array_of_objects(
        &self,
        name: &str,
        required: bool,
    ) -> Result<Vec<Map<String, Value>>, ParamError> {
        match self.lookup(name, required)? {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(obj) => Ok(obj.clone()),
                    _ => Err(wrong_type(name, "an array of objects")),
                })
                .collect(),
            Some(_) => Err(wrong_type(name, "an array of objects")),
        }
    }

    pub fn get_map(&self, name: &str, required: bool) -> Result<Map<String, Value>, ParamError> {
        match self.lookup(name, required)? {
            None => Ok(Map::new()),
            Some(Value::Object(obj)) => Ok(obj.clone()),
            Some(_) => Err(wrong_type(name, "an object")),
        }
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
