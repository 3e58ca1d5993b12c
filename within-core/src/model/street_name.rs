use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::Error;

/// Placeholder used for edges without a `name` tag
pub const UNNAMED_STREET: &str = "unnamed street";

/// Street name of an edge.
///
/// Edges shared by several named ways carry all of their names, in the order
/// the upstream data lists them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum StreetName {
    #[default]
    Unnamed,
    Single(String),
    Multiple(Vec<String>),
}

impl StreetName {
    /// Presentation form; multiple names are joined with `/`
    pub fn joined(&self) -> String {
        match self {
            StreetName::Unnamed => UNNAMED_STREET.to_string(),
            StreetName::Single(name) => name.clone(),
            StreetName::Multiple(names) => names.join("/"),
        }
    }

    pub fn is_named(&self) -> bool {
        !matches!(self, StreetName::Unnamed)
    }
}

impl fmt::Display for StreetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreetName::Unnamed => f.write_str(UNNAMED_STREET),
            StreetName::Single(name) => f.write_str(name),
            StreetName::Multiple(names) => f.write_str(&names.join("/")),
        }
    }
}

impl From<&str> for StreetName {
    fn from(name: &str) -> Self {
        StreetName::Single(name.to_string())
    }
}

impl From<String> for StreetName {
    fn from(name: String) -> Self {
        StreetName::Single(name)
    }
}

impl From<Option<String>> for StreetName {
    fn from(name: Option<String>) -> Self {
        name.map_or(StreetName::Unnamed, StreetName::Single)
    }
}

impl From<Vec<String>> for StreetName {
    fn from(names: Vec<String>) -> Self {
        StreetName::Multiple(names)
    }
}

impl TryFrom<&Value> for StreetName {
    type Error = Error;

    /// Accepts `null`, a string, or a non-empty array of strings
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(StreetName::Unnamed),
            Value::String(name) => Ok(StreetName::Single(name.clone())),
            Value::Array(items) if !items.is_empty() => items
                .iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name.clone()),
                    other => Err(Error::UnrecognizedStreetNameShape(format!(
                        "list member {other} is not a string"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(StreetName::Multiple),
            Value::Array(_) => Err(Error::UnrecognizedStreetNameShape(
                "empty list of names".to_string(),
            )),
            other => Err(Error::UnrecognizedStreetNameShape(other.to_string())),
        }
    }
}
