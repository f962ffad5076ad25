//! Request parameters: path substitutions and query values.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for one call, split into path and query groups.
///
/// Values are forwarded to the transport untouched; validating them is the
/// remote API's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Map<String, Value>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value substituted for `{name}` in the path template.
    pub fn path(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.path
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set a query-string value.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn path_value(&self, name: &str) -> Option<&Value> {
        self.path.as_ref()?.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.path.as_ref().is_none_or(Map::is_empty) && self.query.as_ref().is_none_or(Map::is_empty)
    }

    /// Build from `NAME=VALUE` assignments, as collected by the CLI.
    /// Returns `None` when both groups are empty.
    pub fn from_assignments(path: Vec<(String, Value)>, query: Vec<(String, Value)>) -> Option<Self> {
        let params = Self {
            path: (!path.is_empty()).then(|| path.into_iter().collect()),
            query: (!query.is_empty()).then(|| query.into_iter().collect()),
        };
        (!params.is_empty()).then_some(params)
    }
}

/// Parse a `NAME=VALUE` assignment.
///
/// The value is read as JSON when it parses (`25`, `true`, `[1,2]`), and
/// kept as a plain string otherwise (`basic,members`).
pub fn parse_assignment(s: &str) -> Result<(String, Value)> {
    let (name, raw) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid parameter '{}'. Expected NAME=VALUE.", s))?;

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Invalid parameter '{}': name cannot be empty.", s);
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}
