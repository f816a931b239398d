//! Query string and OData `$filter` construction

use serde::Serialize;
use std::fmt;

/// Ordered list of query parameters
///
/// Keys may repeat (e.g. `folderTypes`). Parameters are only added when a value
/// is present, so absent optional arguments never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.0.push((key.to_string(), value.to_string()));
    }

    /// Appends a parameter (builder form)
    #[must_use]
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter when the value is present
    #[must_use]
    pub fn with_opt<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Appends a text parameter when present and not empty
    #[must_use]
    pub fn with_text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
        self
    }

    /// Appends `$filter` when the filter has at least one clause
    #[must_use]
    pub fn with_filter(mut self, filter: &ODataFilter) -> Self {
        if let Some(expr) = filter.build() {
            self.push("$filter", expr);
        }
        self
    }

    /// First value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in insertion order
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether a parameter named `key` is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameters as key/value pairs
    #[must_use]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Comparison operators used by Orchestrator list filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `eq`
    Eq,
    /// `gt`
    Gt,
    /// `lt`
    Lt,
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            FilterOp::Eq => "eq",
            FilterOp::Gt => "gt",
            FilterOp::Lt => "lt",
        };
        f.write_str(op)
    }
}

/// OData `$filter` expression made of clauses joined with `and`
///
/// Clauses keep the order in which they were added. Absent values add nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ODataFilter {
    clauses: Vec<String>,
}

impl ODataFilter {
    /// Creates an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// `Field eq 'value'` when the text is present and not empty
    #[must_use]
    pub fn eq_text(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.clauses
                .push(format!("{field} {} {}", FilterOp::Eq, quote(v)));
        }
        self
    }

    /// `Field eq value` for numbers and booleans
    #[must_use]
    pub fn eq<V: fmt::Display>(self, field: &str, value: Option<V>) -> Self {
        self.compare(field, FilterOp::Eq, value)
    }

    /// `Field gt value`, used for dates and numbers
    #[must_use]
    pub fn gt<V: fmt::Display>(self, field: &str, value: Option<V>) -> Self {
        self.compare(field, FilterOp::Gt, value)
    }

    /// `Field lt value`, used for dates and numbers
    #[must_use]
    pub fn lt<V: fmt::Display>(self, field: &str, value: Option<V>) -> Self {
        self.compare(field, FilterOp::Lt, value)
    }

    /// Adds an unquoted comparison clause when the value is present
    #[must_use]
    pub fn compare<V: fmt::Display>(mut self, field: &str, op: FilterOp, value: Option<V>) -> Self {
        if let Some(v) = value {
            let v = v.to_string();
            if !v.is_empty() {
                self.clauses.push(format!("{field} {op} {v}"));
            }
        }
        self
    }

    /// Whether no clause was added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Individual clauses in order
    #[must_use]
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    /// The full expression, or `None` when there is nothing to filter on
    #[must_use]
    pub fn build(&self) -> Option<String> {
        if self.clauses.is_empty() {
            None
        } else {
            Some(self.clauses.join(" and "))
        }
    }
}

impl fmt::Display for ODataFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses.join(" and "))
    }
}

/// Quotes a string literal for OData, doubling embedded single quotes
#[must_use]
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
