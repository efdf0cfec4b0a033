//! Expected column layout of an uploaded criterion table.

use serde::{Deserialize, Serialize};

/// Identifier column plus the ordered criterion columns a file must carry.
///
/// Criterion order matters: positional weights are authored against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaSchema {
    #[serde(default = "default_identifier")]
    pub identifier: String,

    #[serde(default = "default_criteria")]
    pub criteria: Vec<String>,
}

fn default_identifier() -> String { "Technology".to_string() }

fn default_criteria() -> Vec<String> {
    ["Cost", "Ease of Use", "Effectiveness", "Accessibility", "Innovation"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for CriteriaSchema {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            criteria: default_criteria(),
        }
    }
}

impl CriteriaSchema {
    pub fn new(identifier: impl Into<String>, criteria: Vec<String>) -> Self {
        Self { identifier: identifier.into(), criteria }
    }

    /// Identifier first, then criteria in schema order.
    pub fn required_columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.identifier.as_str()).chain(self.criteria.iter().map(String::as_str))
    }

    /// Required columns absent from `headers`, in schema order.
    /// Matching is exact; header cleanup happens before this check.
    pub fn missing_columns<S: AsRef<str>>(&self, headers: &[S]) -> Vec<String> {
        self.required_columns()
            .filter(|col| !headers.iter().any(|h| h.as_ref() == *col))
            .map(str::to_string)
            .collect()
    }

    /// Schema spelling of `header` if it matches a required column ignoring case.
    pub fn canonical_name(&self, header: &str) -> Option<&str> {
        self.required_columns()
            .find(|col| col.eq_ignore_ascii_case(header))
    }
}
