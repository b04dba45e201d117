use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Separator between names when a policy path is typed or displayed.
pub const PATH_SEPARATOR: &str = "->";

/// Numeric identifier used by `ID` and `parentID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyId(pub i64);

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A policy record as returned by `GET /policies`.
///
/// Only the identity fields are typed. Every other attribute stays in
/// `attributes` untouched so it can be forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<PolicyId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        rename = "parentID",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<PolicyId>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Policy {
    pub fn new(id: i64, name: &str, parent_id: Option<i64>) -> Self {
        Policy {
            id: Some(PolicyId(id)),
            name: Some(name.to_string()),
            parent_id: parent_id.map(PolicyId),
            attributes: Map::new(),
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Human-readable label for log lines and prompts.
    pub fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("<unnamed>");
        match self.id {
            Some(id) => format!("{} (ID {})", name, id),
            None => name.to_string(),
        }
    }
}

/// Integer IDs, or digit strings; anything else reads as no ID so one odd
/// record does not fail the whole listing.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<PolicyId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().map(PolicyId),
        Some(Value::String(s)) => s.trim().parse().ok().map(PolicyId),
        _ => None,
    })
}

/// Body of `GET /policies`. A missing `policies` field means an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyList {
    #[serde(default)]
    pub policies: Vec<Policy>,
}

/// Root-to-node sequence of policy names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyPath(Vec<String>);

impl PolicyPath {
    /// Returns `None` for an empty sequence.
    pub fn new(segments: Vec<String>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(PolicyPath(segments))
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for PolicyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// How the operator identified a policy: a bare name or a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicySelector {
    Name(String),
    Path(PolicyPath),
}

impl PolicySelector {
    /// Input containing `->` is a path; anything else is taken as a name.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if !input.contains(PATH_SEPARATOR) {
            return PolicySelector::Name(input.to_string());
        }

        let segments: Vec<String> = input
            .split(PATH_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        match PolicyPath::new(segments) {
            Some(path) => PolicySelector::Path(path),
            None => PolicySelector::Name(input.to_string()),
        }
    }
}

impl fmt::Display for PolicySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicySelector::Name(name) => write!(f, "{}", name),
            PolicySelector::Path(path) => write!(f, "{}", path),
        }
    }
}
