use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// The original form of a vertex identifier as written by the user.
/// Graphs may name their vertices with numbers, strings, or a mix of both.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Name(String),
}

impl Display for RawId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Num(n) => write!(f, "{}", n),
            RawId::Name(s) => write!(f, "{}", s),
        }
    }
}

/// An opaque vertex identifier.
///
/// Two identifiers denote the same vertex iff their canonical string forms
/// are equal, so the numeric id `1` and the textual id `"1"` name one vertex.
/// The canonical key is computed once at construction, and all comparisons,
/// ordering and hashing go through it. `Display` prints the original form.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RawId", into = "RawId")]
pub struct VertexId {
    raw: RawId,
    key: String,
}

impl VertexId {
    pub fn new(raw: RawId) -> Self {
        let key = raw.to_string();
        VertexId { raw, key }
    }

    /// The canonical string form used for identity.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The identifier as originally written.
    pub fn raw(&self) -> &RawId {
        &self.raw
    }
}

impl From<RawId> for VertexId {
    fn from(raw: RawId) -> Self {
        VertexId::new(raw)
    }
}

impl From<VertexId> for RawId {
    fn from(id: VertexId) -> Self {
        id.raw
    }
}

impl From<i64> for VertexId {
    fn from(n: i64) -> Self {
        VertexId::new(RawId::Num(n))
    }
}

impl From<i32> for VertexId {
    fn from(n: i32) -> Self {
        VertexId::new(RawId::Num(n.into()))
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId::new(RawId::Name(s.to_string()))
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        VertexId::new(RawId::Name(s))
    }
}

impl PartialEq for VertexId {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for VertexId {}

impl Hash for VertexId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state)
    }
}

impl PartialOrd for VertexId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VertexId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
