use std::fmt;

use crate::ModelError;

/// Server-assigned annotation identity.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct AnnotationId(String);

impl AnnotationId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidAnnotationId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AnnotationId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnnotationId> for String {
    fn from(id: AnnotationId) -> Self {
        id.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client-local annotation identity (`$tag`).
///
/// Assigned when an annotation first enters the store and stable for as long
/// as the annotation is loaded.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidTag(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Tag produced by the store's tag counter: `t1`, `t2`, ...
    pub fn generated(sequence: u64) -> Self {
        Self(format!("t{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key for thread-level maps (expansion, forced visibility).
///
/// Saved annotations are keyed by id and unsaved ones by tag. The two spaces
/// stay apart even when a server id spells the same text as a tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreadKey {
    Id(AnnotationId),
    Tag(Tag),
}

impl From<AnnotationId> for ThreadKey {
    fn from(id: AnnotationId) -> Self {
        Self::Id(id)
    }
}

impl From<&AnnotationId> for ThreadKey {
    fn from(id: &AnnotationId) -> Self {
        Self::Id(id.clone())
    }
}

impl From<Tag> for ThreadKey {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<&Tag> for ThreadKey {
    fn from(tag: &Tag) -> Self {
        Self::Tag(tag.clone())
    }
}

impl fmt::Display for ThreadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Tag(tag) => write!(f, "$tag:{tag}"),
        }
    }
}

// Serialized as a string so thread maps stay JSON objects.
impl serde::Serialize for ThreadKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
