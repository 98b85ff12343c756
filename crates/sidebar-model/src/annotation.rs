//! Annotation records as held by the sidebar store.
//!
//! Records arrive from the annotation service (or are created locally) and are
//! treated as opaque apart from the fields the store reasons about: identity,
//! thread references, anchoring targets and moderation state.
//!
//! Field names follow the service's JSON, including the client-only `$tag`
//! and `$orphan` markers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AnnotationId, Tag, ThreadKey};

// ============================================================================
// Targets and selectors
// ============================================================================

/// A document selector attached to an annotation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Selector {
    TextPositionSelector {
        start: u64,
        end: u64,
    },
    TextQuoteSelector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exact: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suffix: Option<String>,
    },
    /// Any selector kind the store does not inspect (range, fragment, ...).
    #[serde(other)]
    Other,
}

/// Where in which document an annotation is anchored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Vec<Selector>>,
}

impl Target {
    /// Target pointing at `source` with no selectors.
    pub fn source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            selector: None,
        }
    }

    /// Start offset of the first text-position selector, if any.
    pub fn text_position(&self) -> Option<u64> {
        self.selector.as_deref()?.iter().find_map(|s| match s {
            Selector::TextPositionSelector { start, .. } => Some(*start),
            _ => None,
        })
    }
}

// ============================================================================
// Ownership and moderation
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub read: Vec<String>,
    pub update: Vec<String>,
    pub delete: Vec<String>,
}

/// Moderation data, only present when the current user is a moderator of the
/// annotation's group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moderation {
    #[serde(rename = "flagCount", default)]
    pub flag_count: u32,
}

// ============================================================================
// Annotation record
// ============================================================================

/// Mutually exclusive classification of an annotation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    /// Not anchored to any part of the document.
    PageNote,
    /// Anchoring was attempted and failed.
    Orphan,
    /// Anchored (or still anchoring) to the document.
    Annotation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AnnotationId>,
    #[serde(rename = "$tag", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    #[serde(default)]
    pub references: Vec<AnnotationId>,
    #[serde(default)]
    pub target: Vec<Target>,
    /// `None` while anchoring is pending.
    #[serde(rename = "$orphan", default, skip_serializing_if = "Option::is_none")]
    pub orphan: Option<bool>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation: Option<Moderation>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Annotation {
    /// A page note has no targets, or a single target without a source.
    pub fn is_page_note(&self) -> bool {
        match self.target.as_slice() {
            [] => true,
            [only] => only.source.is_none(),
            _ => false,
        }
    }

    pub fn is_orphan(&self) -> bool {
        !self.is_page_note() && self.orphan == Some(true)
    }

    pub fn is_reply(&self) -> bool {
        !self.references.is_empty()
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_waiting_to_anchor(&self) -> bool {
        self.orphan.is_none()
    }

    pub fn kind(&self) -> AnnotationKind {
        if self.is_page_note() {
            AnnotationKind::PageNote
        } else if self.is_orphan() {
            AnnotationKind::Orphan
        } else {
            AnnotationKind::Annotation
        }
    }

    /// Key used by thread-level maps: the server id, or the tag before save.
    pub fn thread_key(&self) -> Option<ThreadKey> {
        self.id
            .as_ref()
            .map(ThreadKey::from)
            .or_else(|| self.tag.as_ref().map(ThreadKey::from))
    }

    /// True when `other` denotes the same annotation by id or by tag.
    pub fn same_identity(&self, other: &Annotation) -> bool {
        let same_id = matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b);
        let same_tag = matches!((&self.tag, &other.tag), (Some(a), Some(b)) if a == b);
        same_id || same_tag
    }

    /// Document offset used for location ordering.
    pub fn location(&self) -> Option<u64> {
        self.target.first().and_then(Target::text_position)
    }
}

/// The user-supplied part of a new annotation, before the store assigns an
/// identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationDraft {
    pub group: Option<String>,
    pub user: Option<String>,
    pub permissions: Option<Permissions>,
    pub references: Vec<AnnotationId>,
    pub target: Vec<Target>,
    pub text: String,
    pub tags: Vec<String>,
}

impl AnnotationDraft {
    /// Build an unsaved record: no id, no tag yet, anchoring pending.
    pub fn into_annotation(self) -> Annotation {
        Annotation {
            group: self.group,
            user: self.user,
            permissions: self.permissions,
            references: self.references,
            target: self.target,
            text: self.text,
            tags: self.tags,
            ..Annotation::default()
        }
    }
}
