//! Annotation collection actions.

use std::collections::HashMap;

use sidebar_model::{Annotation, AnnotationDraft, AnnotationId, Tag};

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationsAction {
    /// Insert new records or replace existing ones (server load or push)
    AddAnnotations(Vec<Annotation>),

    /// Remove records matching by id or tag
    RemoveAnnotations(Vec<Annotation>),

    /// Drop every loaded record
    ClearAnnotations,

    /// Create a new unsaved annotation from user input
    CreateAnnotation(AnnotationDraft),

    /// Moderator hid an annotation
    HideAnnotation(AnnotationId),

    /// Moderator unhid an annotation
    UnhideAnnotation(AnnotationId),

    /// Current user flagged or unflagged an annotation
    UpdateFlagStatus { id: AnnotationId, is_flagged: bool },

    /// Anchoring finished for some records (tag -> is orphan)
    UpdateAnchorStatus(HashMap<Tag, bool>),

    /// Anchoring timed out; still-pending records become orphans
    MarkUnanchoredAsOrphans(Vec<Tag>),
}

impl AnnotationsAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAnnotations(_) => "addAnnotations",
            Self::RemoveAnnotations(_) => "removeAnnotations",
            Self::ClearAnnotations => "clearAnnotations",
            Self::CreateAnnotation(_) => "createAnnotation",
            Self::HideAnnotation(_) => "hideAnnotation",
            Self::UnhideAnnotation(_) => "unhideAnnotation",
            Self::UpdateFlagStatus { .. } => "updateFlagStatus",
            Self::UpdateAnchorStatus(_) => "updateAnchorStatus",
            Self::MarkUnanchoredAsOrphans(_) => "markUnanchoredAsOrphans",
        }
    }
}
