//! Direct-linked annotation and group ids.
//!
//! A sidebar opened from a share link starts out pointed at one annotation
//! and/or one group. These ids are seeded from the host configuration and
//! cleared once the user navigates away from the link.

use serde::Serialize;
use sidebar_model::AnnotationId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectLinkedState {
    pub annotation_id: Option<AnnotationId>,
    pub group_id: Option<String>,
    /// The linked group could not be fetched (deleted, or not visible to the
    /// current user).
    pub group_fetch_failed: bool,
}

impl DirectLinkedState {
    pub fn new(annotation_id: Option<AnnotationId>, group_id: Option<String>) -> Self {
        Self {
            annotation_id,
            group_id,
            group_fetch_failed: false,
        }
    }

    pub fn clear_ids(&mut self) {
        self.annotation_id = None;
        self.group_id = None;
    }
}
