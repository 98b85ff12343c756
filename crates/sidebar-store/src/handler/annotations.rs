//! Annotation collection handler.
//!
//! Handles:
//! - Loading, pushing and removing records
//! - Local creation of new annotations and replies
//! - Moderation state (hidden, flagged)
//! - Anchoring results

use sidebar_model::{Annotation, AnnotationDraft, AnnotationKind, Tab};
use tracing::{debug, warn};

use super::{ActionHandler, Effect};
use crate::action::AnnotationsAction;
use crate::state::SidebarState;

/// Handler for annotation collection actions.
pub struct AnnotationsHandler;

impl ActionHandler<AnnotationsAction> for AnnotationsHandler {
    fn handle(&self, state: &mut SidebarState, action: AnnotationsAction) -> Effect {
        match action {
            AnnotationsAction::AddAnnotations(annotations) => add_annotations(state, annotations),

            AnnotationsAction::RemoveAnnotations(annotations) => {
                let removed = state.annotations.remove(&annotations);
                debug!(count = removed.len(), "removed annotation keys");
                state.selection.forget_annotations(&removed);
                Effect::None
            }

            AnnotationsAction::ClearAnnotations => {
                state.annotations.clear();
                state.selection.clear_annotation_state();
                Effect::None
            }

            AnnotationsAction::CreateAnnotation(draft) => create_annotation(state, draft),

            AnnotationsAction::HideAnnotation(id) => {
                if !state.annotations.set_hidden(&id, true) {
                    warn!(%id, "cannot hide unknown annotation");
                }
                Effect::None
            }

            AnnotationsAction::UnhideAnnotation(id) => {
                if !state.annotations.set_hidden(&id, false) {
                    warn!(%id, "cannot unhide unknown annotation");
                }
                Effect::None
            }

            AnnotationsAction::UpdateFlagStatus { id, is_flagged } => {
                if !state.annotations.update_flag_status(&id, is_flagged) {
                    warn!(%id, "cannot update flag status of unknown annotation");
                }
                Effect::None
            }

            AnnotationsAction::UpdateAnchorStatus(statuses) => {
                let changed = state.annotations.update_anchor_status(&statuses);
                debug!(changed, requested = statuses.len(), "updated anchor status");
                Effect::None
            }

            AnnotationsAction::MarkUnanchoredAsOrphans(tags) => {
                let changed = state.annotations.mark_unanchored_as_orphans(&tags);
                if changed > 0 {
                    debug!(changed, "anchoring timed out");
                }
                Effect::None
            }
        }
    }
}

// =============================================================================
// HANDLER FUNCTIONS
// =============================================================================

/// Add records, then expand and reveal genuinely new top-level threads.
///
/// Updates to records already in the store leave expansion and the selected
/// tab alone. When a batch brings in several new top-level records, the last
/// one decides the tab.
fn add_annotations(state: &mut SidebarState, annotations: Vec<Annotation>) -> Effect {
    let outcome = state.annotations.add(annotations);
    debug!(
        added = outcome.added.len(),
        updated = outcome.updated,
        "added annotations"
    );

    let mut reveal_tab = None;
    for added in outcome.added.iter().filter(|added| !added.is_reply) {
        state.selection.set_collapsed(added.thread_key.clone(), false);
        reveal_tab = Some(match added.kind {
            AnnotationKind::PageNote => Tab::Notes,
            AnnotationKind::Annotation | AnnotationKind::Orphan => Tab::Annotations,
        });
    }
    if let Some(tab) = reveal_tab {
        state.selection.select_tab(tab);
    }

    // The stand-alone viewer never anchors, so nothing would ever resolve.
    if state.viewer.is_sidebar && !outcome.awaiting_anchor.is_empty() {
        Effect::AnchoringTimeout {
            tags: outcome.awaiting_anchor,
        }
    } else {
        Effect::None
    }
}

/// Add a new unsaved annotation and expand every thread it replies into.
fn create_annotation(state: &mut SidebarState, draft: AnnotationDraft) -> Effect {
    let parents = draft.references.clone();
    let effect = add_annotations(state, vec![draft.into_annotation()]);
    for parent in parents {
        state.selection.set_collapsed(parent, false);
    }
    effect
}
