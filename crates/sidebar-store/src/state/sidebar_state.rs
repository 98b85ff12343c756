//! Root state.

use serde::Serialize;
use sidebar_model::{Annotation, AnnotationKind, Tab};

use super::{AnnotationsState, DirectLinkedState, FocusModeState, SelectionState, ViewerState};
use crate::config::StoreConfig;
use crate::sorting;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub annotations: AnnotationsState,
    pub selection: SelectionState,
    pub direct_linked: DirectLinkedState,
    pub viewer: ViewerState,
}

impl SidebarState {
    /// Initial state seeded from the host configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            annotations: AnnotationsState::default(),
            selection: SelectionState::with_focus_mode(FocusModeState::from_config(
                config.focus_user(),
            )),
            direct_linked: DirectLinkedState::new(
                config.annotations.clone(),
                config.group.clone(),
            ),
            viewer: ViewerState::default(),
        }
    }

    /// Top-level records belonging to the selected tab, in display order.
    pub fn tab_annotations(&self) -> Vec<&Annotation> {
        let kind = match self.selection.selected_tab {
            Tab::Annotations => AnnotationKind::Annotation,
            Tab::Notes => AnnotationKind::PageNote,
            Tab::Orphans => AnnotationKind::Orphan,
        };
        let matching = self
            .annotations
            .annotations
            .iter()
            .filter(|a| !a.is_reply() && a.kind() == kind);
        sorting::sort_annotations(matching, self.selection.sort_key)
    }
}
