//! Selection, focus and thread-visibility state.
//!
//! The selected and focused sets are tri-state: `None` means nothing is
//! selected, and an empty set is never stored. Every mutation that can empty
//! a set goes through [`non_empty`] to keep that invariant.

use std::collections::BTreeMap;

use indexmap::IndexSet;
use serde::Serialize;
use sidebar_model::{AnnotationId, SortKey, Tab, ThreadKey};

use super::focus_mode::FocusModeState;

/// Collapse an empty set to `None`.
fn non_empty(set: IndexSet<AnnotationId>) -> Option<IndexSet<AnnotationId>> {
    if set.is_empty() { None } else { Some(set) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Explicitly selected annotations, in selection order.
    pub selected_annotations: Option<IndexSet<AnnotationId>>,
    /// Annotations focused by hovering or cross-frame references.
    pub focused_annotations: Option<IndexSet<AnnotationId>>,
    /// Threads shown regardless of the active filter.
    pub force_visible: BTreeMap<ThreadKey, bool>,
    /// Thread expansion overrides; absent means the default for the thread.
    pub expanded: BTreeMap<ThreadKey, bool>,
    pub highlighted: Vec<AnnotationId>,
    pub filter_query: Option<String>,
    pub selected_tab: Tab,
    pub sort_key: SortKey,
    pub sort_keys_available: Vec<SortKey>,
    pub focus_mode: FocusModeState,
}

impl Default for SelectionState {
    fn default() -> Self {
        let tab = Tab::default();
        Self {
            selected_annotations: None,
            focused_annotations: None,
            force_visible: BTreeMap::new(),
            expanded: BTreeMap::new(),
            highlighted: Vec::new(),
            filter_query: None,
            selected_tab: tab,
            sort_key: tab.default_sort_key(),
            sort_keys_available: tab.sort_keys_available().to_vec(),
            focus_mode: FocusModeState::default(),
        }
    }
}

impl SelectionState {
    pub fn with_focus_mode(focus_mode: FocusModeState) -> Self {
        Self {
            focus_mode,
            ..Self::default()
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Replace the selection.
    pub fn select_annotations(&mut self, ids: impl IntoIterator<Item = AnnotationId>) {
        self.selected_annotations = non_empty(ids.into_iter().collect());
    }

    /// Flip membership of each id against the current selection.
    pub fn toggle_selected_annotations(&mut self, ids: impl IntoIterator<Item = AnnotationId>) {
        let mut selection = self.selected_annotations.take().unwrap_or_default();
        for id in ids {
            if !selection.shift_remove(&id) {
                selection.insert(id);
            }
        }
        self.selected_annotations = non_empty(selection);
    }

    /// Clear the selection and the active search along with it.
    pub fn clear_selected_annotations(&mut self) {
        self.selected_annotations = None;
        self.filter_query = None;
    }

    // =========================================================================
    // Focus, highlight and visibility
    // =========================================================================

    pub fn focus_annotations(&mut self, ids: impl IntoIterator<Item = AnnotationId>) {
        self.focused_annotations = non_empty(ids.into_iter().collect());
    }

    pub fn highlight_annotations(&mut self, ids: Vec<AnnotationId>) {
        self.highlighted = ids;
    }

    pub fn set_force_visible(&mut self, key: impl Into<ThreadKey>, visible: bool) {
        self.force_visible.insert(key.into(), visible);
    }

    /// Note the inverted sense: the stored flag is "expanded".
    pub fn set_collapsed(&mut self, key: impl Into<ThreadKey>, collapsed: bool) {
        self.expanded.insert(key.into(), !collapsed);
    }

    /// Set the search filter. Manual visibility and expansion overrides were
    /// made against the old result set and are dropped.
    pub fn set_filter_query(&mut self, query: Option<String>) {
        self.filter_query = query;
        self.force_visible.clear();
        self.expanded.clear();
    }

    /// Forget removed annotations in every id- and thread-keyed structure.
    ///
    /// Id sets only drop [`ThreadKey::Id`] entries, so a removed draft's tag
    /// never clears a saved annotation whose id reads the same.
    pub fn forget_annotations(&mut self, removed: &[ThreadKey]) {
        if removed.is_empty() {
            return;
        }
        let kept = |id: &AnnotationId| {
            !removed
                .iter()
                .any(|key| matches!(key, ThreadKey::Id(gone) if gone == id))
        };
        if let Some(mut selected) = self.selected_annotations.take() {
            selected.retain(kept);
            self.selected_annotations = non_empty(selected);
        }
        if let Some(mut focused) = self.focused_annotations.take() {
            focused.retain(kept);
            self.focused_annotations = non_empty(focused);
        }
        self.highlighted.retain(kept);
        self.force_visible.retain(|key, _| !removed.contains(key));
        self.expanded.retain(|key, _| !removed.contains(key));
    }

    /// Reset everything tied to the loaded annotations.
    pub fn clear_annotation_state(&mut self) {
        self.selected_annotations = None;
        self.focused_annotations = None;
        self.force_visible.clear();
        self.expanded.clear();
        self.highlighted.clear();
    }

    // =========================================================================
    // Tabs and sorting
    // =========================================================================

    /// Switch tab, keeping the current sort key if the new tab offers it.
    pub fn select_tab(&mut self, tab: Tab) {
        let available = tab.sort_keys_available();
        self.selected_tab = tab;
        self.sort_keys_available = available.to_vec();
        if !available.contains(&self.sort_key) {
            self.sort_key = tab.default_sort_key();
        }
    }

    /// Set the sort key. Callers offer keys from `sort_keys_available`.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    pub fn has_selected_annotations(&self) -> bool {
        self.selected_annotations.is_some()
    }

    pub fn is_annotation_selected(&self, id: &AnnotationId) -> bool {
        self.selected_annotations
            .as_ref()
            .is_some_and(|selected| selected.contains(id))
    }

    /// First id in selection order.
    pub fn first_selected_annotation_id(&self) -> Option<&AnnotationId> {
        self.selected_annotations.as_ref()?.first()
    }

    pub fn filter_query(&self) -> Option<&str> {
        self.filter_query.as_deref()
    }

    pub fn has_focused_annotations(&self) -> bool {
        self.focused_annotations.is_some()
    }

    pub fn is_annotation_focused(&self, id: &AnnotationId) -> bool {
        self.focused_annotations
            .as_ref()
            .is_some_and(|focused| focused.contains(id))
    }

    pub fn is_annotation_highlighted(&self, id: &AnnotationId) -> bool {
        self.highlighted.contains(id)
    }

    /// Expansion override for a thread, if one was recorded.
    pub fn is_thread_expanded(&self, key: impl Into<ThreadKey>) -> Option<bool> {
        self.expanded.get(&key.into()).copied()
    }
}
