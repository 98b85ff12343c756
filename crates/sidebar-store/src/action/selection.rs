//! Selection, tab/sort and focus-mode actions.

use sidebar_model::{AnnotationId, FocusUser, SortKey, Tab, ThreadKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    // =========================================================================
    // Selection
    // =========================================================================
    /// Replace the selection
    SelectAnnotations(Vec<AnnotationId>),

    /// Flip membership of each id
    ToggleSelectedAnnotations(Vec<AnnotationId>),

    /// Clear the selection and the search query
    ClearSelectedAnnotations,

    // =========================================================================
    // Focus, highlight, visibility
    // =========================================================================
    /// Replace the focused set
    FocusAnnotations(Vec<AnnotationId>),

    /// Replace the highlighted sequence
    HighlightAnnotations(Vec<AnnotationId>),

    /// Show a thread regardless of the filter
    SetForceVisible { key: ThreadKey, visible: bool },

    /// Collapse or expand a thread
    SetCollapsed { key: ThreadKey, collapsed: bool },

    /// Set (or clear) the search filter
    SetFilterQuery(Option<String>),

    // =========================================================================
    // Tabs and sorting
    // =========================================================================
    SelectTab(Tab),

    SetSortKey(SortKey),

    // =========================================================================
    // Focus mode
    // =========================================================================
    /// Replace the focus user; a user without `username` disables focus mode
    ChangeFocusModeUser(FocusUser),

    SetFocusModeFocused(bool),
}

impl SelectionAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectAnnotations(_) => "selectAnnotations",
            Self::ToggleSelectedAnnotations(_) => "toggleSelectedAnnotations",
            Self::ClearSelectedAnnotations => "clearSelectedAnnotations",
            Self::FocusAnnotations(_) => "focusAnnotations",
            Self::HighlightAnnotations(_) => "highlightAnnotations",
            Self::SetForceVisible { .. } => "setForceVisible",
            Self::SetCollapsed { .. } => "setCollapsed",
            Self::SetFilterQuery(_) => "setFilterQuery",
            Self::SelectTab(_) => "selectTab",
            Self::SetSortKey(_) => "setSortKey",
            Self::ChangeFocusModeUser(_) => "changeFocusModeUser",
            Self::SetFocusModeFocused(_) => "setFocusModeFocused",
        }
    }
}
