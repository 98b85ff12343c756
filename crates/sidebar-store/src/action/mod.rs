//! Action hierarchy for the sidebar store.
//!
//! Every state change is one of these variants. The root [`Action`] groups
//! them by the part of the state that owns them, and
//! [`Store::dispatch`](crate::Store::dispatch) routes each group to its
//! handler.

pub mod annotations;
pub mod direct_linked;
pub mod selection;
pub mod viewer;

pub use annotations::AnnotationsAction;
pub use direct_linked::DirectLinkedAction;
pub use selection::SelectionAction;
pub use viewer::ViewerAction;

/// Root action enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Annotation collection actions
    Annotations(AnnotationsAction),

    /// Selection, tab/sort and focus-mode actions
    Selection(SelectionAction),

    /// Direct-linked id actions
    DirectLinked(DirectLinkedAction),

    /// Viewer actions
    Viewer(ViewerAction),
}

impl Action {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Annotations(action) => action.name(),
            Self::Selection(action) => action.name(),
            Self::DirectLinked(action) => action.name(),
            Self::Viewer(action) => action.name(),
        }
    }
}

impl From<AnnotationsAction> for Action {
    fn from(action: AnnotationsAction) -> Self {
        Self::Annotations(action)
    }
}

impl From<SelectionAction> for Action {
    fn from(action: SelectionAction) -> Self {
        Self::Selection(action)
    }
}

impl From<DirectLinkedAction> for Action {
    fn from(action: DirectLinkedAction) -> Self {
        Self::DirectLinked(action)
    }
}

impl From<ViewerAction> for Action {
    fn from(action: ViewerAction) -> Self {
        Self::Viewer(action)
    }
}
