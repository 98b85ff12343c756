//! Sidebar state.
//!
//! The state is split by concern, each part owned by one handler:
//!
//! - **AnnotationsState**: The loaded annotation records
//! - **SelectionState**: Selection, focus, expansion, tab and sort key
//! - **FocusModeState**: Single-user focus mode (inside `SelectionState`)
//! - **DirectLinkedState**: Ids the sidebar was opened for
//! - **ViewerState**: App flavour and highlight visibility
//! - **SidebarState**: Root holding all of the above

mod annotations;
mod direct_linked;
mod focus_mode;
mod selection;
mod sidebar_state;
mod viewer;

pub use annotations::{AddOutcome, AddedAnnotation, AnnotationsState};
pub use direct_linked::DirectLinkedState;
pub use focus_mode::FocusModeState;
pub use selection::SelectionState;
pub use sidebar_state::SidebarState;
pub use viewer::ViewerState;
