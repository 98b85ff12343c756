//! Action handlers.
//!
//! Each part of the state has one handler implementing [`ActionHandler`] for
//! its action enum. Handlers get the whole [`SidebarState`] so that an action
//! owned by one part can update another (adding annotations expands their
//! threads and switches tab, removing them clears their selection).
//!
//! ```ignore
//! pub fn dispatch(&mut self, action: Action) -> Effect {
//!     match action {
//!         Action::Annotations(a) => AnnotationsHandler.handle(&mut self.state, a),
//!         Action::Selection(a) => SelectionHandler.handle(&mut self.state, a),
//!         // ...
//!     }
//! }
//! ```

mod annotations;
mod direct_linked;
mod selection;
mod viewer;

use std::time::Duration;

use sidebar_model::Tag;

use crate::state::SidebarState;

pub use annotations::AnnotationsHandler;
pub use direct_linked::DirectLinkedHandler;
pub use selection::SelectionHandler;
pub use viewer::ViewerHandler;

/// How long the host should wait for anchoring before reporting orphans.
pub const ANCHORING_TIMEOUT: Duration = Duration::from_millis(500);

/// Follow-up work a handler asks the host to perform.
///
/// Handlers never block or schedule anything themselves; the host runs the
/// effect and dispatches the resulting action later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    /// After [`ANCHORING_TIMEOUT`], dispatch
    /// `AnnotationsAction::MarkUnanchoredAsOrphans(tags)`.
    AnchoringTimeout { tags: Vec<Tag> },
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Trait for handling one action enum against the sidebar state.
pub trait ActionHandler<A> {
    /// Apply `action` to completion and return any follow-up effect.
    fn handle(&self, state: &mut SidebarState, action: A) -> Effect;
}
