use super::{ActionHandler, Effect};
use crate::action::ViewerAction;
use crate::state::SidebarState;

/// Handler for viewer actions.
pub struct ViewerHandler;

impl ActionHandler<ViewerAction> for ViewerHandler {
    fn handle(&self, state: &mut SidebarState, action: ViewerAction) -> Effect {
        match action {
            ViewerAction::SetAppIsSidebar(is_sidebar) => state.viewer.is_sidebar = is_sidebar,
            ViewerAction::SetShowHighlights(visible) => state.viewer.visible_highlights = visible,
        }
        Effect::None
    }
}
