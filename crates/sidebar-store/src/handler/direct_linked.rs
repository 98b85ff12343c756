use super::{ActionHandler, Effect};
use crate::action::DirectLinkedAction;
use crate::state::SidebarState;

/// Handler for direct-linked id actions.
pub struct DirectLinkedHandler;

impl ActionHandler<DirectLinkedAction> for DirectLinkedHandler {
    fn handle(&self, state: &mut SidebarState, action: DirectLinkedAction) -> Effect {
        let linked = &mut state.direct_linked;
        match action {
            DirectLinkedAction::SetAnnotationId(id) => linked.annotation_id = Some(id),
            DirectLinkedAction::SetGroupId(group) => linked.group_id = Some(group),
            DirectLinkedAction::SetGroupFetchFailed => linked.group_fetch_failed = true,
            DirectLinkedAction::ClearGroupFetchFailed => linked.group_fetch_failed = false,
            DirectLinkedAction::ClearIds => linked.clear_ids(),
        }
        Effect::None
    }
}
