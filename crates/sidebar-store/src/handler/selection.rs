//! Selection, tab/sort and focus-mode handler.

use super::{ActionHandler, Effect};
use crate::action::SelectionAction;
use crate::state::SidebarState;

/// Handler for selection actions. Touches only `state.selection`.
pub struct SelectionHandler;

impl ActionHandler<SelectionAction> for SelectionHandler {
    fn handle(&self, state: &mut SidebarState, action: SelectionAction) -> Effect {
        let selection = &mut state.selection;
        match action {
            SelectionAction::SelectAnnotations(ids) => selection.select_annotations(ids),
            SelectionAction::ToggleSelectedAnnotations(ids) => {
                selection.toggle_selected_annotations(ids);
            }
            SelectionAction::ClearSelectedAnnotations => selection.clear_selected_annotations(),
            SelectionAction::FocusAnnotations(ids) => selection.focus_annotations(ids),
            SelectionAction::HighlightAnnotations(ids) => selection.highlight_annotations(ids),
            SelectionAction::SetForceVisible { key, visible } => {
                selection.set_force_visible(key, visible);
            }
            SelectionAction::SetCollapsed { key, collapsed } => {
                selection.set_collapsed(key, collapsed);
            }
            SelectionAction::SetFilterQuery(query) => selection.set_filter_query(query),
            SelectionAction::SelectTab(tab) => selection.select_tab(tab),
            SelectionAction::SetSortKey(key) => selection.set_sort_key(key),
            SelectionAction::ChangeFocusModeUser(user) => selection.focus_mode.change_user(user),
            SelectionAction::SetFocusModeFocused(focused) => {
                selection.focus_mode.set_focused(focused);
            }
        }
        Effect::None
    }
}
