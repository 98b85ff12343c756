//! The store container.
//!
//! [`Store`] owns the [`SidebarState`]. Components read it through
//! [`Store::state`] or a subscription, and change it only by dispatching
//! actions. Dispatch is synchronous: the action is applied to completion and
//! every subscriber is notified, in subscription order, before `dispatch`
//! returns.

use std::collections::HashMap;
use std::fmt;

use sidebar_model::{
    Annotation, AnnotationDraft, AnnotationId, FocusUser, SortKey, Tab, Tag, ThreadKey,
};
use tracing::debug;

use crate::action::{
    Action, AnnotationsAction, DirectLinkedAction, SelectionAction, ViewerAction,
};
use crate::config::StoreConfig;
use crate::handler::{
    ActionHandler, AnnotationsHandler, DirectLinkedHandler, Effect, SelectionHandler,
    ViewerHandler,
};
use crate::state::SidebarState;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SidebarState)>;

pub struct Store {
    state: SidebarState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl Store {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            state: SidebarState::from_config(config),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> Effect {
        let action = action.into();
        debug!(action = action.name(), "dispatch");
        let effect = match action {
            Action::Annotations(action) => AnnotationsHandler.handle(&mut self.state, action),
            Action::Selection(action) => SelectionHandler.handle(&mut self.state, action),
            Action::DirectLinked(action) => DirectLinkedHandler.handle(&mut self.state, action),
            Action::Viewer(action) => ViewerHandler.handle(&mut self.state, action),
        };
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        effect
    }

    /// Register a listener called with the settled state after each dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&SidebarState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    // =========================================================================
    // Annotation collection
    // =========================================================================

    /// Returns [`Effect::AnchoringTimeout`] when new records are still anchoring.
    pub fn add_annotations(&mut self, annotations: Vec<Annotation>) -> Effect {
        self.dispatch(AnnotationsAction::AddAnnotations(annotations))
    }

    pub fn remove_annotations(&mut self, annotations: Vec<Annotation>) {
        self.dispatch(AnnotationsAction::RemoveAnnotations(annotations));
    }

    pub fn clear_annotations(&mut self) {
        self.dispatch(AnnotationsAction::ClearAnnotations);
    }

    pub fn create_annotation(&mut self, draft: AnnotationDraft) -> Effect {
        self.dispatch(AnnotationsAction::CreateAnnotation(draft))
    }

    pub fn hide_annotation(&mut self, id: AnnotationId) {
        self.dispatch(AnnotationsAction::HideAnnotation(id));
    }

    pub fn unhide_annotation(&mut self, id: AnnotationId) {
        self.dispatch(AnnotationsAction::UnhideAnnotation(id));
    }

    pub fn update_flag_status(&mut self, id: AnnotationId, is_flagged: bool) {
        self.dispatch(AnnotationsAction::UpdateFlagStatus { id, is_flagged });
    }

    pub fn update_anchor_status(&mut self, statuses: HashMap<Tag, bool>) {
        self.dispatch(AnnotationsAction::UpdateAnchorStatus(statuses));
    }

    pub fn mark_unanchored_as_orphans(&mut self, tags: Vec<Tag>) {
        self.dispatch(AnnotationsAction::MarkUnanchoredAsOrphans(tags));
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select_annotations(&mut self, ids: Vec<AnnotationId>) {
        self.dispatch(SelectionAction::SelectAnnotations(ids));
    }

    pub fn toggle_selected_annotations(&mut self, ids: Vec<AnnotationId>) {
        self.dispatch(SelectionAction::ToggleSelectedAnnotations(ids));
    }

    pub fn clear_selected_annotations(&mut self) {
        self.dispatch(SelectionAction::ClearSelectedAnnotations);
    }

    pub fn focus_annotations(&mut self, ids: Vec<AnnotationId>) {
        self.dispatch(SelectionAction::FocusAnnotations(ids));
    }

    pub fn highlight_annotations(&mut self, ids: Vec<AnnotationId>) {
        self.dispatch(SelectionAction::HighlightAnnotations(ids));
    }

    pub fn set_force_visible(&mut self, key: impl Into<ThreadKey>, visible: bool) {
        self.dispatch(SelectionAction::SetForceVisible {
            key: key.into(),
            visible,
        });
    }

    pub fn set_collapsed(&mut self, key: impl Into<ThreadKey>, collapsed: bool) {
        self.dispatch(SelectionAction::SetCollapsed {
            key: key.into(),
            collapsed,
        });
    }

    pub fn set_filter_query(&mut self, query: Option<String>) {
        self.dispatch(SelectionAction::SetFilterQuery(query));
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.dispatch(SelectionAction::SelectTab(tab));
    }

    /// Select a tab by its name. Unknown names are ignored without
    /// dispatching anything.
    pub fn select_tab_named(&mut self, name: &str) -> bool {
        match name.parse::<Tab>() {
            Ok(tab) => {
                self.select_tab(tab);
                true
            }
            Err(error) => {
                debug!(%error, "ignoring tab selection");
                false
            }
        }
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.dispatch(SelectionAction::SetSortKey(key));
    }

    pub fn change_focus_mode_user(&mut self, user: FocusUser) {
        self.dispatch(SelectionAction::ChangeFocusModeUser(user));
    }

    pub fn set_focus_mode_focused(&mut self, focused: bool) {
        self.dispatch(SelectionAction::SetFocusModeFocused(focused));
    }

    // =========================================================================
    // Direct-linked ids and viewer
    // =========================================================================

    pub fn set_direct_linked_annotation_id(&mut self, id: AnnotationId) {
        self.dispatch(DirectLinkedAction::SetAnnotationId(id));
    }

    pub fn set_direct_linked_group_id(&mut self, group: String) {
        self.dispatch(DirectLinkedAction::SetGroupId(group));
    }

    pub fn set_direct_linked_group_fetch_failed(&mut self) {
        self.dispatch(DirectLinkedAction::SetGroupFetchFailed);
    }

    pub fn clear_direct_linked_group_fetch_failed(&mut self) {
        self.dispatch(DirectLinkedAction::ClearGroupFetchFailed);
    }

    pub fn clear_direct_linked_ids(&mut self) {
        self.dispatch(DirectLinkedAction::ClearIds);
    }

    pub fn set_app_is_sidebar(&mut self, is_sidebar: bool) {
        self.dispatch(ViewerAction::SetAppIsSidebar(is_sidebar));
    }

    pub fn set_show_highlights(&mut self, visible: bool) {
        self.dispatch(ViewerAction::SetShowHighlights(visible));
    }
}
