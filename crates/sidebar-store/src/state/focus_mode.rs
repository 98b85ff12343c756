//! Focus mode: restricting the sidebar to a single user's annotations.
//!
//! Focus mode is *enabled* when the host configured a focus user, and
//! *focused* while the user has not toggled the restriction off. Only
//! [`FocusModeState::change_user`] can enable or disable it after startup.

use serde::Serialize;
use sidebar_model::FocusUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusModeState {
    pub enabled: bool,
    pub focused: bool,
    pub user: FocusUser,
}

impl Default for FocusModeState {
    fn default() -> Self {
        Self {
            enabled: false,
            focused: true,
            user: FocusUser::default(),
        }
    }
}

impl FocusModeState {
    /// Initial state for an optional configured user.
    pub fn from_config(user: Option<&FocusUser>) -> Self {
        Self {
            enabled: user.is_some(),
            focused: true,
            user: user.cloned().unwrap_or_default(),
        }
    }

    /// Replace the focused user.
    ///
    /// A user without a `username` is how hosts ask for focus mode to be
    /// switched off.
    pub fn change_user(&mut self, user: FocusUser) {
        let active = user.username.is_some();
        self.enabled = active;
        self.focused = active;
        self.user = user;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// True when focus mode is enabled and currently applied.
    pub fn is_focused(&self) -> bool {
        self.enabled && self.focused
    }

    /// `userid`, falling back to the legacy `username`.
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .userid
            .as_deref()
            .or(self.user.username.as_deref())
    }

    /// Best human-readable name: display name, then userid, then username.
    pub fn user_pretty_name(&self) -> &str {
        self.user
            .display_name
            .as_deref()
            .or(self.user.userid.as_deref())
            .or(self.user.username.as_deref())
            .unwrap_or("")
    }

    /// Enabled with a non-empty `userid`. A display name alone is not enough.
    pub fn has_user(&self) -> bool {
        self.enabled && self.user.userid.as_deref().is_some_and(|id| !id.is_empty())
    }
}
