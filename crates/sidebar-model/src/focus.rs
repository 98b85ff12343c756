use serde::{Deserialize, Serialize};

/// The user whose annotations focus mode restricts the sidebar to.
///
/// Hosts send any subset of these fields; an object with none of them is
/// valid and simply has no usable identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    /// Legacy identity still sent by some hosts in place of `userid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl FocusUser {
    pub fn with_userid(userid: impl Into<String>) -> Self {
        Self {
            userid: Some(userid.into()),
            ..Self::default()
        }
    }

    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
