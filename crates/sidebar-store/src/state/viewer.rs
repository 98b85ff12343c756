use serde::Serialize;

/// Which client app is running and whether highlights are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    /// False for the stand-alone annotation viewer, which never anchors.
    pub is_sidebar: bool,
    pub visible_highlights: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            is_sidebar: true,
            visible_highlights: false,
        }
    }
}
