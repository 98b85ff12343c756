#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    SetAppIsSidebar(bool),
    SetShowHighlights(bool),
}

impl ViewerAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAppIsSidebar(_) => "setAppIsSidebar",
            Self::SetShowHighlights(_) => "setShowHighlights",
        }
    }
}
