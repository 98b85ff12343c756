use sidebar_model::AnnotationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectLinkedAction {
    SetAnnotationId(AnnotationId),
    SetGroupId(String),
    SetGroupFetchFailed,
    ClearGroupFetchFailed,
    /// Forget both direct-linked ids
    ClearIds,
}

impl DirectLinkedAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAnnotationId(_) => "setDirectLinkedAnnotationId",
            Self::SetGroupId(_) => "setDirectLinkedGroupId",
            Self::SetGroupFetchFailed => "setDirectLinkedGroupFetchFailed",
            Self::ClearGroupFetchFailed => "clearDirectLinkedGroupFetchFailed",
            Self::ClearIds => "clearDirectLinkedIds",
        }
    }
}
