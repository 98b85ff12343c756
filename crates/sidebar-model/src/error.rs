use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid annotation id: {0:?}")]
    InvalidAnnotationId(String),
    #[error("invalid annotation tag: {0:?}")]
    InvalidTag(String),
    #[error("unknown tab: {0}")]
    UnknownTab(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
