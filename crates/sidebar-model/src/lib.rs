pub mod annotation;
pub mod error;
pub mod focus;
pub mod ids;
pub mod tab;

pub use annotation::{
    Annotation, AnnotationDraft, AnnotationKind, Moderation, Permissions, Selector, Target,
};
pub use error::{ModelError, Result};
pub use focus::FocusUser;
pub use ids::{AnnotationId, Tag, ThreadKey};
pub use tab::{SortKey, Tab};
