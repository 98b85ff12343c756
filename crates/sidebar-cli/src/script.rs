//! Action scripts and the replay loop.
//!
//! A script is JSON lines: one [`ScriptStep`] object per line, tagged by its
//! `action` field with the store's operation names. Blank lines and lines
//! starting with `#` are skipped.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sidebar_model::{Annotation, AnnotationDraft, AnnotationId, FocusUser, SortKey, Tab, Tag};
use sidebar_store::{
    Action, AnnotationsAction, DirectLinkedAction, Effect, SelectionAction, Store, StoreConfig,
    ViewerAction,
};
use tracing::{debug, info, trace};

/// One line of an action script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ScriptStep {
    AddAnnotations { annotations: Vec<Annotation> },
    RemoveAnnotations { annotations: Vec<Annotation> },
    ClearAnnotations,
    CreateAnnotation { annotation: AnnotationDraft },
    HideAnnotation { id: AnnotationId },
    UnhideAnnotation { id: AnnotationId },
    UpdateFlagStatus { id: AnnotationId, is_flagged: bool },
    UpdateAnchorStatus { statuses: HashMap<Tag, bool> },
    MarkUnanchoredAsOrphans { tags: Vec<Tag> },
    /// Fire every anchoring timeout requested so far.
    AnchoringTimeout,

    SelectAnnotations { ids: Vec<AnnotationId> },
    ToggleSelectedAnnotations { ids: Vec<AnnotationId> },
    ClearSelectedAnnotations,
    FocusAnnotations { ids: Vec<AnnotationId> },
    HighlightAnnotations { ids: Vec<AnnotationId> },
    SetForceVisible { id: AnnotationId, visible: bool },
    SetCollapsed { id: AnnotationId, collapsed: bool },
    SetFilterQuery {
        #[serde(default)]
        query: Option<String>,
    },
    /// Kept as text so unknown names can be ignored rather than rejected.
    SelectTab { tab: String },
    SetSortKey { sort_key: SortKey },
    ChangeFocusModeUser { user: FocusUser },
    SetFocusModeFocused { focused: bool },

    SetDirectLinkedAnnotationId { id: AnnotationId },
    SetDirectLinkedGroupId { group_id: String },
    SetDirectLinkedGroupFetchFailed,
    ClearDirectLinkedGroupFetchFailed,
    ClearDirectLinkedIds,

    SetAppIsSidebar { is_sidebar: bool },
    SetShowHighlights { visible: bool },
}

impl ScriptStep {
    /// The store action for this step.
    ///
    /// Returns `None` for steps the store has no action for: an unknown tab
    /// name, or the replay-only anchoring timeout.
    pub fn into_action(self) -> Option<Action> {
        let action: Action = match self {
            Self::AddAnnotations { annotations } => {
                AnnotationsAction::AddAnnotations(annotations).into()
            }
            Self::RemoveAnnotations { annotations } => {
                AnnotationsAction::RemoveAnnotations(annotations).into()
            }
            Self::ClearAnnotations => AnnotationsAction::ClearAnnotations.into(),
            Self::CreateAnnotation { annotation } => {
                AnnotationsAction::CreateAnnotation(annotation).into()
            }
            Self::HideAnnotation { id } => AnnotationsAction::HideAnnotation(id).into(),
            Self::UnhideAnnotation { id } => AnnotationsAction::UnhideAnnotation(id).into(),
            Self::UpdateFlagStatus { id, is_flagged } => {
                AnnotationsAction::UpdateFlagStatus { id, is_flagged }.into()
            }
            Self::UpdateAnchorStatus { statuses } => {
                AnnotationsAction::UpdateAnchorStatus(statuses).into()
            }
            Self::MarkUnanchoredAsOrphans { tags } => {
                AnnotationsAction::MarkUnanchoredAsOrphans(tags).into()
            }
            Self::AnchoringTimeout => return None,

            Self::SelectAnnotations { ids } => SelectionAction::SelectAnnotations(ids).into(),
            Self::ToggleSelectedAnnotations { ids } => {
                SelectionAction::ToggleSelectedAnnotations(ids).into()
            }
            Self::ClearSelectedAnnotations => SelectionAction::ClearSelectedAnnotations.into(),
            Self::FocusAnnotations { ids } => SelectionAction::FocusAnnotations(ids).into(),
            Self::HighlightAnnotations { ids } => {
                SelectionAction::HighlightAnnotations(ids).into()
            }
            Self::SetForceVisible { id, visible } => {
                SelectionAction::SetForceVisible {
                    key: id.into(),
                    visible,
                }
                .into()
            }
            Self::SetCollapsed { id, collapsed } => {
                SelectionAction::SetCollapsed {
                    key: id.into(),
                    collapsed,
                }
                .into()
            }
            Self::SetFilterQuery { query } => SelectionAction::SetFilterQuery(query).into(),
            Self::SelectTab { tab } => match tab.parse::<Tab>() {
                Ok(tab) => SelectionAction::SelectTab(tab).into(),
                Err(error) => {
                    debug!(%error, "skipping tab selection");
                    return None;
                }
            },
            Self::SetSortKey { sort_key } => SelectionAction::SetSortKey(sort_key).into(),
            Self::ChangeFocusModeUser { user } => {
                SelectionAction::ChangeFocusModeUser(user).into()
            }
            Self::SetFocusModeFocused { focused } => {
                SelectionAction::SetFocusModeFocused(focused).into()
            }

            Self::SetDirectLinkedAnnotationId { id } => {
                DirectLinkedAction::SetAnnotationId(id).into()
            }
            Self::SetDirectLinkedGroupId { group_id } => {
                DirectLinkedAction::SetGroupId(group_id).into()
            }
            Self::SetDirectLinkedGroupFetchFailed => DirectLinkedAction::SetGroupFetchFailed.into(),
            Self::ClearDirectLinkedGroupFetchFailed => {
                DirectLinkedAction::ClearGroupFetchFailed.into()
            }
            Self::ClearDirectLinkedIds => DirectLinkedAction::ClearIds.into(),

            Self::SetAppIsSidebar { is_sidebar } => ViewerAction::SetAppIsSidebar(is_sidebar).into(),
            Self::SetShowHighlights { visible } => ViewerAction::SetShowHighlights(visible).into(),
        };
        Some(action)
    }
}

/// Parse a script, reporting the 1-based line number of the first bad step.
pub fn parse_script(content: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = serde_json::from_str(line)
            .with_context(|| format!("invalid script step on line {}", index + 1))?;
        steps.push(step);
    }
    Ok(steps)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("parse script {}", path.display()))
}

/// A store plus the bookkeeping a scripted run needs.
#[derive(Debug)]
pub struct Replay {
    store: Store,
    pending_anchor: Vec<Tag>,
    applied: usize,
    ignored: usize,
}

impl Replay {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            store: Store::new(config),
            pending_anchor: Vec::new(),
            applied: 0,
            ignored: 0,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Steps that reached the store.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Steps skipped because the store had nothing to do for them.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Tags whose anchoring timeout has been requested but not fired.
    pub fn pending_anchor(&self) -> &[Tag] {
        &self.pending_anchor
    }

    pub fn apply(&mut self, step: ScriptStep) {
        trace!(?step, "script step");
        if matches!(step, ScriptStep::AnchoringTimeout) {
            self.fire_anchoring_timeout();
            return;
        }
        let Some(action) = step.into_action() else {
            self.ignored += 1;
            return;
        };
        self.applied += 1;
        match self.store.dispatch(action) {
            Effect::AnchoringTimeout { tags } => self.pending_anchor.extend(tags),
            Effect::None => {}
        }
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = ScriptStep>) {
        for step in steps {
            self.apply(step);
        }
        info!(
            applied = self.applied,
            ignored = self.ignored,
            annotations = self.store.state().annotations.annotations.len(),
            "replay finished"
        );
    }

    fn fire_anchoring_timeout(&mut self) {
        if self.pending_anchor.is_empty() {
            self.ignored += 1;
            return;
        }
        self.applied += 1;
        let tags = std::mem::take(&mut self.pending_anchor);
        self.store.mark_unanchored_as_orphans(tags);
    }
}
