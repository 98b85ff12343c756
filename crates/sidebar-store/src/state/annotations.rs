//! The annotation collection.
//!
//! Records are kept in insertion order; display order is a separate concern
//! (see [`crate::sorting`]). Identity is matched by server id first and by
//! client tag second, so a record keeps its slot when it is saved and comes
//! back from the service with an id.

use std::collections::HashMap;

use serde::Serialize;
use sidebar_model::{Annotation, AnnotationId, AnnotationKind, Tag, ThreadKey};

/// A record that entered the collection for the first time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedAnnotation {
    pub thread_key: ThreadKey,
    pub kind: AnnotationKind,
    pub is_reply: bool,
}

/// What an `add` call did to the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Genuinely new records, in input order.
    pub added: Vec<AddedAnnotation>,
    /// Number of existing records replaced in place.
    pub updated: usize,
    /// Tags of new saved records whose anchoring is still pending.
    pub awaiting_anchor: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotationsState {
    pub annotations: Vec<Annotation>,
    #[serde(skip)]
    next_tag: u64,
}

impl AnnotationsState {
    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert or replace records.
    ///
    /// A record sharing an id or tag with an existing one replaces it in
    /// place, keeping the client-only fields the incoming copy lacks. Anything
    /// else is appended with a fresh tag.
    pub fn add(&mut self, incoming: Vec<Annotation>) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for mut annotation in incoming {
            if let Some(pos) = self.position_of(&annotation) {
                let existing = &self.annotations[pos];
                if annotation.tag.is_none() {
                    annotation.tag = existing.tag.clone();
                }
                if annotation.orphan.is_none() {
                    annotation.orphan = existing.orphan;
                }
                self.annotations[pos] = annotation;
                outcome.updated += 1;
                continue;
            }

            if annotation.tag.is_none() {
                annotation.tag = Some(self.allocate_tag());
            }
            // Unsaved annotations were just created against the current
            // document, so they are anchored by construction.
            if annotation.id.is_none() && annotation.orphan.is_none() {
                annotation.orphan = Some(false);
            }

            if let Some(thread_key) = annotation.thread_key() {
                outcome.added.push(AddedAnnotation {
                    thread_key,
                    kind: annotation.kind(),
                    is_reply: annotation.is_reply(),
                });
            }
            if annotation.is_saved()
                && annotation.is_waiting_to_anchor()
                && !annotation.is_page_note()
                && let Some(tag) = &annotation.tag
            {
                outcome.awaiting_anchor.push(tag.clone());
            }
            self.annotations.push(annotation);
        }

        outcome
    }

    /// Remove every record matching one of `targets` by id or tag.
    ///
    /// Returns the ids and tags of the removed records so the selection
    /// state can forget them.
    pub fn remove(&mut self, targets: &[Annotation]) -> Vec<ThreadKey> {
        let mut removed = Vec::new();
        self.annotations.retain(|annotation| {
            let matched = targets.iter().any(|t| annotation.same_identity(t));
            if matched {
                removed.extend(annotation.id.as_ref().map(ThreadKey::from));
                removed.extend(annotation.tag.as_ref().map(ThreadKey::from));
            }
            !matched
        });
        removed
    }

    /// Drop every record. The tag counter keeps counting.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Set the moderation `hidden` flag. Returns false if `id` is unknown.
    pub fn set_hidden(&mut self, id: &AnnotationId, hidden: bool) -> bool {
        match self.find_by_id_mut(id) {
            Some(annotation) => {
                annotation.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Flag or unflag an annotation for moderation.
    ///
    /// When the record carries moderation data its flag count follows the
    /// transition: +1 on unflagged → flagged, −1 on flagged → unflagged (never
    /// below zero). Returns false if `id` is unknown.
    pub fn update_flag_status(&mut self, id: &AnnotationId, is_flagged: bool) -> bool {
        let Some(annotation) = self.find_by_id_mut(id) else {
            return false;
        };
        let was_flagged = annotation.flagged;
        annotation.flagged = is_flagged;
        if let Some(moderation) = annotation.moderation.as_mut() {
            if is_flagged && !was_flagged {
                moderation.flag_count += 1;
            } else if !is_flagged && was_flagged && moderation.flag_count > 0 {
                moderation.flag_count -= 1;
            }
        }
        true
    }

    /// Record anchoring results, keyed by tag. Unknown tags are ignored.
    pub fn update_anchor_status(&mut self, statuses: &HashMap<Tag, bool>) -> usize {
        let mut changed = 0;
        for annotation in &mut self.annotations {
            if let Some(is_orphan) = annotation.tag.as_ref().and_then(|t| statuses.get(t)) {
                annotation.orphan = Some(*is_orphan);
                changed += 1;
            }
        }
        changed
    }

    /// Mark the listed records as orphans if they are still anchoring.
    pub fn mark_unanchored_as_orphans(&mut self, tags: &[Tag]) -> usize {
        let mut changed = 0;
        for annotation in &mut self.annotations {
            let listed = annotation.tag.as_ref().is_some_and(|t| tags.contains(t));
            if listed && annotation.is_waiting_to_anchor() {
                annotation.orphan = Some(true);
                changed += 1;
            }
        }
        changed
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    pub fn note_count(&self) -> usize {
        self.count_top_level(AnnotationKind::PageNote)
    }

    pub fn annotation_count(&self) -> usize {
        self.count_top_level(AnnotationKind::Annotation)
    }

    pub fn orphan_count(&self) -> usize {
        self.count_top_level(AnnotationKind::Orphan)
    }

    pub fn saved_annotations(&self) -> Vec<&Annotation> {
        self.annotations.iter().filter(|a| a.is_saved()).collect()
    }

    pub fn find_by_id(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id.as_ref() == Some(id))
    }

    pub fn find_by_tag(&self, tag: &Tag) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.tag.as_ref() == Some(tag))
    }

    pub fn annotation_exists(&self, id: &AnnotationId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Server ids for the given tags, in tag order; unsaved records are skipped.
    pub fn find_ids_for_tags(&self, tags: &[Tag]) -> Vec<AnnotationId> {
        tags.iter()
            .filter_map(|tag| self.find_by_tag(tag))
            .filter_map(|a| a.id.clone())
            .collect()
    }

    pub fn is_waiting_to_anchor_annotations(&self) -> bool {
        self.annotations.iter().any(Annotation::is_waiting_to_anchor)
    }

    fn count_top_level(&self, kind: AnnotationKind) -> usize {
        self.annotations
            .iter()
            .filter(|a| !a.is_reply() && a.kind() == kind)
            .count()
    }

    fn position_of(&self, annotation: &Annotation) -> Option<usize> {
        if let Some(id) = &annotation.id
            && let Some(pos) = self
                .annotations
                .iter()
                .position(|a| a.id.as_ref() == Some(id))
        {
            return Some(pos);
        }
        let tag = annotation.tag.as_ref()?;
        self.annotations
            .iter()
            .position(|a| a.tag.as_ref() == Some(tag))
    }

    fn find_by_id_mut(&mut self, id: &AnnotationId) -> Option<&mut Annotation> {
        self.annotations
            .iter_mut()
            .find(|a| a.id.as_ref() == Some(id))
    }

    /// Next counter tag not already carried by a loaded record.
    fn allocate_tag(&mut self) -> Tag {
        loop {
            self.next_tag += 1;
            let tag = Tag::generated(self.next_tag);
            if self.find_by_tag(&tag).is_none() {
                return tag;
            }
        }
    }
}
