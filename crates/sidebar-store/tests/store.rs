//! End-to-end tests driving the store through its action surface.

use std::cell::RefCell;
use std::rc::Rc;

use sidebar_model::{
    Annotation, AnnotationDraft, AnnotationId, FocusUser, Moderation, SortKey, Tab, Tag, Target,
};
use sidebar_store::{Effect, FocusConfig, Store, StoreConfig};

fn id(value: &str) -> AnnotationId {
    AnnotationId::new(value).unwrap()
}

fn ids(values: &[&str]) -> Vec<AnnotationId> {
    values.iter().copied().map(id).collect()
}

fn annotation(value: &str) -> Annotation {
    Annotation {
        id: Some(id(value)),
        target: vec![Target::source("s")],
        ..Annotation::default()
    }
}

fn page_note(value: &str) -> Annotation {
    Annotation {
        id: Some(id(value)),
        ..Annotation::default()
    }
}

fn selected(store: &Store) -> Option<Vec<String>> {
    store
        .state()
        .selection
        .selected_annotations
        .as_ref()
        .map(|set| set.iter().map(ToString::to_string).collect())
}

fn store_with_focus(user: Option<FocusUser>) -> Store {
    Store::new(&StoreConfig {
        focus: Some(FocusConfig { user }),
        ..StoreConfig::default()
    })
}

// --- annotation lifecycle ---

#[test]
fn adding_a_top_level_annotation_expands_it_and_reveals_its_tab() {
    let mut store = Store::default();
    store.select_tab(Tab::Notes);

    store.add_annotations(vec![annotation("a1")]);

    let selection = &store.state().selection;
    assert_eq!(selection.selected_tab, Tab::Annotations);
    assert_eq!(selection.is_thread_expanded(&id("a1")), Some(true));
}

#[test]
fn created_reply_keeps_parent_expanded() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("a1")]);

    store.create_annotation(AnnotationDraft {
        references: ids(&["a1"]),
        target: vec![Target::source("s")],
        ..AnnotationDraft::default()
    });

    let state = store.state();
    assert_eq!(state.annotations.annotations.len(), 2);
    let reply = &state.annotations.annotations[1];
    assert!(reply.id.is_none());
    assert_eq!(reply.tag, Some(Tag::generated(2)));
    assert_eq!(state.selection.is_thread_expanded(&id("a1")), Some(true));
}

#[test]
fn creating_a_reply_re_expands_a_collapsed_parent() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("annotation_id")]);
    store.set_collapsed(id("annotation_id"), true);

    store.create_annotation(AnnotationDraft {
        references: ids(&["annotation_id"]),
        target: vec![Target::source("http://example.org")],
        ..AnnotationDraft::default()
    });

    assert_eq!(
        store.state().selection.is_thread_expanded(&id("annotation_id")),
        Some(true)
    );
}

#[test]
fn creating_a_page_note_switches_to_notes_tab() {
    let mut store = Store::default();
    store.create_annotation(AnnotationDraft::default());

    let selection = &store.state().selection;
    assert_eq!(selection.selected_tab, Tab::Notes);
    assert_eq!(selection.sort_key, SortKey::Oldest);
    // Unsaved records are keyed by tag until they are saved.
    assert_eq!(selection.is_thread_expanded(Tag::generated(1)), Some(true));
    assert_eq!(selection.is_thread_expanded(&id("t1")), None);
}

#[test]
fn updates_to_existing_annotations_do_not_switch_tab() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("a1")]);
    store.select_tab(Tab::Orphans);
    store.set_collapsed(id("a1"), true);

    let mut edited = annotation("a1");
    edited.text = "edited".to_string();
    store.add_annotations(vec![edited]);

    let selection = &store.state().selection;
    assert_eq!(selection.selected_tab, Tab::Orphans);
    assert_eq!(selection.is_thread_expanded(&id("a1")), Some(false));
}

#[test]
fn replies_do_not_switch_tab() {
    let mut store = Store::default();
    store.add_annotations(vec![page_note("n1")]);
    assert_eq!(store.state().selection.selected_tab, Tab::Notes);

    let mut reply = annotation("r1");
    reply.references = ids(&["n1"]);
    store.add_annotations(vec![reply]);

    assert_eq!(store.state().selection.selected_tab, Tab::Notes);
    assert_eq!(store.state().selection.is_thread_expanded(&id("r1")), None);
}

#[test]
fn removing_annotations_clears_their_selection() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("x"), annotation("y")]);
    store.select_annotations(ids(&["x", "y"]));

    store.remove_annotations(vec![annotation("x")]);
    assert_eq!(selected(&store), Some(vec!["y".to_string()]));

    store.remove_annotations(vec![annotation("y")]);
    assert_eq!(selected(&store), None);
    assert!(store.state().annotations.annotations.is_empty());
}

#[test]
fn created_annotation_never_reuses_an_incoming_tag() {
    let mut store = Store::default();
    store.add_annotations(vec![Annotation {
        tag: Some(Tag::generated(1)),
        target: vec![Target::source("s")],
        ..Annotation::default()
    }]);

    store.create_annotation(AnnotationDraft {
        target: vec![Target::source("s")],
        ..AnnotationDraft::default()
    });

    let tags: Vec<_> = store
        .state()
        .annotations
        .annotations
        .iter()
        .map(|a| a.tag.clone())
        .collect();
    assert_eq!(tags, vec![Some(Tag::generated(1)), Some(Tag::generated(2))]);

    // Removing the new draft leaves the tagged record alone.
    store.remove_annotations(vec![Annotation {
        tag: Some(Tag::generated(2)),
        ..Annotation::default()
    }]);
    assert_eq!(store.state().annotations.annotations.len(), 1);
}

#[test]
fn removing_a_draft_keeps_selection_of_id_spelled_like_its_tag() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("t2")]);
    store.create_annotation(AnnotationDraft {
        target: vec![Target::source("s")],
        ..AnnotationDraft::default()
    });
    store.select_annotations(ids(&["t2"]));

    store.remove_annotations(vec![Annotation {
        tag: Some(Tag::generated(2)),
        ..Annotation::default()
    }]);

    let state = store.state();
    assert_eq!(selected(&store), Some(vec!["t2".to_string()]));
    assert!(state.annotations.annotation_exists(&id("t2")));
    assert!(state.selection.is_annotation_selected(&id("t2")));
    assert_eq!(state.selection.is_thread_expanded(&id("t2")), Some(true));
    assert_eq!(state.selection.is_thread_expanded(Tag::generated(2)), None);
}

#[test]
fn clear_annotations_resets_thread_state() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("a"), annotation("b")]);
    store.select_annotations(ids(&["a"]));
    store.highlight_annotations(ids(&["b"]));

    store.clear_annotations();

    let state = store.state();
    assert!(state.annotations.annotations.is_empty());
    assert_eq!(state.selection.selected_annotations, None);
    assert!(state.selection.highlighted.is_empty());
    assert!(state.selection.expanded.is_empty());
}

// --- moderation ---

#[test]
fn hide_and_unhide() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("a")]);

    store.hide_annotation(id("a"));
    assert!(store.state().annotations.find_by_id(&id("a")).unwrap().hidden);

    store.unhide_annotation(id("a"));
    assert!(!store.state().annotations.find_by_id(&id("a")).unwrap().hidden);
}

#[test]
fn hiding_unknown_annotation_is_a_no_op() {
    let mut store = Store::default();
    store.add_annotations(vec![annotation("a")]);
    let before = store.state().annotations.annotations.clone();

    store.hide_annotation(id("gone"));
    store.update_flag_status(id("gone"), true);

    assert_eq!(store.state().annotations.annotations, before);
}

#[test]
fn flagging_counts_only_transitions() {
    let mut store = Store::default();
    let mut ann = annotation("a");
    ann.moderation = Some(Moderation { flag_count: 0 });
    store.add_annotations(vec![ann]);

    store.update_flag_status(id("a"), true);
    store.update_flag_status(id("a"), true);

    let stored = store.state().annotations.find_by_id(&id("a")).unwrap();
    assert!(stored.flagged);
    assert_eq!(stored.moderation, Some(Moderation { flag_count: 1 }));
}

// --- anchoring ---

#[test]
fn sidebar_requests_anchoring_timeout_for_pending_annotations() {
    let mut store = Store::default();
    let effect = store.add_annotations(vec![annotation("a"), page_note("n")]);
    assert_eq!(
        effect,
        Effect::AnchoringTimeout {
            tags: vec![Tag::generated(1)]
        }
    );
    assert!(store.state().annotations.is_waiting_to_anchor_annotations());

    let Effect::AnchoringTimeout { tags } = effect else {
        unreachable!()
    };
    store.mark_unanchored_as_orphans(tags);

    let annotations = &store.state().annotations;
    assert_eq!(annotations.orphan_count(), 1);
    assert_eq!(annotations.annotation_count(), 0);
}

#[test]
fn stand_alone_viewer_never_waits_for_anchoring() {
    let mut store = Store::default();
    store.set_app_is_sidebar(false);
    assert!(store.add_annotations(vec![annotation("a")]).is_none());
}

// --- tabs and sorting ---

#[test]
fn notes_tab_keeps_explicit_sort_choice() {
    let mut store = Store::default();
    store.select_tab(Tab::Notes);
    assert_eq!(
        store.state().selection.sort_keys_available,
        vec![SortKey::Newest, SortKey::Oldest]
    );
    assert_eq!(store.state().selection.sort_key, SortKey::Oldest);

    store.set_sort_key(SortKey::Newest);
    store.select_tab(Tab::Notes);

    assert_eq!(store.state().selection.sort_key, SortKey::Newest);
}

#[test]
fn location_sort_resets_when_switching_to_notes() {
    let mut store = Store::default();
    assert_eq!(store.state().selection.sort_key, SortKey::Location);
    store.select_tab(Tab::Notes);
    assert_eq!(store.state().selection.sort_key, SortKey::Oldest);
}

#[test]
fn tab_annotations_follow_tab_and_sort_key() {
    let mut store = Store::default();
    let mut orphan = annotation("o");
    orphan.orphan = Some(true);
    store.add_annotations(vec![annotation("a"), page_note("n1"), orphan, page_note("n2")]);

    store.select_tab(Tab::Notes);
    let notes: Vec<_> = store
        .state()
        .tab_annotations()
        .iter()
        .map(|a| a.id.clone().unwrap())
        .collect();
    assert_eq!(notes, ids(&["n1", "n2"]));

    store.select_tab(Tab::Orphans);
    assert_eq!(store.state().tab_annotations().len(), 1);
}

// --- focus mode ---

#[test]
fn focus_mode_seeded_from_config() {
    let store = store_with_focus(Some(FocusUser::with_userid("acct:userid@authority")));
    let focus = &store.state().selection.focus_mode;
    assert!(focus.enabled);
    assert!(focus.is_focused());
    assert!(focus.has_user());
    assert_eq!(focus.user_id(), Some("acct:userid@authority"));
    assert_eq!(focus.user_pretty_name(), "acct:userid@authority");
}

#[test]
fn focus_section_without_user_leaves_focus_mode_disabled() {
    let store = store_with_focus(None);
    let focus = &store.state().selection.focus_mode;
    assert!(!focus.enabled);
    assert!(!focus.has_user());
}

#[test]
fn disabling_focus_mode_from_host() {
    let mut store = store_with_focus(Some(FocusUser::with_userid("u")));
    store.set_focus_mode_focused(true);

    store.change_focus_mode_user(FocusUser::default());

    let focus = &store.state().selection.focus_mode;
    assert!(!focus.enabled);
    assert!(!focus.focused);
}

#[test]
fn set_focus_mode_focused_leaves_enabled_alone() {
    let mut store = store_with_focus(Some(FocusUser::default()));
    store.set_focus_mode_focused(false);
    let focus = &store.state().selection.focus_mode;
    assert!(focus.enabled);
    assert!(!focus.focused);
    assert!(!focus.is_focused());
}

// --- direct-linked ids ---

#[test]
fn direct_linked_ids_seeded_and_cleared() {
    let mut store = Store::new(&StoreConfig {
        annotations: Some(id("ann-id")),
        group: Some("group-id".to_string()),
        focus: None,
    });
    let linked = &store.state().direct_linked;
    assert_eq!(linked.annotation_id, Some(id("ann-id")));
    assert_eq!(linked.group_id.as_deref(), Some("group-id"));

    store.set_direct_linked_group_fetch_failed();
    assert!(store.state().direct_linked.group_fetch_failed);
    store.clear_direct_linked_group_fetch_failed();
    assert!(!store.state().direct_linked.group_fetch_failed);

    store.set_direct_linked_annotation_id(id("other"));
    store.set_direct_linked_group_id("other-group".to_string());
    store.clear_direct_linked_ids();
    let linked = &store.state().direct_linked;
    assert_eq!(linked.annotation_id, None);
    assert_eq!(linked.group_id, None);
}

// --- subscriptions ---

#[test]
fn every_dispatch_notifies_with_settled_state() {
    let mut store = Store::default();
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    store.subscribe(move |state| {
        sink.borrow_mut().push((
            state.selection.selected_tab,
            state.selection.is_thread_expanded(&AnnotationId::new("n").unwrap()),
        ));
    });

    store.add_annotations(vec![page_note("n")]);

    // Tab switch and expansion land in the same notification.
    assert_eq!(*snapshots.borrow(), vec![(Tab::Notes, Some(true))]);
}
