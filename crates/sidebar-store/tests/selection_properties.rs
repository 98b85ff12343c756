//! Property tests for selection sets and tab/sort coupling.

use std::collections::HashSet;

use proptest::prelude::*;
use sidebar_model::{AnnotationId, SortKey, Tab};
use sidebar_store::SelectionState;

fn arb_ids() -> impl Strategy<Value = HashSet<String>> {
    proptest::collection::hash_set("[a-z0-9]{1,8}", 0..16)
}

/// Two disjoint id lists.
fn arb_disjoint() -> impl Strategy<Value = (Vec<AnnotationId>, Vec<AnnotationId>)> {
    arb_ids().prop_flat_map(|ids| {
        let ids: Vec<String> = ids.into_iter().collect();
        let len = ids.len();
        (Just(ids), proptest::collection::vec(any::<bool>(), len)).prop_map(|(ids, sides)| {
            let mut a = Vec::new();
            let mut b = Vec::new();
            for (id, left) in ids.into_iter().zip(sides) {
                let id = AnnotationId::new(id).unwrap();
                if left { a.push(id) } else { b.push(id) }
            }
            (a, b)
        })
    })
}

fn arb_tab() -> impl Strategy<Value = Tab> {
    prop_oneof![Just(Tab::Annotations), Just(Tab::Notes), Just(Tab::Orphans)]
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Newest),
        Just(SortKey::Oldest),
        Just(SortKey::Location)
    ]
}

fn selected_set(state: &SelectionState) -> HashSet<AnnotationId> {
    match &state.selected_annotations {
        Some(set) => {
            assert!(!set.is_empty(), "empty selection must be stored as None");
            set.iter().cloned().collect()
        }
        None => HashSet::new(),
    }
}

proptest! {
    #[test]
    fn toggle_after_select_is_union_then_difference((a, b) in arb_disjoint()) {
        let mut state = SelectionState::default();
        state.select_annotations(a.clone());
        state.toggle_selected_annotations(b.clone());

        let union: HashSet<_> = a.iter().chain(b.iter()).cloned().collect();
        prop_assert_eq!(selected_set(&state), union);

        state.toggle_selected_annotations(a);
        let only_b: HashSet<_> = b.iter().cloned().collect();
        prop_assert_eq!(selected_set(&state), only_b);
        prop_assert_eq!(state.selected_annotations.is_none(), b.is_empty());
    }

    #[test]
    fn toggling_everything_off_yields_none((a, _b) in arb_disjoint()) {
        let mut state = SelectionState::default();
        state.select_annotations(a.clone());
        state.toggle_selected_annotations(a);
        prop_assert!(state.selected_annotations.is_none());
    }

    #[test]
    fn tab_switch_keeps_sort_key_available(
        start in arb_sort_key(),
        tabs in proptest::collection::vec(arb_tab(), 1..8),
    ) {
        let mut state = SelectionState::default();
        state.set_sort_key(start);
        for tab in tabs {
            state.select_tab(tab);
            prop_assert_eq!(state.selected_tab, tab);
            prop_assert_eq!(&state.sort_keys_available, &tab.sort_keys_available().to_vec());
            prop_assert!(state.sort_keys_available.contains(&state.sort_key));
        }
    }

    #[test]
    fn selecting_same_tab_twice_is_idempotent(start in arb_sort_key(), tab in arb_tab()) {
        let mut state = SelectionState::default();
        state.set_sort_key(start);
        state.select_tab(tab);
        let after_first = state.sort_key;
        state.select_tab(tab);
        prop_assert_eq!(state.sort_key, after_first);
    }
}
