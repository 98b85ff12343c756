//! Display ordering for each [`SortKey`].
//!
//! Sorting is stable: records that compare equal keep insertion order.

use std::cmp::Ordering;

use sidebar_model::{Annotation, SortKey};

/// Compare two annotations under `key`.
///
/// Records without an `updated` timestamp (unsaved drafts) sort after dated
/// ones for both time orders, and records without a document location sort
/// after located ones.
pub fn compare(a: &Annotation, b: &Annotation, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => missing_last(a.updated, b.updated, |x, y| y.cmp(x)),
        SortKey::Oldest => missing_last(a.updated, b.updated, |x, y| x.cmp(y)),
        SortKey::Location => missing_last(a.location(), b.location(), |x, y| x.cmp(y)),
    }
}

pub fn sort_annotations<'a>(
    annotations: impl IntoIterator<Item = &'a Annotation>,
    key: SortKey,
) -> Vec<&'a Annotation> {
    let mut sorted: Vec<&Annotation> = annotations.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
