//! Sidebar tabs and the sort orders each tab offers.
//!
//! [`Tab::sort_keys_available`] and [`Tab::default_sort_key`] are the only
//! place sort options are derived from a tab.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// The fixed set of sidebar tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Anchored annotations.
    #[default]
    Annotations,
    /// Page notes.
    Notes,
    /// Annotations that failed to anchor.
    Orphans,
}

impl Tab {
    pub const fn all() -> &'static [Tab] {
        &[Self::Annotations, Self::Notes, Self::Orphans]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annotations => "annotations",
            Self::Notes => "notes",
            Self::Orphans => "orphans",
        }
    }

    /// Sort keys offered in this tab, in menu order.
    pub const fn sort_keys_available(&self) -> &'static [SortKey] {
        match self {
            Self::Annotations | Self::Orphans => {
                &[SortKey::Newest, SortKey::Oldest, SortKey::Location]
            }
            // Page notes have no document location.
            Self::Notes => &[SortKey::Newest, SortKey::Oldest],
        }
    }

    pub const fn default_sort_key(&self) -> SortKey {
        match self {
            Self::Annotations | Self::Orphans => SortKey::Location,
            Self::Notes => SortKey::Oldest,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ModelError;

    /// Exact tab names only; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annotations" => Ok(Self::Annotations),
            "notes" => Ok(Self::Notes),
            "orphans" => Ok(Self::Orphans),
            _ => Err(ModelError::UnknownTab(s.to_string())),
        }
    }
}

/// Display orderings for annotation threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Most recently updated first.
    Newest,
    /// Least recently updated first.
    Oldest,
    /// Document order.
    #[default]
    Location,
}

impl SortKey {
    pub const fn all() -> &'static [SortKey] {
        &[Self::Newest, Self::Oldest, Self::Location]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Location => "Location",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Newest" => Ok(Self::Newest),
            "Oldest" => Ok(Self::Oldest),
            "Location" => Ok(Self::Location),
            _ => Err(ModelError::UnknownSortKey(s.to_string())),
        }
    }
}
