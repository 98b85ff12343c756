//! Client-state store for the annotation sidebar.
//!
//! The store holds the loaded annotations and everything the sidebar UI
//! derives its view from: selection, focus, thread expansion, the active tab
//! and sort key, focus mode, direct-linked ids and viewer flags.
//!
//! All mutation goes through [`Store::dispatch`] (or the named convenience
//! methods on [`Store`]); reads go through the selector methods on the state
//! structs reachable from [`Store::state`].

pub mod action;
pub mod config;
pub mod handler;
pub mod sorting;
pub mod state;
pub mod store;

pub use action::{Action, AnnotationsAction, DirectLinkedAction, SelectionAction, ViewerAction};
pub use config::{ConfigError, FocusConfig, StoreConfig};
pub use handler::{ANCHORING_TIMEOUT, ActionHandler, Effect};
pub use state::{
    AnnotationsState, DirectLinkedState, FocusModeState, SelectionState, SidebarState,
    ViewerState,
};
pub use store::{Store, SubscriptionId};
