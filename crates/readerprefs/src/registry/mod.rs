//! # Preference Registry
//!
//! The registry is owned by the host platform: it builds the preference tree
//! from resources, persists values and draws the screen. The decorator only
//! ever talks to it through the two traits in this module, so the same engine
//! runs against the platform tree in production and against
//! [`memory::InMemoryRegistry`] in tests and in the preview CLI.
//!
//! ## Change Flow
//!
//! ```text
//! user picks a value
//!        │
//!        ▼
//! host ──► PreferencesDecorator::change(registry, key, value)
//!                 │  runs the key's composite reaction
//!                 ▼
//!          accepted? ──yes──► node.set_value(value)
//!                 │
//!                 no ──► node keeps its old value
//! ```
//!
//! A node learns that its changes are routed through the decorator via
//! [`PreferenceNode::install_change_handler`], called once per key when the
//! first reaction is attached.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryRegistry`]: ordered in-memory tree, loadable from a TOML
//!   screen definition (see [`screen`]).

use crate::model::{PreferenceKind, PrefValue};

pub mod memory;
pub mod screen;

/// One addressable preference item.
pub trait PreferenceNode {
    fn key(&self) -> &str;

    fn kind(&self) -> &PreferenceKind;

    /// Text shown under the title. Before decoration this is the static label.
    fn summary(&self) -> &str;

    fn set_summary(&mut self, summary: String);

    /// Current value, `None` when never set.
    fn value(&self) -> Option<&PrefValue>;

    /// Store a value without notifying anyone.
    fn set_value(&mut self, value: PrefValue);

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Route this node's future changes through the decorator.
    fn install_change_handler(&mut self);
}

/// Lookup of preference nodes by key.
pub trait PreferenceRegistry {
    type Node: PreferenceNode;

    fn find(&self, key: &str) -> Option<&Self::Node>;

    fn find_mut(&mut self, key: &str) -> Option<&mut Self::Node>;

    /// All keys, in screen order.
    fn keys(&self) -> Vec<String>;

    fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }
}
