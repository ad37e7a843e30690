//! Built-in settings screen.
//!
//! Holds every key of every group, with English labels and defaults, plus two
//! toggles. Hosts with their own resources load a screen file instead.

use crate::error::Result;
use crate::keys::SettingsGroup;
use crate::registry::memory::InMemoryRegistry;

pub const DEFAULT_SCREEN: &str = include_str!("../screens/default.toml");

/// The built-in screen with a book open.
pub fn default_screen() -> Result<InMemoryRegistry> {
    InMemoryRegistry::from_toml(DEFAULT_SCREEN)
}

/// The built-in screen as the application settings show it: no book is open,
/// so the book group's nodes are absent.
pub fn app_screen() -> Result<InMemoryRegistry> {
    let mut registry = default_screen()?;
    for key in SettingsGroup::Book.keys() {
        registry.remove(key);
    }
    Ok(registry)
}
