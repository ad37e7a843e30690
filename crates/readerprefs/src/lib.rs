//! # Readerprefs Architecture
//!
//! Readerprefs is the **settings-screen core** of an e-book reader. The host
//! platform owns the preference tree, persistence and drawing; this crate
//! keeps the tree honest while the user edits it:
//!
//! - every text, slider and choice preference shows its live value in its
//!   summary (`"Page align: By width"`);
//! - settings that only make sense in single page mode are disabled in the
//!   scrolling modes;
//! - picking an animated page turn forces automatic page alignment.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Decoration Orchestrator (decorator.rs)                     │
//! │  - Walks setting groups, entry point for value changes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Reactions (reactions.rs) + Summary Renderer (summary.rs)   │
//! │  - What happens when one preference changes                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Listener Composer (composer.rs)                            │
//! │  - Many reactions behind the single handler a node allows   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Preference Registry (registry/)                            │
//! │  - PreferenceRegistry / PreferenceNode traits               │
//! │  - InMemoryRegistry (tests, preview CLI), TOML screens      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Never Fail The Screen
//!
//! Decoration and change handling never return errors. A missing node is
//! skipped, an unknown stored value renders as the bare label and disables
//! single-page dependents. Only the edges that read files or user input
//! ([`registry::screen`], [`config`], [`model::PrefValue::parse_for`]) return
//! [`error::Result`].
//!
//! ## Usage
//!
//! ```
//! use readerprefs::{catalog, PreferencesDecorator, ChangeOutcome};
//! use readerprefs::registry::{PreferenceNode, PreferenceRegistry};
//!
//! let mut screen = catalog::default_screen().unwrap();
//! let mut decorator = PreferencesDecorator::new();
//! decorator.decorate_all(&mut screen);
//!
//! assert!(!screen.find("align").unwrap().is_enabled());
//! assert_eq!(
//!     decorator.change(&mut screen, "viewmode", "single_page"),
//!     ChangeOutcome::Committed
//! );
//! assert!(screen.find("align").unwrap().is_enabled());
//! ```
//!
//! ## Module Overview
//!
//! - [`decorator`]: group decoration and the change entry point
//! - [`composer`]: composite reactions, one per key
//! - [`reactions`]: summary, view mode, animation type and bounds reactions
//! - [`summary`]: label capture and summary rendering
//! - [`registry`]: registry traits and the in-memory implementation
//! - [`keys`]: preference keys and setting groups
//! - [`types`]: view mode, alignment and animation enumerants
//! - [`model`]: values and node kinds
//! - [`catalog`]: the built-in screen
//! - [`config`]: configuration
//! - [`error`]: error types

pub mod catalog;
pub mod composer;
pub mod config;
pub mod decorator;
pub mod error;
pub mod keys;
pub mod model;
pub mod reactions;
pub mod registry;
pub mod summary;
pub mod types;

pub use composer::{CompositeReaction, ListenerComposer, Verdict};
pub use config::PrefsConfig;
pub use decorator::{ChangeOutcome, PreferencesDecorator};
pub use error::{PrefsError, Result};
pub use keys::SettingsGroup;
pub use model::{PrefValue, PreferenceKind, SettingKey};
pub use reactions::Reaction;
pub use registry::memory::{InMemoryRegistry, Preference};
pub use registry::{PreferenceNode, PreferenceRegistry};
