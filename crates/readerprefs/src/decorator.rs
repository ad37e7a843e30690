//! # Decoration Orchestrator
//!
//! A [`PreferencesDecorator`] is built fresh for every settings screen. It
//! walks the setting groups the screen shows and, for each one:
//!
//! 1. decorates every text, slider and choice node with a live summary;
//! 2. for groups carrying a view mode triple, wires the view mode to the two
//!    single-page-only settings and the animation type to the alignment;
//! 3. evaluates the current view mode once so the dependents start out with
//!    the right enabled state.
//!
//! Missing nodes are skipped. A reader with no book open simply has no
//! `book_*` nodes, and decorating the book group does nothing.
//!
//! ## Changes
//!
//! Every change the host sees goes through [`PreferencesDecorator::change`]:
//!
//! ```text
//! change(viewmode = single_page)
//!   └─ composite(viewmode)
//!        ├─ summary      "View mode: Single page"
//!        └─ view-mode    enable align, animationType
//!   └─ commit
//!
//! change(animationType = curler)
//!   └─ composite(animationType)
//!        ├─ summary         "Page animation: Curler"
//!        └─ animation-type  change(align = auto)
//!                             └─ composite(align)
//!                                  └─ summary  "Page align: Auto"
//!                             └─ commit
//!   └─ commit
//! ```
//!
//! The chain is at most two levels deep; nothing reacts to alignment changes
//! except the alignment's own summary.
//!
//! Decorating is idempotent: labels are captured once and equal reactions are
//! not attached twice, so calling any entry point again changes nothing but
//! the rendered summaries.

use crate::composer::{CompositeReaction, ListenerComposer};
use crate::keys::{SettingsGroup, ViewModeTriple};
use crate::model::{PreferenceKind, PrefValue};
use crate::reactions::{
    AnimationTypeReaction, BoundsReaction, Reaction, SummaryReaction, ViewModeReaction,
};
use crate::registry::{PreferenceNode, PreferenceRegistry};
use crate::summary::SummaryBook;
use crate::types::{DocumentViewMode, PageAlign, PageAnimationType, ResValue};
use tracing::debug;

/// What happened to a proposed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Every reaction accepted and the value was stored.
    Committed,
    /// A reaction rejected the value; the node keeps its old one.
    Rejected,
    /// No node with that key.
    Missing,
}

impl ChangeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeOutcome::Committed => "committed",
            ChangeOutcome::Rejected => "rejected",
            ChangeOutcome::Missing => "missing",
        }
    }
}

#[derive(Debug, Default)]
pub struct PreferencesDecorator {
    summaries: SummaryBook,
    listeners: ListenerComposer,
}

impl PreferencesDecorator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decorate_all<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_groups(registry, &SettingsGroup::ALL);
    }

    pub fn decorate_groups<R: PreferenceRegistry>(
        &mut self,
        registry: &mut R,
        groups: &[SettingsGroup],
    ) {
        for group in groups {
            self.decorate_group(registry, *group);
        }
    }

    pub fn decorate_group<R: PreferenceRegistry>(&mut self, registry: &mut R, group: SettingsGroup) {
        debug!(group = group.name(), "decorating group");
        self.decorate_preferences(registry, group.keys());
        if let Some(triple) = group.view_mode_triple() {
            self.bind_view_mode_triple(registry, triple);
        }
    }

    pub fn decorate_book_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Book);
    }

    pub fn decorate_browser_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Browser);
    }

    pub fn decorate_opds_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Opds);
    }

    pub fn decorate_memory_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Memory);
    }

    pub fn decorate_render_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Render);
    }

    pub fn decorate_scroll_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Scroll);
    }

    pub fn decorate_ui_settings<R: PreferenceRegistry>(&mut self, registry: &mut R) {
        self.decorate_group(registry, SettingsGroup::Ui);
    }

    /// Wire a view mode to its dependents and set their initial state.
    pub fn bind_view_mode_triple<R: PreferenceRegistry>(
        &mut self,
        registry: &mut R,
        triple: ViewModeTriple,
    ) {
        self.add_view_mode_reaction(registry, triple.view_mode, &triple.dependents());
        self.add_animation_type_reaction(registry, triple.animation_type, triple.page_align);

        let Some(node) = registry.find(triple.view_mode) else {
            debug!(key = triple.view_mode, "no view mode node, dependents left as they are");
            return;
        };
        let mode = node
            .value()
            .and_then(|v| DocumentViewMode::from_res_value(&v.to_string()));
        self.enable_single_page_settings(registry, mode, &triple.dependents());
    }

    pub fn decorate_preferences<R: PreferenceRegistry>(&mut self, registry: &mut R, keys: &[&str]) {
        for key in keys {
            self.decorate_preference(registry, key);
        }
    }

    /// Give one node a live summary. Returns false for absent and toggle nodes.
    pub fn decorate_preference<R: PreferenceRegistry>(&mut self, registry: &mut R, key: &str) -> bool {
        let Some(node) = registry.find_mut(key) else {
            debug!(key, "no such preference, skipping");
            return false;
        };
        if !node.kind().is_decorated() {
            debug!(key, kind = node.kind().name(), "not decorating");
            return false;
        }

        self.summaries.capture(&*node);
        self.summaries.refresh(node);
        self.listeners.attach(registry, key, SummaryReaction.into());
        true
    }

    /// Attach any reaction to `key`. See [`ListenerComposer::attach`].
    pub fn attach<R: PreferenceRegistry>(
        &mut self,
        registry: &mut R,
        key: &str,
        reaction: impl Into<Reaction>,
    ) -> bool {
        self.listeners.attach(registry, key, reaction.into())
    }

    pub fn add_view_mode_reaction<R: PreferenceRegistry>(
        &mut self,
        registry: &mut R,
        source: &str,
        targets: &[&str],
    ) -> bool {
        self.attach(registry, source, ViewModeReaction::new(targets.iter().copied()))
    }

    pub fn add_animation_type_reaction<R: PreferenceRegistry>(
        &mut self,
        registry: &mut R,
        source: &str,
        target: &str,
    ) -> bool {
        self.attach(registry, source, AnimationTypeReaction::new(target))
    }

    /// Reject values outside a slider's range. Returns false when the node is
    /// absent or not a slider.
    pub fn guard_slider_range<R: PreferenceRegistry>(&mut self, registry: &mut R, key: &str) -> bool {
        let bounds = match registry.find(key).map(|n| n.kind()) {
            Some(PreferenceKind::Slider { min, max }) => BoundsReaction::new(*min, *max),
            _ => return false,
        };
        self.attach(registry, key, bounds)
    }

    /// Enable `keys` only when `mode` is single page.
    pub fn enable_single_page_settings<R, S>(
        &self,
        registry: &mut R,
        mode: Option<DocumentViewMode>,
        keys: &[S],
    ) where
        R: PreferenceRegistry,
        S: AsRef<str>,
    {
        let enabled = mode == Some(DocumentViewMode::SinglePage);
        for key in keys {
            let key = key.as_ref();
            match registry.find_mut(key) {
                Some(node) => {
                    debug!(key, enabled, "single page dependent");
                    node.set_enabled(enabled);
                }
                None => debug!(key, "no such preference, skipping"),
            }
        }
    }

    /// Force automatic alignment on `key` when `animation` turns pages with
    /// an animation.
    pub fn set_page_align<R: PreferenceRegistry>(
        &self,
        registry: &mut R,
        animation: Option<PageAnimationType>,
        key: &str,
    ) {
        if !animation.is_some_and(|a| a.is_animated()) {
            return;
        }
        debug!(key, "animated page turns, forcing automatic alignment");
        if self.change(registry, key, PageAlign::Auto.res_value()) == ChangeOutcome::Missing {
            return;
        }
        if let Some(node) = registry.find_mut(key) {
            self.summaries.refresh(node);
        }
    }

    /// Propose `value` for `key`: run the key's reactions and store the
    /// value unless one of them rejects it.
    pub fn change<R: PreferenceRegistry>(
        &self,
        registry: &mut R,
        key: &str,
        value: impl Into<PrefValue>,
    ) -> ChangeOutcome {
        let value = value.into();
        if !registry.contains(key) {
            debug!(key, "no such preference, change dropped");
            return ChangeOutcome::Missing;
        }

        if let Some(composite) = self.listeners.composite(key) {
            if !composite.run(self, registry, key, &value).is_accept() {
                self.restore_summary(registry, key);
                return ChangeOutcome::Rejected;
            }
        }

        if let Some(node) = registry.find_mut(key) {
            debug!(key, value = %value, "committing");
            node.set_value(value);
        }
        ChangeOutcome::Committed
    }

    /// Put a decorated node's summary back on its stored value after a
    /// rejected change was already rendered by an earlier reaction.
    fn restore_summary<R: PreferenceRegistry>(&self, registry: &mut R, key: &str) {
        if self.summaries.record(key).is_none() {
            return;
        }
        if let Some(node) = registry.find_mut(key) {
            self.summaries.refresh(node);
        }
    }

    pub fn summaries(&self) -> &SummaryBook {
        &self.summaries
    }

    pub fn composer(&self) -> &ListenerComposer {
        &self.listeners
    }

    pub fn composite(&self, key: &str) -> Option<&CompositeReaction> {
        self.listeners.composite(key)
    }

    /// Reactions attached to `key`, in run order.
    pub fn reactions(&self, key: &str) -> &[Reaction] {
        self.listeners
            .composite(key)
            .map(CompositeReaction::reactions)
            .unwrap_or(&[])
    }
}
