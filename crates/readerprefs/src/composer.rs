//! # Listener Composer
//!
//! The platform lets a preference node carry exactly one change handler. The
//! composer turns that into many: the first reaction attached to a key
//! installs a [`CompositeReaction`] as the node's handler, and every later
//! reaction for the same key joins that composite instead of replacing it.
//!
//! ## Execution
//!
//! Reactions run in attach order. The first one to return
//! [`Verdict::Reject`] stops the run and the change is dropped; the remaining
//! reactions never see it. A run where everybody accepts commits the value.

use crate::decorator::PreferencesDecorator;
use crate::model::{PrefValue, SettingKey};
use crate::reactions::Reaction;
use crate::registry::{PreferenceNode, PreferenceRegistry};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Whether a proposed value may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Ordered reactions sharing one source key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeReaction {
    reactions: Vec<Reaction>,
}

impl CompositeReaction {
    /// Append `reaction` unless an equal one is already registered.
    /// Returns true when the reaction was added.
    pub fn add(&mut self, reaction: Reaction) -> bool {
        if self.reactions.contains(&reaction) {
            return false;
        }
        self.reactions.push(reaction);
        true
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Run every reaction against `value`, stopping at the first rejection.
    pub fn run<R: PreferenceRegistry>(
        &self,
        decorator: &PreferencesDecorator,
        registry: &mut R,
        key: &str,
        value: &PrefValue,
    ) -> Verdict {
        for reaction in &self.reactions {
            if !reaction.apply(decorator, registry, key, value).is_accept() {
                debug!(key, reaction = reaction.name(), value = %value, "change rejected");
                return Verdict::Reject;
            }
        }
        Verdict::Accept
    }
}

/// One composite per key, created on first attach.
#[derive(Debug, Default)]
pub struct ListenerComposer {
    composites: HashMap<SettingKey, CompositeReaction>,
}

impl ListenerComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `reaction` for changes of `key`.
    ///
    /// Returns false when the key has no node (nothing happens at all) or the
    /// composite already holds an equal reaction.
    pub fn attach<R: PreferenceRegistry>(
        &mut self,
        registry: &mut R,
        key: &str,
        reaction: Reaction,
    ) -> bool {
        let Some(node) = registry.find_mut(key) else {
            debug!(key, reaction = reaction.name(), "no such preference, not attaching");
            return false;
        };

        let composite = match self.composites.entry(key.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                node.install_change_handler();
                entry.insert(CompositeReaction::default())
            }
        };

        let name = reaction.name();
        let added = composite.add(reaction);
        if added {
            debug!(key, reaction = name, position = composite.len(), "attached reaction");
        }
        added
    }

    pub fn composite(&self, key: &str) -> Option<&CompositeReaction> {
        self.composites.get(key)
    }

    /// Keys with a composite, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.composites.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.composites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactions::{BoundsReaction, SummaryReaction, ViewModeReaction};
    use crate::registry::memory::{InMemoryRegistry, Preference};

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new()
            .with(Preference::slider("pagesinmemory", "Pages in memory", 1, 10).with_value(3))
            .unwrap()
    }

    #[test]
    fn first_attach_installs_handler_once() {
        let mut reg = registry();
        let mut composer = ListenerComposer::new();

        assert!(composer.attach(&mut reg, "pagesinmemory", SummaryReaction.into()));
        assert!(composer.attach(&mut reg, "pagesinmemory", BoundsReaction::new(1, 10).into()));

        assert_eq!(reg.find("pagesinmemory").unwrap().handler_installs(), 1);
        assert_eq!(composer.composite("pagesinmemory").unwrap().len(), 2);
    }

    #[test]
    fn attach_keeps_order() {
        let mut reg = registry();
        let mut composer = ListenerComposer::new();
        composer.attach(&mut reg, "pagesinmemory", BoundsReaction::new(1, 10).into());
        composer.attach(&mut reg, "pagesinmemory", SummaryReaction.into());

        let names: Vec<_> = composer
            .composite("pagesinmemory")
            .unwrap()
            .reactions()
            .iter()
            .map(Reaction::name)
            .collect();
        assert_eq!(names, vec!["bounds", "summary"]);
    }

    #[test]
    fn attach_skips_equal_reaction() {
        let mut reg = registry();
        let mut composer = ListenerComposer::new();
        assert!(composer.attach(&mut reg, "pagesinmemory", SummaryReaction.into()));
        assert!(!composer.attach(&mut reg, "pagesinmemory", SummaryReaction.into()));
        assert_eq!(composer.composite("pagesinmemory").unwrap().len(), 1);
    }

    #[test]
    fn attach_to_missing_key_is_noop() {
        let mut reg = registry();
        let mut composer = ListenerComposer::new();
        assert!(!composer.attach(
            &mut reg,
            "viewmode",
            ViewModeReaction::new(["align"]).into()
        ));
        assert!(composer.is_empty());
        assert!(composer.composite("viewmode").is_none());
    }

    #[test]
    fn run_stops_at_first_rejection() {
        let mut reg = registry();
        let mut composer = ListenerComposer::new();
        composer.attach(&mut reg, "pagesinmemory", BoundsReaction::new(1, 10).into());
        composer.attach(&mut reg, "pagesinmemory", SummaryReaction.into());
        let decorator = PreferencesDecorator::new();
        let composite = composer.composite("pagesinmemory").unwrap();

        let verdict = composite.run(&decorator, &mut reg, "pagesinmemory", &PrefValue::Int(11));
        assert!(!verdict.is_accept());
        // summary reaction never ran
        assert_eq!(reg.find("pagesinmemory").unwrap().summary(), "Pages in memory");
        assert!(composite
            .run(&decorator, &mut reg, "pagesinmemory", &PrefValue::Int(4))
            .is_accept());
    }

    #[test]
    fn keys_are_sorted() {
        let mut reg = InMemoryRegistry::new()
            .with(Preference::text("b", "B"))
            .unwrap()
            .with(Preference::text("a", "A"))
            .unwrap();
        let mut composer = ListenerComposer::new();
        composer.attach(&mut reg, "b", SummaryReaction.into());
        composer.attach(&mut reg, "a", SummaryReaction.into());
        assert_eq!(composer.keys(), vec!["a", "b"]);
    }
}
