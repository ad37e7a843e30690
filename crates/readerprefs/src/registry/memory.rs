use super::{PreferenceNode, PreferenceRegistry};
use crate::error::{PrefsError, Result};
use crate::model::{ChoiceOptions, PreferenceKind, PrefValue};

/// A preference node held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    key: String,
    kind: PreferenceKind,
    summary: String,
    value: Option<PrefValue>,
    enabled: bool,
    handler_installs: usize,
}

impl Preference {
    pub fn new(key: impl Into<String>, kind: PreferenceKind, summary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            summary: summary.into(),
            value: None,
            enabled: true,
            handler_installs: 0,
        }
    }

    pub fn text(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::new(key, PreferenceKind::Text, summary)
    }

    pub fn slider(key: impl Into<String>, summary: impl Into<String>, min: i32, max: i32) -> Self {
        Self::new(key, PreferenceKind::Slider { min, max }, summary)
    }

    pub fn choice(
        key: impl Into<String>,
        summary: impl Into<String>,
        options: &[(&str, &str)],
    ) -> Self {
        Self::new(
            key,
            PreferenceKind::Choice(ChoiceOptions::new(options.iter().copied())),
            summary,
        )
    }

    pub fn toggle(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Self::new(key, PreferenceKind::Toggle, summary)
    }

    pub fn with_value(mut self, value: impl Into<PrefValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// How many times a change handler was installed on this node.
    pub fn handler_installs(&self) -> usize {
        self.handler_installs
    }
}

impl PreferenceNode for Preference {
    fn key(&self) -> &str {
        &self.key
    }

    fn kind(&self) -> &PreferenceKind {
        &self.kind
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn set_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    fn value(&self) -> Option<&PrefValue> {
        self.value.as_ref()
    }

    fn set_value(&mut self, value: PrefValue) {
        self.value = Some(value);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn install_change_handler(&mut self) {
        self.handler_installs += 1;
    }
}

/// Ordered in-memory preference tree.
///
/// Keeps screen order, which is what the CLI prints. Lookups are linear; a
/// settings screen holds a few dozen nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRegistry {
    nodes: Vec<Preference>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Keys must be unique.
    pub fn insert(&mut self, preference: Preference) -> Result<()> {
        if self.contains(&preference.key) {
            return Err(PrefsError::DuplicateKey(preference.key));
        }
        self.nodes.push(preference);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, preference: Preference) -> Result<Self> {
        self.insert(preference)?;
        Ok(self)
    }

    /// Drop a node, as when a feature is not available on this build.
    pub fn remove(&mut self, key: &str) -> Option<Preference> {
        let pos = self.nodes.iter().position(|p| p.key == key)?;
        Some(self.nodes.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preference> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl PreferenceRegistry for InMemoryRegistry {
    type Node = Preference;

    fn find(&self, key: &str) -> Option<&Preference> {
        self.nodes.iter().find(|p| p.key == key)
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Preference> {
        self.nodes.iter_mut().find(|p| p.key == key)
    }

    fn keys(&self) -> Vec<String> {
        self.nodes.iter().map(|p| p.key.clone()).collect()
    }
}
