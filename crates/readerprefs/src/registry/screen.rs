//! TOML screen definitions for [`InMemoryRegistry`].
//!
//! ```toml
//! [[preference]]
//! key = "viewmode"
//! kind = "choice"
//! summary = "View mode"
//! value = "vertical_scroll"
//! options = [
//!   { value = "vertical_scroll", label = "Vertical scroll" },
//!   { value = "single_page", label = "Single page" },
//! ]
//!
//! [[preference]]
//! key = "pagesinmemory"
//! kind = "slider"
//! summary = "Pages in memory"
//! min = 1
//! max = 10
//! value = 3
//! ```

use super::memory::{InMemoryRegistry, Preference};
use crate::error::{PrefsError, Result};
use crate::model::{ChoiceOptions, PreferenceKind, PrefValue};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindDef {
    Text,
    Slider,
    Choice,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionDef {
    pub value: String,
    pub label: String,
}

/// One `[[preference]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreferenceDef {
    pub key: String,
    pub kind: KindDef,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub value: Option<PrefValue>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub options: Vec<OptionDef>,
    #[serde(default)]
    pub min: Option<i32>,
    #[serde(default)]
    pub max: Option<i32>,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScreenDef {
    #[serde(default, rename = "preference")]
    pub preferences: Vec<PreferenceDef>,
}

impl PreferenceDef {
    fn invalid(&self, reason: impl Into<String>) -> PrefsError {
        PrefsError::InvalidPreference {
            key: self.key.clone(),
            reason: reason.into(),
        }
    }

    fn kind(&self) -> Result<PreferenceKind> {
        match self.kind {
            KindDef::Text => Ok(PreferenceKind::Text),
            KindDef::Toggle => Ok(PreferenceKind::Toggle),
            KindDef::Slider => {
                let min = self.min.unwrap_or(0);
                let max = self.max.unwrap_or(100);
                if min > max {
                    return Err(self.invalid(format!("min {} is greater than max {}", min, max)));
                }
                Ok(PreferenceKind::Slider { min, max })
            }
            KindDef::Choice => {
                if self.options.is_empty() {
                    return Err(self.invalid("choice without options"));
                }
                Ok(PreferenceKind::Choice(ChoiceOptions::new(
                    self.options
                        .iter()
                        .map(|o| (o.value.as_str(), o.label.as_str())),
                )))
            }
        }
    }

    /// Validate and build the in-memory node.
    pub fn build(&self) -> Result<Preference> {
        if self.key.trim().is_empty() {
            return Err(self.invalid("empty key"));
        }
        let kind = self.kind()?;
        let value = match (&kind, &self.value) {
            (_, None) => None,
            (PreferenceKind::Slider { .. }, Some(v)) => match v.as_int() {
                Some(i) => Some(PrefValue::Int(i)),
                None => return Err(self.invalid(format!("slider value '{}' is not an integer", v))),
            },
            (_, Some(v)) => Some(PrefValue::text(v.to_string())),
        };

        let mut pref = Preference::new(self.key.clone(), kind, self.summary.clone());
        if let Some(value) = value {
            pref = pref.with_value(value);
        }
        if !self.enabled {
            pref = pref.disabled();
        }
        Ok(pref)
    }
}

impl ScreenDef {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn build(&self) -> Result<InMemoryRegistry> {
        let mut registry = InMemoryRegistry::new();
        for def in &self.preferences {
            registry.insert(def.build()?)?;
        }
        Ok(registry)
    }
}

impl InMemoryRegistry {
    /// Build a registry from a TOML screen definition.
    pub fn from_toml(text: &str) -> Result<Self> {
        ScreenDef::parse(text)?.build()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
