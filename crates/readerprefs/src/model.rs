//! Value and node-type model shared by the registry and the decorator.
//!
//! A preference node is one of a closed set of kinds:
//!
//! | Kind | Value | Decorated |
//! |------|-------|-----------|
//! | `Text` | free text | yes |
//! | `Slider` | integer in `[min, max]` | yes |
//! | `Choice` | one of the option values | yes |
//! | `Toggle` | `"true"` / `"false"` | no |
//!
//! Values travel as [`PrefValue`]. Summaries and enumerant parsing only ever
//! look at the value's textual form, so `Int(12)` and `Text("12")` render the
//! same.

use crate::error::{PrefsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a preference node, unique within a registry.
pub type SettingKey = String;

/// Runtime value of a preference, or a value proposed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i32),
    Text(String),
}

impl PrefValue {
    pub fn text(value: impl Into<String>) -> Self {
        PrefValue::Text(value.into())
    }

    /// Integer form of the value. Text values are parsed after trimming.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            PrefValue::Int(v) => Some(*v),
            PrefValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PrefValue::Int(_) => false,
            PrefValue::Text(s) => s.is_empty(),
        }
    }

    /// Parse raw user input into a value that fits `kind`.
    ///
    /// Only the shape is checked: choice values outside the option list and
    /// slider values outside the range are accepted here, so that the change
    /// pipeline decides what happens to them.
    pub fn parse_for(key: &str, kind: &PreferenceKind, raw: &str) -> Result<Self> {
        match kind {
            PreferenceKind::Text | PreferenceKind::Choice(_) => Ok(PrefValue::text(raw)),
            PreferenceKind::Slider { .. } => {
                raw.trim()
                    .parse()
                    .map(PrefValue::Int)
                    .map_err(|_| PrefsError::InvalidValue {
                        key: key.to_string(),
                        reason: format!("'{}' is not an integer", raw),
                    })
            }
            PreferenceKind::Toggle => match raw {
                "true" | "false" => Ok(PrefValue::text(raw)),
                _ => Err(PrefsError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("'{}' is not true or false", raw),
                }),
            },
        }
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefValue::Int(v) => write!(f, "{}", v),
            PrefValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::Text(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::Text(value)
    }
}

impl From<i32> for PrefValue {
    fn from(value: i32) -> Self {
        PrefValue::Int(value)
    }
}

/// Stored values of a choice node and their display labels, index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceOptions {
    values: Vec<String>,
    labels: Vec<String>,
}

impl ChoiceOptions {
    /// Build from `(value, label)` pairs.
    pub fn new<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        let (values, labels) = pairs
            .into_iter()
            .map(|(v, l)| (v.into(), l.into()))
            .unzip();
        Self { values, labels }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Display label for a stored value. Exact match only.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.values
            .iter()
            .position(|v| v == value)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }
}

/// The type of a preference node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceKind {
    /// Free-form text entry (directories, numbers typed as text).
    Text,
    /// Integer slider with inclusive bounds.
    Slider { min: i32, max: i32 },
    /// Single choice from a fixed list.
    Choice(ChoiceOptions),
    /// On/off switch. Never decorated.
    Toggle,
}

impl PreferenceKind {
    /// Whether the summary renderer handles this kind.
    pub fn is_decorated(&self) -> bool {
        !matches!(self, PreferenceKind::Toggle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PreferenceKind::Text => "text",
            PreferenceKind::Slider { .. } => "slider",
            PreferenceKind::Choice(_) => "choice",
            PreferenceKind::Toggle => "toggle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align_options() -> ChoiceOptions {
        ChoiceOptions::new([("width", "By width"), ("height", "By height"), ("auto", "Auto")])
    }

    #[test]
    fn display_uses_raw_text() {
        assert_eq!(PrefValue::Int(42).to_string(), "42");
        assert_eq!(PrefValue::text("/sdcard").to_string(), "/sdcard");
    }

    #[test]
    fn empty_only_for_empty_text() {
        assert!(PrefValue::text("").is_empty());
        assert!(!PrefValue::text(" ").is_empty());
        assert!(!PrefValue::Int(0).is_empty());
    }

    #[test]
    fn as_int_parses_text() {
        assert_eq!(PrefValue::text(" 17 ").as_int(), Some(17));
        assert_eq!(PrefValue::text("x").as_int(), None);
        assert_eq!(PrefValue::Int(-3).as_int(), Some(-3));
    }

    #[test]
    fn label_for_is_exact() {
        let options = align_options();
        assert_eq!(options.label_for("auto"), Some("Auto"));
        assert_eq!(options.label_for("Auto"), None);
        assert_eq!(options.label_for("aut"), None);
    }

    #[test]
    fn options_stay_index_aligned() {
        let options = align_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options.values()[1], "height");
        assert_eq!(options.labels()[1], "By height");
    }

    #[test]
    fn parse_for_slider_requires_integer() {
        let kind = PreferenceKind::Slider { min: 0, max: 10 };
        assert_eq!(
            PrefValue::parse_for("k", &kind, "7").unwrap(),
            PrefValue::Int(7)
        );
        // range is not checked here
        assert_eq!(
            PrefValue::parse_for("k", &kind, "70").unwrap(),
            PrefValue::Int(70)
        );
        match PrefValue::parse_for("k", &kind, "seven") {
            Err(PrefsError::InvalidValue { key, .. }) => assert_eq!(key, "k"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn parse_for_choice_keeps_unknown_values() {
        let kind = PreferenceKind::Choice(align_options());
        assert_eq!(
            PrefValue::parse_for("align", &kind, "left").unwrap(),
            PrefValue::text("left")
        );
    }

    #[test]
    fn parse_for_toggle() {
        assert!(PrefValue::parse_for("t", &PreferenceKind::Toggle, "true").is_ok());
        assert!(PrefValue::parse_for("t", &PreferenceKind::Toggle, "yes").is_err());
    }

    #[test]
    fn toggle_is_not_decorated() {
        assert!(!PreferenceKind::Toggle.is_decorated());
        assert!(PreferenceKind::Text.is_decorated());
        assert!(PreferenceKind::Choice(align_options()).is_decorated());
    }
}
