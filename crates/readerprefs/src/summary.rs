//! # Summary Renderer
//!
//! Every decorated node shows its live value next to its static label:
//!
//! ```text
//! Pages in memory          (no value)
//! Pages in memory: 3       (slider / text)
//! View mode: Single page   (choice: display label of the stored value)
//! ```
//!
//! The label is captured from the node's summary the first time the key is
//! seen and never again, so that decorating a screen twice does not turn
//! `"View mode: Single page"` into the label of the next render.

use crate::model::{PreferenceKind, PrefValue, SettingKey};
use crate::registry::PreferenceNode;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::trace;

pub const SEPARATOR: &str = ": ";

/// Captured label and last rendered summary for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    label: String,
    rendered: String,
}

impl SummaryRecord {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            rendered: label.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

/// Text shown for `value` on a node of `kind`, if any.
pub fn display_value(kind: &PreferenceKind, value: Option<&PrefValue>) -> Option<String> {
    let value = value?;
    match kind {
        PreferenceKind::Choice(options) => options.label_for(&value.to_string()).map(str::to_string),
        _ => Some(value.to_string()),
    }
}

/// `label`, or `label: display` when there is something to display.
pub fn compose(label: &str, display: Option<&str>) -> String {
    match display {
        Some(d) if !d.is_empty() => format!("{}{}{}", label, SEPARATOR, d),
        _ => label.to_string(),
    }
}

/// Per-screen store of summary records.
///
/// Rendering happens while the decorator walks a composite reaction, which it
/// only holds by shared reference, hence the `RefCell`. Borrows never outlive
/// a single method call.
#[derive(Debug, Default)]
pub struct SummaryBook {
    records: RefCell<HashMap<SettingKey, SummaryRecord>>,
}

impl SummaryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the node's label unless the key already has one.
    /// Returns true when a new record was created.
    pub fn capture<N: PreferenceNode>(&self, node: &N) -> bool {
        let mut records = self.records.borrow_mut();
        if records.contains_key(node.key()) {
            return false;
        }
        trace!(key = node.key(), label = node.summary(), "captured summary label");
        records.insert(node.key().to_string(), SummaryRecord::new(node.summary()));
        true
    }

    /// Render `value` onto the node's summary and return the new text.
    ///
    /// A node that was never captured gets captured now, from whatever its
    /// summary says at this moment.
    pub fn render<N: PreferenceNode>(&self, node: &mut N, value: Option<&PrefValue>) -> String {
        let display = display_value(node.kind(), value);

        let summary = {
            let mut records = self.records.borrow_mut();
            let record = records
                .entry(node.key().to_string())
                .or_insert_with(|| SummaryRecord::new(node.summary()));
            record.rendered = compose(&record.label, display.as_deref());
            record.rendered.clone()
        };

        trace!(key = node.key(), summary = %summary, "rendered summary");
        node.set_summary(summary.clone());
        summary
    }

    /// Render the node's current value.
    pub fn refresh<N: PreferenceNode>(&self, node: &mut N) -> String {
        let value = node.value().cloned();
        self.render(node, value.as_ref())
    }

    pub fn record(&self, key: &str) -> Option<SummaryRecord> {
        self.records.borrow().get(key).cloned()
    }

    pub fn label(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).map(|r| r.label.clone())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::memory::Preference;

    fn align() -> Preference {
        Preference::choice(
            "align",
            "Page align",
            &[("width", "By width"), ("height", "By height"), ("auto", "Auto")],
        )
        .with_value("width")
    }

    #[test]
    fn compose_appends_non_empty_display() {
        assert_eq!(compose("Contrast", Some("50")), "Contrast: 50");
        assert_eq!(compose("Contrast", Some("")), "Contrast");
        assert_eq!(compose("Contrast", None), "Contrast");
    }

    #[test]
    fn display_value_for_choice_uses_label() {
        let node = align();
        assert_eq!(
            display_value(node.kind(), Some(&PrefValue::text("auto"))),
            Some("Auto".to_string())
        );
        assert_eq!(display_value(node.kind(), Some(&PrefValue::text("left"))), None);
        assert_eq!(display_value(node.kind(), None), None);
    }

    #[test]
    fn display_value_for_slider_uses_number() {
        let kind = PreferenceKind::Slider { min: 0, max: 100 };
        assert_eq!(display_value(&kind, Some(&PrefValue::Int(0))), Some("0".into()));
    }

    #[test]
    fn render_text_value() {
        let book = SummaryBook::new();
        let mut node = Preference::text("dir", "Download directory");
        assert_eq!(
            book.render(&mut node, Some(&PrefValue::text("/sdcard/Books"))),
            "Download directory: /sdcard/Books"
        );
        assert_eq!(node.summary(), "Download directory: /sdcard/Books");
        assert_eq!(book.render(&mut node, Some(&PrefValue::text(""))), "Download directory");
    }

    #[test]
    fn render_unknown_choice_value_is_bare_label() {
        let book = SummaryBook::new();
        let mut node = align();
        book.refresh(&mut node);
        assert_eq!(node.summary(), "Page align: By width");
        book.render(&mut node, Some(&PrefValue::text("left")));
        assert_eq!(node.summary(), "Page align");
    }

    #[test]
    fn label_is_captured_once() {
        let book = SummaryBook::new();
        let mut node = align();
        assert!(book.capture(&node));
        book.refresh(&mut node);
        // the node's summary now carries the value, capture must ignore it
        assert!(!book.capture(&node));
        assert_eq!(book.label("align").as_deref(), Some("Page align"));
        book.refresh(&mut node);
        assert_eq!(node.summary(), "Page align: By width");
    }

    #[test]
    fn record_tracks_last_render() {
        let book = SummaryBook::new();
        let mut node = align();
        book.render(&mut node, Some(&PrefValue::text("auto")));
        let record = book.record("align").unwrap();
        assert_eq!(record.label(), "Page align");
        assert_eq!(record.rendered(), "Page align: Auto");
        assert!(book.record("missing").is_none());
    }
}
