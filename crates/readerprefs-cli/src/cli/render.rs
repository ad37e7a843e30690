//! Output formatting.
//!
//! Text output groups the screen by setting group, in the order the groups
//! were decorated, and puts every node no group owns (toggles, host-specific
//! extras) under a trailing "Other" section:
//!
//! ```text
//! Rendering
//!   View mode: Vertical scroll    viewmode
//!   Page align: By width          align          disabled
//! ```
//!
//! JSON output carries the same data with raw values.

use super::styles::{names, paint};
use readerprefs::{
    ChangeOutcome, InMemoryRegistry, PrefValue, Preference, PreferenceNode, PreferenceRegistry,
    PreferencesDecorator, SettingsGroup,
};
use serde_json::{json, Value};
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";
const GAP: usize = 4;

/// One replayed `KEY=VALUE` change.
#[derive(Debug, Clone)]
pub struct ChangeReport {
    pub key: String,
    pub value: PrefValue,
    pub outcome: ChangeOutcome,
}

/// Pad `text` with spaces to `width` terminal columns.
pub fn pad_to(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

/// Nodes of `screen` split into the given groups plus a trailing remainder.
fn sections<'a>(
    screen: &'a InMemoryRegistry,
    groups: &[SettingsGroup],
) -> Vec<(&'static str, Option<SettingsGroup>, Vec<&'a Preference>)> {
    let mut sections = Vec::new();
    for group in groups {
        let prefs: Vec<&Preference> = screen
            .iter()
            .filter(|p| group.keys().contains(&p.key()))
            .collect();
        if !prefs.is_empty() {
            sections.push((group.title(), Some(*group), prefs));
        }
    }
    let rest: Vec<&Preference> = screen
        .iter()
        .filter(|p| !groups.iter().any(|g| g.keys().contains(&p.key())))
        .collect();
    if !rest.is_empty() {
        sections.push(("Other", None, rest));
    }
    sections
}

pub fn render_screen(screen: &InMemoryRegistry, groups: &[SettingsGroup]) -> String {
    let sections = sections(screen, groups);
    let summary_width = screen.iter().map(|p| p.summary().width()).max().unwrap_or(0) + GAP;
    let key_width = screen.iter().map(|p| p.key().width()).max().unwrap_or(0) + GAP;

    let mut out = String::new();
    for (i, (title, _, prefs)) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&paint(names::HEADER, title));
        out.push('\n');
        for pref in prefs {
            let summary = pad_to(pref.summary(), summary_width);
            let (summary, state) = if pref.is_enabled() {
                (paint(names::SUMMARY, &summary), String::new())
            } else {
                (paint(names::DISABLED, &summary), paint(names::MUTED, "disabled"))
            };
            let line = format!(
                "{}{}{}{}",
                INDENT,
                summary,
                paint(names::KEY, &pad_to(pref.key(), key_width)),
                state
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

pub fn render_changes(changes: &[ChangeReport]) -> String {
    let width = changes
        .iter()
        .map(|c| format!("{} = {}", c.key, c.value).width())
        .max()
        .unwrap_or(0)
        + GAP;
    let mut out = String::new();
    for change in changes {
        let assignment = pad_to(&format!("{} = {}", change.key, change.value), width);
        let outcome = match change.outcome {
            ChangeOutcome::Committed => paint(names::SUCCESS, change.outcome.as_str()),
            _ => paint(names::WARNING, change.outcome.as_str()),
        };
        out.push_str(&format!("{}{}\n", assignment, outcome));
    }
    out
}

pub fn render_groups(screen: &InMemoryRegistry) -> String {
    let mut out = String::new();
    for group in SettingsGroup::ALL {
        out.push_str(&format!(
            "{}  {}\n",
            paint(names::HEADER, &pad_to(group.name(), 8)),
            group.title()
        ));
        for key in group.keys() {
            let marker = if screen.contains(key) {
                String::new()
            } else {
                format!("  {}", paint(names::MUTED, "(absent)"))
            };
            out.push_str(&format!("{}{}{}\n", INDENT, paint(names::KEY, key), marker));
        }
    }
    out
}

pub fn render_reactions(screen: &InMemoryRegistry, decorator: &PreferencesDecorator) -> String {
    let key_width = screen.iter().map(|p| p.key().width()).max().unwrap_or(0) + GAP;
    let mut out = String::new();
    for pref in screen.iter() {
        let reactions = decorator.reactions(pref.key());
        if reactions.is_empty() {
            continue;
        }
        let names_list: Vec<&str> = reactions.iter().map(|r| r.name()).collect();
        out.push_str(&format!(
            "{}{}\n",
            paint(names::KEY, &pad_to(pref.key(), key_width)),
            names_list.join(", ")
        ));
    }
    if out.is_empty() {
        out.push_str(&paint(names::MUTED, "No reactions attached.\n"));
    }
    out
}

fn pref_json(pref: &Preference) -> Value {
    json!({
        "key": pref.key(),
        "kind": pref.kind().name(),
        "summary": pref.summary(),
        "value": pref.value(),
        "enabled": pref.is_enabled(),
    })
}

pub fn screen_json(
    screen: &InMemoryRegistry,
    groups: &[SettingsGroup],
    changes: &[ChangeReport],
) -> Value {
    let sections: Vec<Value> = sections(screen, groups)
        .into_iter()
        .map(|(title, group, prefs)| {
            json!({
                "group": group.map(|g| g.name()),
                "title": title,
                "preferences": prefs.into_iter().map(pref_json).collect::<Vec<_>>(),
            })
        })
        .collect();
    let changes: Vec<Value> = changes
        .iter()
        .map(|c| {
            json!({
                "key": c.key,
                "value": c.value,
                "outcome": c.outcome.as_str(),
            })
        })
        .collect();
    json!({ "sections": sections, "changes": changes })
}

pub fn groups_json(screen: &InMemoryRegistry) -> Value {
    Value::Array(
        SettingsGroup::ALL
            .iter()
            .map(|g| {
                json!({
                    "name": g.name(),
                    "title": g.title(),
                    "keys": g.keys(),
                    "present": g.keys().iter().filter(|k| screen.contains(k)).count(),
                })
            })
            .collect(),
    )
}

pub fn reactions_json(screen: &InMemoryRegistry, decorator: &PreferencesDecorator) -> Value {
    let mut map = serde_json::Map::new();
    for pref in screen.iter() {
        let reactions = decorator.reactions(pref.key());
        if !reactions.is_empty() {
            let names_list: Vec<&str> = reactions.iter().map(|r| r.name()).collect();
            map.insert(pref.key().to_string(), json!(names_list));
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use readerprefs::catalog;

    fn decorated() -> (InMemoryRegistry, PreferencesDecorator) {
        console::set_colors_enabled(false);
        let mut screen = catalog::default_screen().unwrap();
        let mut decorator = PreferencesDecorator::new();
        decorator.decorate_all(&mut screen);
        (screen, decorator)
    }

    #[test]
    fn test_pad_to_uses_display_width() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcdef", 4), "abcdef");
        assert_eq!(pad_to("日本", 6), "日本  ");
    }

    #[test]
    fn test_render_screen_marks_disabled() {
        let (screen, _) = decorated();
        let out = render_screen(&screen, &SettingsGroup::ALL);
        let align_line = out
            .lines()
            .find(|l| l.contains("Page align: By width"))
            .unwrap();
        assert!(align_line.contains("disabled"));
        let view_line = out
            .lines()
            .find(|l| l.contains("View mode: Vertical scroll"))
            .unwrap();
        assert!(!view_line.contains("disabled"));
        assert!(out.contains("Other"));
        assert!(out.contains("Full screen"));
    }

    #[test]
    fn test_render_screen_keeps_group_order() {
        let (screen, _) = decorated();
        let out = render_screen(&screen, &[SettingsGroup::Ui, SettingsGroup::Memory]);
        let ui = out.find("User interface").unwrap();
        let memory = out.find("Memory and performance").unwrap();
        assert!(ui < memory);
        assert!(!out.contains("Rendering"));
    }

    #[test]
    fn test_render_changes_lists_outcomes() {
        console::set_colors_enabled(false);
        let out = render_changes(&[
            ChangeReport {
                key: "viewmode".into(),
                value: PrefValue::text("single_page"),
                outcome: ChangeOutcome::Committed,
            },
            ChangeReport {
                key: "pagesinmemory".into(),
                value: PrefValue::Int(99),
                outcome: ChangeOutcome::Rejected,
            },
        ]);
        assert!(out.contains("viewmode = single_page"));
        assert!(out.contains("committed"));
        assert!(out.contains("pagesinmemory = 99"));
        assert!(out.contains("rejected"));
    }

    #[test]
    fn test_render_reactions() {
        let (screen, decorator) = decorated();
        let out = render_reactions(&screen, &decorator);
        let line = out.lines().find(|l| l.starts_with("viewmode ")).unwrap();
        assert!(line.contains("summary, view-mode"));
        assert!(!out.contains("fullscreen"));
    }

    #[test]
    fn test_groups_json_counts_present_keys() {
        let screen = catalog::app_screen().unwrap();
        let groups = groups_json(&screen);
        let book = &groups[0];
        assert_eq!(book["name"], "book");
        assert_eq!(book["present"], 0);
        assert_eq!(groups[4]["name"], "render");
        assert_eq!(groups[4]["present"], 9);
    }

    #[test]
    fn test_screen_json_shape() {
        let (screen, _) = decorated();
        let value = screen_json(&screen, &[SettingsGroup::Render], &[]);
        let sections = value["sections"].as_array().unwrap();
        assert_eq!(sections[0]["group"], "render");
        assert_eq!(sections.last().unwrap()["group"], Value::Null);
        let align = sections[0]["preferences"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["key"] == "align")
            .unwrap();
        assert_eq!(align["enabled"], false);
        assert_eq!(align["value"], "width");
        assert_eq!(align["kind"], "choice");
    }
}
