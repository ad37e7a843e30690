//! # Preference Keys and Groups
//!
//! The settings screen is split into groups, one per category page. Each group
//! lists the keys it decorates; the groups that carry page layout settings also
//! name a *view mode triple* (view mode, page alignment, animation type) whose
//! members depend on each other.
//!
//! | Group | Triple |
//! |-------|--------|
//! | `book` | `book_viewmode` → `book_align`, `book_animationType` |
//! | `browser` | – |
//! | `opds` | – |
//! | `memory` | – |
//! | `render` | `viewmode` → `align`, `animationType` |
//! | `scroll` | – |
//! | `ui` | – |
//!
//! Book-level keys only exist while a book is open; on the application-wide
//! screen those nodes are absent and the book group decorates nothing.

use crate::error::{PrefsError, Result};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

// Book-specific overrides
pub const BOOK_CONTRAST: &str = "book_contrast";
pub const BOOK_EXPOSURE: &str = "book_exposure";
pub const BOOK_VIEW_MODE: &str = "book_viewmode";
pub const BOOK_PAGE_ALIGN: &str = "book_align";
pub const BOOK_ANIMATION_TYPE: &str = "book_animationType";

// Library browser
pub const AUTO_SCAN_DIRS: &str = "brautoscandir";

// OPDS catalogs
pub const OPDS_DOWNLOAD_DIR: &str = "opdsdownloaddir";

// Memory and performance
pub const PAGES_IN_MEMORY: &str = "pagesinmemory";
pub const VIEW_TYPE: &str = "viewtype";
pub const DECODE_THREAD_PRIORITY: &str = "decodethreadpriority";
pub const DRAW_THREAD_PRIORITY: &str = "drawthreadpriority";
pub const BITMAP_SIZE: &str = "bitmapsize";
pub const HEAP_PREALLOCATE: &str = "heapPreallocate";

// Rendering
pub const CONTRAST: &str = "contrast";
pub const EXPOSURE: &str = "exposure";
pub const VIEW_MODE: &str = "viewmode";
pub const PAGE_ALIGN: &str = "align";
pub const ANIMATION_TYPE: &str = "animationType";
pub const DJVU_RENDERING_MODE: &str = "djvu_rendering_mode";
pub const PDF_CUSTOM_XDPI: &str = "pdfcustomxdpi";
pub const PDF_CUSTOM_YDPI: &str = "pdfcustomydpi";
pub const FB2_FONT_SIZE: &str = "fb2fontsize";

// Scrolling and touch
pub const SCROLL_HEIGHT: &str = "scrollheight";
pub const TOUCH_DELAY: &str = "touchdelay";

// UI
pub const ROTATION: &str = "rotation";
pub const BRIGHTNESS: &str = "brightness";
pub const PAGE_NUMBER_TOAST_POSITION: &str = "pagenumbertoastposition";
pub const ZOOM_TOAST_POSITION: &str = "zoomtoastposition";

/// A view mode source and the two settings that only apply in single page mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModeTriple {
    pub view_mode: &'static str,
    pub page_align: &'static str,
    pub animation_type: &'static str,
}

impl ViewModeTriple {
    /// Keys enabled only in single page mode.
    pub fn dependents(&self) -> [&'static str; 2] {
        [self.page_align, self.animation_type]
    }
}

/// One category page of the settings screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SettingsGroup {
    Book,
    Browser,
    Opds,
    Memory,
    Render,
    Scroll,
    Ui,
}

impl SettingsGroup {
    /// All groups in screen order.
    pub const ALL: [SettingsGroup; 7] = [
        SettingsGroup::Book,
        SettingsGroup::Browser,
        SettingsGroup::Opds,
        SettingsGroup::Memory,
        SettingsGroup::Render,
        SettingsGroup::Scroll,
        SettingsGroup::Ui,
    ];

    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    pub fn from_name(name: &str) -> Result<SettingsGroup> {
        name.parse()
            .map_err(|_| PrefsError::UnknownGroup(name.to_string()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsGroup::Book => "Book settings",
            SettingsGroup::Browser => "Library browser",
            SettingsGroup::Opds => "OPDS catalogs",
            SettingsGroup::Memory => "Memory and performance",
            SettingsGroup::Render => "Rendering",
            SettingsGroup::Scroll => "Scrolling and touch",
            SettingsGroup::Ui => "User interface",
        }
    }

    /// Keys decorated by this group, in decoration order.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            SettingsGroup::Book => &[
                BOOK_CONTRAST,
                BOOK_EXPOSURE,
                BOOK_VIEW_MODE,
                BOOK_PAGE_ALIGN,
                BOOK_ANIMATION_TYPE,
            ],
            SettingsGroup::Browser => &[AUTO_SCAN_DIRS],
            SettingsGroup::Opds => &[OPDS_DOWNLOAD_DIR],
            SettingsGroup::Memory => &[
                PAGES_IN_MEMORY,
                VIEW_TYPE,
                DECODE_THREAD_PRIORITY,
                DRAW_THREAD_PRIORITY,
                BITMAP_SIZE,
                HEAP_PREALLOCATE,
            ],
            SettingsGroup::Render => &[
                CONTRAST,
                EXPOSURE,
                VIEW_MODE,
                PAGE_ALIGN,
                ANIMATION_TYPE,
                DJVU_RENDERING_MODE,
                PDF_CUSTOM_XDPI,
                PDF_CUSTOM_YDPI,
                FB2_FONT_SIZE,
            ],
            SettingsGroup::Scroll => &[SCROLL_HEIGHT, TOUCH_DELAY],
            SettingsGroup::Ui => &[
                ROTATION,
                BRIGHTNESS,
                PAGE_NUMBER_TOAST_POSITION,
                ZOOM_TOAST_POSITION,
            ],
        }
    }

    pub fn view_mode_triple(&self) -> Option<ViewModeTriple> {
        match self {
            SettingsGroup::Book => Some(ViewModeTriple {
                view_mode: BOOK_VIEW_MODE,
                page_align: BOOK_PAGE_ALIGN,
                animation_type: BOOK_ANIMATION_TYPE,
            }),
            SettingsGroup::Render => Some(ViewModeTriple {
                view_mode: VIEW_MODE,
                page_align: PAGE_ALIGN,
                animation_type: ANIMATION_TYPE,
            }),
            _ => None,
        }
    }

    /// Group that decorates `key`, if any.
    pub fn of_key(key: &str) -> Option<SettingsGroup> {
        Self::ALL.into_iter().find(|g| g.keys().contains(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_across_groups() {
        let mut seen = HashSet::new();
        for group in SettingsGroup::ALL {
            for key in group.keys() {
                assert!(seen.insert(*key), "duplicate key {}", key);
            }
        }
        assert_eq!(seen.len(), 28);
    }

    #[test]
    fn triples_are_members_of_their_group() {
        for group in SettingsGroup::ALL {
            if let Some(triple) = group.view_mode_triple() {
                assert!(group.keys().contains(&triple.view_mode));
                for dep in triple.dependents() {
                    assert!(group.keys().contains(&dep));
                }
            }
        }
    }

    #[test]
    fn only_book_and_render_have_triples() {
        let with_triple: Vec<_> = SettingsGroup::ALL
            .into_iter()
            .filter(|g| g.view_mode_triple().is_some())
            .collect();
        assert_eq!(with_triple, vec![SettingsGroup::Book, SettingsGroup::Render]);
    }

    #[test]
    fn group_names_parse_back() {
        for group in SettingsGroup::ALL {
            assert_eq!(group.name().parse::<SettingsGroup>().unwrap(), group);
        }
        assert!("Render".parse::<SettingsGroup>().is_err());
    }

    #[test]
    fn from_name_reports_unknown_group() {
        assert_eq!(SettingsGroup::from_name("ui").unwrap(), SettingsGroup::Ui);
        match SettingsGroup::from_name("sound") {
            Err(PrefsError::UnknownGroup(name)) => assert_eq!(name, "sound"),
            other => panic!("Expected UnknownGroup, got {:?}", other),
        }
    }

    #[test]
    fn of_key_finds_owner() {
        assert_eq!(SettingsGroup::of_key(PAGE_ALIGN), Some(SettingsGroup::Render));
        assert_eq!(SettingsGroup::of_key(BOOK_PAGE_ALIGN), Some(SettingsGroup::Book));
        assert_eq!(SettingsGroup::of_key("nightmode"), None);
    }
}
