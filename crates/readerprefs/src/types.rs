//! Enumerants decoded from stored preference values.
//!
//! Each enum maps one-to-one onto the stored ("resource") values of a choice
//! preference. Decoding is case-sensitive and never fails loudly: a value
//! outside the closed set decodes to `None`, and callers fall back to their
//! safe default.

use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// An enum whose variants are persisted as fixed string values.
pub trait ResValue: Copy + FromStr + Into<&'static str> + IntoEnumIterator {
    /// The stored value for this variant.
    fn res_value(self) -> &'static str {
        self.into()
    }

    /// Decode a stored value. Unknown values yield `None`.
    fn from_res_value(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// All stored values, in declaration order.
    fn res_values() -> Vec<&'static str> {
        Self::iter().map(ResValue::res_value).collect()
    }
}

impl<T> ResValue for T where T: Copy + FromStr + Into<&'static str> + IntoEnumIterator {}

/// How pages are laid out while reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum DocumentViewMode {
    #[strum(serialize = "vertical_scroll")]
    VerticalScroll,
    #[strum(serialize = "horizontal_scroll")]
    HorizontalScroll,
    #[strum(serialize = "single_page")]
    SinglePage,
}

/// Horizontal fitting of a page inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum PageAlign {
    #[strum(serialize = "width")]
    Width,
    #[strum(serialize = "height")]
    Height,
    #[strum(serialize = "auto")]
    Auto,
}

/// Page turn animation in single page mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum PageAnimationType {
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "curler")]
    Curler,
    #[strum(serialize = "curler_dynamic")]
    CurlerDynamic,
    #[strum(serialize = "slider")]
    Slider,
    #[strum(serialize = "slider2")]
    Slider2,
    #[strum(serialize = "fader")]
    Fader,
    #[strum(serialize = "squeezer")]
    Squeezer,
}

impl PageAnimationType {
    /// Whether pages are animated at all.
    pub fn is_animated(&self) -> bool {
        !matches!(self, PageAnimationType::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_round_trip() {
        for mode in DocumentViewMode::iter() {
            assert_eq!(DocumentViewMode::from_res_value(mode.res_value()), Some(mode));
        }
        for align in PageAlign::iter() {
            assert_eq!(PageAlign::from_res_value(align.res_value()), Some(align));
        }
        for anim in PageAnimationType::iter() {
            assert_eq!(PageAnimationType::from_res_value(anim.res_value()), Some(anim));
        }
    }

    #[test]
    fn known_stored_values() {
        assert_eq!(DocumentViewMode::SinglePage.res_value(), "single_page");
        assert_eq!(PageAlign::Auto.res_value(), "auto");
        assert_eq!(PageAnimationType::CurlerDynamic.res_value(), "curler_dynamic");
    }

    #[test]
    fn decoding_is_case_sensitive() {
        assert_eq!(DocumentViewMode::from_res_value("SINGLE_PAGE"), None);
        assert_eq!(DocumentViewMode::from_res_value("Single_page"), None);
        assert_eq!(PageAnimationType::from_res_value("Curler"), None);
    }

    #[test]
    fn unknown_values_decode_to_none() {
        assert_eq!(DocumentViewMode::from_res_value(""), None);
        assert_eq!(DocumentViewMode::from_res_value("continuous"), None);
        assert_eq!(PageAlign::from_res_value("left"), None);
    }

    #[test]
    fn res_values_in_declaration_order() {
        assert_eq!(PageAlign::res_values(), vec!["width", "height", "auto"]);
        assert_eq!(
            DocumentViewMode::res_values(),
            vec!["vertical_scroll", "horizontal_scroll", "single_page"]
        );
    }

    #[test]
    fn only_none_is_not_animated() {
        assert!(!PageAnimationType::None.is_animated());
        assert!(PageAnimationType::iter()
            .filter(|t| *t != PageAnimationType::None)
            .all(|t| t.is_animated()));
    }
}
