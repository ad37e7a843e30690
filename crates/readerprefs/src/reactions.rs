//! # Reactions
//!
//! A reaction is what runs when a preference changes. Reactions are small
//! value types so they can be compared, which is how a composite skips a
//! reaction it already holds.
//!
//! | Reaction | Effect | Can reject |
//! |----------|--------|------------|
//! | [`SummaryReaction`] | re-renders the source's summary | no |
//! | [`ViewModeReaction`] | enables targets only in single page mode | no |
//! | [`AnimationTypeReaction`] | forces the target alignment to `auto` | no |
//! | [`BoundsReaction`] | rejects integers outside `[min, max]` | yes |
//!
//! Reactions see the *proposed* value; the node still holds the old one until
//! every reaction in the composite has accepted. Side effects on other nodes
//! (enabling dependents, forcing the alignment) are not undone when a later
//! reaction in the same composite rejects the change.

use crate::composer::Verdict;
use crate::decorator::PreferencesDecorator;
use crate::model::{PrefValue, SettingKey};
use crate::registry::PreferenceRegistry;
use crate::types::{DocumentViewMode, PageAnimationType, ResValue};
use tracing::trace;

/// Re-render the source node's summary from the proposed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryReaction;

/// Enable `targets` when the source switches to single page mode, disable
/// them for any other mode or an unknown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeReaction {
    targets: Vec<SettingKey>,
}

impl ViewModeReaction {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SettingKey>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn targets(&self) -> &[SettingKey] {
        &self.targets
    }
}

/// Force `target` to automatic alignment whenever an animated page turn is
/// picked on the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTypeReaction {
    target: SettingKey,
}

impl AnimationTypeReaction {
    pub fn new(target: impl Into<SettingKey>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Reject values whose integer form falls outside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsReaction {
    pub min: i32,
    pub max: i32,
}

impl BoundsReaction {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn check(&self, value: &PrefValue) -> Verdict {
        match value.as_int() {
            Some(v) if (self.min..=self.max).contains(&v) => Verdict::Accept,
            _ => Verdict::Reject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Summary(SummaryReaction),
    ViewMode(ViewModeReaction),
    AnimationType(AnimationTypeReaction),
    Bounds(BoundsReaction),
}

impl Reaction {
    pub fn name(&self) -> &'static str {
        match self {
            Reaction::Summary(_) => "summary",
            Reaction::ViewMode(_) => "view-mode",
            Reaction::AnimationType(_) => "animation-type",
            Reaction::Bounds(_) => "bounds",
        }
    }

    /// Run against a proposed `value` for `source`.
    pub fn apply<R: PreferenceRegistry>(
        &self,
        decorator: &PreferencesDecorator,
        registry: &mut R,
        source: &str,
        value: &PrefValue,
    ) -> Verdict {
        trace!(source, reaction = self.name(), value = %value, "running reaction");
        match self {
            Reaction::Summary(_) => {
                if let Some(node) = registry.find_mut(source) {
                    decorator.summaries().render(node, Some(value));
                }
                Verdict::Accept
            }
            Reaction::ViewMode(r) => {
                let mode = DocumentViewMode::from_res_value(&value.to_string());
                decorator.enable_single_page_settings(registry, mode, r.targets());
                Verdict::Accept
            }
            Reaction::AnimationType(r) => {
                let animation = PageAnimationType::from_res_value(&value.to_string());
                decorator.set_page_align(registry, animation, r.target());
                Verdict::Accept
            }
            Reaction::Bounds(r) => r.check(value),
        }
    }
}

impl From<SummaryReaction> for Reaction {
    fn from(r: SummaryReaction) -> Self {
        Reaction::Summary(r)
    }
}

impl From<ViewModeReaction> for Reaction {
    fn from(r: ViewModeReaction) -> Self {
        Reaction::ViewMode(r)
    }
}

impl From<AnimationTypeReaction> for Reaction {
    fn from(r: AnimationTypeReaction) -> Self {
        Reaction::AnimationType(r)
    }
}

impl From<BoundsReaction> for Reaction {
    fn from(r: BoundsReaction) -> Self {
        Reaction::Bounds(r)
    }
}
