use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 400;

/// Vertical placement of items inside the viewport.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    #[strum(serialize = "top", serialize = "t")]
    Top,
    #[strum(serialize = "center", serialize = "centre", serialize = "c")]
    Center,
    #[strum(serialize = "bottom", serialize = "b")]
    Bottom,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    /// Duration of every distance-based rotation (snaps, steps, scroll-to).
    pub animation_duration_ms: u64,
    /// Report the item passing the zero slot on every animation tick.
    pub callback_during_fling: bool,
    /// Report taps on items that are not selected instead of scrolling to them.
    pub callback_on_unselected_item_click: bool,
    pub gravity: Gravity,
    pub padding: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            callback_during_fling: true,
            callback_on_unselected_item_click: true,
            gravity: Gravity::Top,
            padding: 0.0,
        }
    }
}
