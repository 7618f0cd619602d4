//! Capture configuration supplied by the host

use crate::utils::error::AppResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for window capture and display previews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureConfig {
    /// How long to wait after raising a window before reading its pixels
    pub settle_delay_ms: u64,

    /// Restore and activate a window before capturing it
    pub bring_to_foreground: bool,

    /// Bounding box for display preview thumbnails
    pub thumbnail_max_width: u32,
    pub thumbnail_max_height: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            bring_to_foreground: true,
            thumbnail_max_width: 320,
            thumbnail_max_height: 240,
        }
    }
}

impl CaptureConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
