//! Display and cursor commands

use super::{respond, ScreenshotState};
use crate::capture::{CaptureResult, DisplayInfo, Point, Rect, ScreenSource};
use crate::utils::error::ErrorResponse;
use crate::window::WindowApi;
use serde::{Deserialize, Serialize};

/// A display with its preview thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPreview {
    pub display: DisplayInfo,

    /// `None` when the thumbnail could not be captured
    pub thumbnail: Option<CaptureResult>,
}

/// Number of active displays
pub fn get_display_count<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
) -> Result<usize, ErrorResponse> {
    respond("get_display_count", state.screenshotter.display_count())
}

/// Bounds of one display
pub fn get_display_bounds<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
    display_index: usize,
) -> Result<Rect, ErrorResponse> {
    respond("get_display_bounds", state.screenshotter.display_bounds(display_index))
}

/// All active displays
pub fn get_displays<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
) -> Result<Vec<DisplayInfo>, ErrorResponse> {
    respond("get_displays", state.screenshotter.list_displays())
}

/// All active displays with thumbnails for a screen picker
///
/// A display whose thumbnail fails is still listed, without a thumbnail.
pub fn get_display_previews<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
) -> Result<Vec<DisplayPreview>, ErrorResponse> {
    let displays = respond("get_display_previews", state.screenshotter.list_displays())?;
    let (max_width, max_height) = (state.config.thumbnail_max_width, state.config.thumbnail_max_height);

    Ok(displays
        .into_iter()
        .map(|info| {
            let index = info.index;
            let thumbnail = match state
                .screenshotter
                .capture_display_thumbnail(index, max_width, max_height)
            {
                Ok(thumbnail) => Some(thumbnail),
                Err(e) => {
                    tracing::warn!("Failed to capture thumbnail for display {}: {}", index, e);
                    None
                }
            };
            DisplayPreview {
                display: info,
                thumbnail,
            }
        })
        .collect())
}

/// Cursor position in screen coordinates
pub fn get_cursor_position<S: ScreenSource, W: WindowApi>(
    state: &ScreenshotState<S, W>,
) -> Result<Point, ErrorResponse> {
    respond("get_cursor_position", state.screenshotter.cursor_position())
}

/// Index of the display under the cursor (0 when none matches)
pub fn get_monitor_at_cursor<S: ScreenSource, W: WindowApi>(state: &ScreenshotState<S, W>) -> usize {
    state.screenshotter.monitor_at_cursor()
}
