//! Capture trait definitions
//!
//! Platform-agnostic types and the trait every screen backend implements.

use crate::utils::error::AppResult;
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// A point in virtual-screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in virtual-screen coordinates
///
/// Width and height are signed: rectangles reported by the OS can come back
/// empty or inverted, and callers validate before capturing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from its left/top/right/bottom edges
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }

    /// Top-left corner
    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bottom-right corner (exclusive)
    pub fn max(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open point membership
    pub fn contains(&self, point: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        other_min.x >= min.x && other_min.y >= min.y && other_max.x <= max.x && other_max.y <= max.y
    }

    /// Overlapping area of two rectangles, `None` when they do not overlap
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        let overlap = Rect::from_edges(
            min.x.max(other_min.x),
            min.y.max(other_min.y),
            max.x.min(other_max.x),
            max.y.min(other_max.y),
        );
        (!overlap.is_empty()).then_some(overlap)
    }
}

/// Information about a display/screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayInfo {
    /// Position in the enumeration this value came from
    pub index: usize,

    /// Display name
    pub name: String,

    /// Bounds in virtual-screen coordinates
    pub bounds: Rect,

    /// Whether this is the primary display
    pub is_primary: bool,
}

/// OS access used by the capture module
///
/// Every call is a fresh, blocking query. Implementations hold no caches.
pub trait ScreenSource {
    /// Enumerate active displays
    fn displays(&self) -> AppResult<Vec<DisplayInfo>>;

    /// Read the pixels inside `region`
    ///
    /// `region` is never empty when called from [`super::Screenshotter`].
    fn grab(&self, region: Rect) -> AppResult<RgbaImage>;

    /// Current cursor position in screen coordinates
    fn cursor_position(&self) -> AppResult<Point>;
}

impl<S: ScreenSource + ?Sized> ScreenSource for &S {
    fn displays(&self) -> AppResult<Vec<DisplayInfo>> {
        (**self).displays()
    }

    fn grab(&self, region: Rect) -> AppResult<RgbaImage> {
        (**self).grab(region)
    }

    fn cursor_position(&self) -> AppResult<Point> {
        (**self).cursor_position()
    }
}
