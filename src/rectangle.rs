use std::fmt;

use nalgebra::Vector2;

use crate::attributes::Attributes;
use crate::error::{GeometryError, Result};
use crate::logging::trace;

/// Axis-aligned rectangle.
///
/// Corners are normalized on construction, so `min_x() <= max_x()` and
/// `min_y() <= max_y()` hold for every value of this type. Transforms never
/// modify `self`; they return a fresh rectangle.
///
/// Rectangles can be cast to raw `f64`s but not back, since arbitrary bits
/// would skip normalization:
///
/// ```compile_fail
/// let r: planar::Rectangle = bytemuck::cast([4.0f64, 6.0, 0.0, 0.0]);
/// ```
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::NoUninit))]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rectangle {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rectangle {
    /// Builds a rectangle from two opposite corners given in any order.
    ///
    /// Each axis is sorted independently. Non-finite input is not checked:
    /// NaN stays in the bounds and propagates into every derived value.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        if x0 > x1 || y0 > y1 {
            trace!("Normalizing corners ({x0}, {y0}) ({x1}, {y1})");
        }

        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// A rectangle with zero width or zero height.
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Exact equality of all four bounds.
    pub fn identical_to(&self, other: &Rectangle) -> bool {
        self == other
    }

    /// True when the open interiors overlap. Rectangles that only share an
    /// edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// True when `other` lies within the closed bounds of `self`.
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Overlapping region, or `None` under the same rule as [`intersects`].
    ///
    /// [`intersects`]: Rectangle::intersects
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        if !self.intersects(other) {
            return None;
        }

        Some(Rectangle::new(
            greater(self.min_x, other.min_x),
            greater(self.min_y, other.min_y),
            lesser(self.max_x, other.max_x),
            lesser(self.max_y, other.max_y),
        ))
    }

    /// Smallest rectangle enclosing both.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle::new(
            lesser(self.min_x, other.min_x),
            lesser(self.min_y, other.min_y),
            greater(self.max_x, other.max_x),
            greater(self.max_y, other.max_y),
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }

    pub fn translated_by(&self, offset: Vector2<f64>) -> Rectangle {
        self.translated(offset.x, offset.y)
    }

    /// Scales both corners about the origin. Negative factors mirror the
    /// rectangle and the corners are re-sorted.
    pub fn scaled_origin(&self, sx: f64, sy: f64) -> Rectangle {
        Rectangle::new(
            self.min_x * sx,
            self.min_y * sy,
            self.max_x * sx,
            self.max_y * sy,
        )
    }

    /// Scales about the rectangle's own center.
    pub fn scaled_center(&self, sx: f64, sy: f64) -> Rectangle {
        let (cx, cy) = self.center();
        self.translated(-cx, -cy)
            .scaled_origin(sx, sy)
            .translated(cx, cy)
    }

    /// Pushes every side outwards by `dx` horizontally and `dy` vertically.
    ///
    /// Negative amounts shrink. Shrinking by more than half a dimension
    /// crosses the sides over, and the result is re-sorted rather than
    /// clamped.
    pub fn inflated(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle::new(
            self.min_x - dx,
            self.min_y - dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }
}

// `f64::min`/`f64::max` drop NaN operands; these keep them.
fn lesser(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn greater(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}; {}, {}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl Attributes for Rectangle {
    const TYPE_NAME: &'static str = "Rectangle";
    const ATTRIBUTES: &'static [&'static str] =
        &["min_x", "min_y", "max_x", "max_y", "width", "height", "area"];

    fn attribute(&self, name: &str) -> Result<f64> {
        match name {
            "min_x" => Ok(self.min_x),
            "min_y" => Ok(self.min_y),
            "max_x" => Ok(self.max_x),
            "max_y" => Ok(self.max_y),
            "width" => Ok(self.width()),
            "height" => Ok(self.height()),
            "area" => Ok(self.area()),
            _ => Err(GeometryError::NotFound {
                type_name: Self::TYPE_NAME,
                name: name.to_owned(),
            }),
        }
    }
}
