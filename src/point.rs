use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::attributes::Attributes;
use crate::error::{GeometryError, Result};
use crate::rectangle::Rectangle;

/// Tolerance for [`Point::borders_within`] when the caller has no better one.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// 2D coordinate.
///
/// The corner constructors follow a Y-up convention: `max_y` is the top edge.
/// With screen coordinates (Y-down) "top" and "bottom" swap meaning.
#[repr(C)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::NoUninit))]
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rectangle spanned by `self` and `other` as opposite corners.
    pub fn point_to_rect(&self, other: &Point) -> Rectangle {
        Rectangle::new(self.x, self.y, other.x, other.y)
    }

    /// Rectangle with one corner at `self`. Negative sizes extend left or down.
    pub fn make_rect(&self, width: f64, height: f64) -> Rectangle {
        Rectangle::new(self.x, self.y, self.x + width, self.y + height)
    }

    pub fn top_left(rect: &Rectangle) -> Point {
        Point::new(rect.min_x(), rect.max_y())
    }

    pub fn bottom_left(rect: &Rectangle) -> Point {
        Point::new(rect.min_x(), rect.min_y())
    }

    pub fn top_right(rect: &Rectangle) -> Point {
        Point::new(rect.max_x(), rect.max_y())
    }

    pub fn bottom_right(rect: &Rectangle) -> Point {
        Point::new(rect.max_x(), rect.min_y())
    }

    /// Center of `rect`, the same point as [`Rectangle::center`].
    pub fn centre(rect: &Rectangle) -> Point {
        let (x, y) = rect.center();
        Point::new(x, y)
    }

    /// Half the width and half the height of `rect`, as a point.
    ///
    /// Equal to [`Point::centre`] only when the rectangle starts at the origin.
    pub fn half_extent(rect: &Rectangle) -> Point {
        Point::new(rect.width() / 2.0, rect.height() / 2.0)
    }

    /// Inclusive: a point on an edge is inside.
    pub fn inside(&self, rect: &Rectangle) -> bool {
        self.x >= rect.min_x()
            && self.x <= rect.max_x()
            && self.y >= rect.min_y()
            && self.y <= rect.max_y()
    }

    /// True when the point lies on one of the four edges of `rect`.
    ///
    /// Coordinates are compared exactly, so a point that is off by rounding
    /// error is reported as not bordering. See [`Point::borders_within`].
    pub fn borders(&self, rect: &Rectangle) -> bool {
        let on_vertical = (self.x == rect.min_x() || self.x == rect.max_x())
            && self.y >= rect.min_y()
            && self.y <= rect.max_y();
        let on_horizontal = (self.y == rect.min_y() || self.y == rect.max_y())
            && self.x >= rect.min_x()
            && self.x <= rect.max_x();

        on_vertical || on_horizontal
    }

    /// [`Point::borders`] with an absolute tolerance on every comparison.
    pub fn borders_within(&self, rect: &Rectangle, tolerance: f64) -> bool {
        let near = |a: f64, b: f64| (a - b).abs() <= tolerance;
        let in_x = self.x >= rect.min_x() - tolerance && self.x <= rect.max_x() + tolerance;
        let in_y = self.y >= rect.min_y() - tolerance && self.y <= rect.max_y() + tolerance;

        ((near(self.x, rect.min_x()) || near(self.x, rect.max_x())) && in_y)
            || ((near(self.y, rect.min_y()) || near(self.y, rect.max_y())) && in_x)
    }

    pub fn translate_xy(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn translate_x(&self, dx: f64) -> Point {
        self.translate_xy(dx, 0.0)
    }

    pub fn translate_y(&self, dy: f64) -> Point {
        self.translate_xy(0.0, dy)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        nalgebra::distance(&Point2::from(*self), &Point2::from(*other))
    }

    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl Rectangle {
    pub fn from_corners(a: Point, b: Point) -> Self {
        a.point_to_rect(&b)
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        point.inside(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl Attributes for Point {
    const TYPE_NAME: &'static str = "Point";
    const ATTRIBUTES: &'static [&'static str] = &["x", "y"];

    fn attribute(&self, name: &str) -> Result<f64> {
        match name {
            "x" => Ok(self.x),
            "y" => Ok(self.y),
            _ => Err(GeometryError::NotFound {
                type_name: Self::TYPE_NAME,
                name: name.to_owned(),
            }),
        }
    }
}
