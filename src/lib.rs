//! Immutable 2D geometry values: an axis-aligned [`Rectangle`] and a [`Point`].
//!
//! ```
//! use planar::{Point, Rectangle};
//!
//! let r = Rectangle::new(4.0, 4.0, 0.0, 0.0);
//! assert_eq!(r.min_x(), 0.0);
//! assert!(r.intersects(&Rectangle::new(2.0, 2.0, 6.0, 6.0)));
//! assert!(Point::new(4.0, 1.0).borders(&r));
//! ```

mod attributes;
mod error;
pub mod logging;
mod point;
mod rectangle;

pub use attributes::Attributes;
pub use error::{GeometryError, Result};
pub use point::{Point, DEFAULT_TOLERANCE};
pub use rectangle::Rectangle;

pub mod prelude {
    pub use crate::{Attributes, Point, Rectangle};
}
