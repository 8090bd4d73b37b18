use crate::error::{GeometryError, Result};
use crate::logging::trace;

/// Name-based access to the scalar attributes of a geometry value.
///
/// Fields are reachable through typed accessors as well; this table exists
/// for callers that only have a name at hand, such as scripting bridges or
/// expression evaluators.
pub trait Attributes {
    const TYPE_NAME: &'static str;
    const ATTRIBUTES: &'static [&'static str];

    fn attribute(&self, name: &str) -> Result<f64>;

    fn has_attribute(&self, name: &str) -> bool {
        Self::ATTRIBUTES.iter().any(|known| *known == name)
    }

    /// Always fails. Geometry values are immutable, so a known name reports
    /// [`GeometryError::Immutable`] and anything else [`GeometryError::NotFound`].
    fn set_attribute(&self, name: &str, value: f64) -> Result<()> {
        trace!("Rejected assignment {}.{name} = {value}", Self::TYPE_NAME);

        if self.has_attribute(name) {
            Err(GeometryError::Immutable {
                type_name: Self::TYPE_NAME,
                name: name.to_owned(),
            })
        } else {
            Err(GeometryError::NotFound {
                type_name: Self::TYPE_NAME,
                name: name.to_owned(),
            })
        }
    }
}
