use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{type_name} has no attribute `{name}`")]
    NotFound {
        type_name: &'static str,
        name: String,
    },
    #[error("cannot assign `{name}` on {type_name}: value is immutable")]
    Immutable {
        type_name: &'static str,
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
