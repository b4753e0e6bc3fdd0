use thiserror::Error;

/// Top-level error type for geoprim.
#[derive(Debug, Error)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised when a geometric operation is given an argument it cannot accept.
///
/// Degenerate-but-valid inputs (parallel lines, collinear triangles, ...) are not
/// errors; those queries return `None` instead.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{parameter} can not be an unspecified (None) orientation or axis")]
    UnspecifiedOrientation { parameter: &'static str },

    #[error("at least {required} vertices are required, got {actual}")]
    InsufficientVertices { required: usize, actual: usize },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while parsing a value from its textual form.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected token '{expected}' in \"{input}\"")]
    MissingToken { expected: &'static str, input: String },

    #[error("expected a {expected} but found \"{found}\"")]
    UnexpectedTypeName { expected: &'static str, found: String },

    #[error("expected {expected} fields but found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("expected field '{expected}' but found '{found}'")]
    UnexpectedField { expected: &'static str, found: String },

    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
