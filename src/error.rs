use std::fmt;
use thiserror::Error;

/// Role a configured field plays in a chart definition. Used to label
/// validation errors the way the rendering layer reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    X,
    Y,
    Size,
    Color,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldRole::X => "x axis",
            FieldRole::Y => "y axis",
            FieldRole::Size => "size dimension",
            FieldRole::Color => "color dimension",
        };
        f.write_str(s)
    }
}

/// Configuration/contract violations. All are detected synchronously,
/// before any classifier state is mutated, and none are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured field name has no matching column in the submitted
    /// metadata. Raised for required fields (`x`, `y`) and for optional
    /// fields (`size`, color dimension) that are named in config.
    #[error("{chart}: {role} name '{field}' is not found among metadata")]
    MissingField {
        chart: String,
        role: FieldRole,
        field: String,
    },
    /// A wire column type outside the supported enum.
    #[error("unsupported column type '{0}'")]
    UnsupportedColumnType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
