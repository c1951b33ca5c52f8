use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    OutOfRange {
        field: &'static str,
        min: u32,
        actual: u32,
    },
    DotSegment {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::OutOfRange { field, min, actual } => {
                write!(f, "{field} out of range: {actual} (expected >= {min})")
            }
            Self::DotSegment { field, value } => {
                write!(f, "{field} cannot be the relative path segment {value:?}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `value` and reject it when nothing is left.
pub(crate) fn require_non_blank(
    value: impl Into<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Like [`require_non_blank`], but also rejects `.` and `..`, which URL path
/// normalization would swallow instead of sending as an id.
pub(crate) fn require_path_segment(
    value: impl Into<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = require_non_blank(value, field)?;
    if value == "." || value == ".." {
        return Err(ValidationError::DotSegment { field, value });
    }
    Ok(value)
}
