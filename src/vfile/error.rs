use crate::core::Field;
use std::error;
use std::fmt;

/// Error raised when a [`VFile`](super::VFile) field is set in a way that
/// would break the consistency of its path properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VFileError {
    /// The field was set to an empty string
    EmptyPart(Field),
    /// The field can only be set once the file has a path
    PathRequired(Field),
    /// The field was given a value containing a separator
    NotAPart(Field),
    /// The extension does not start with a dot
    ExtnameDot,
    /// The extension has more than one dot
    ExtnameDots,
}

impl fmt::Display for VFileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VFileError::EmptyPart(field) => write!(f, "`{field}` cannot be empty"),
            VFileError::PathRequired(field) => {
                write!(f, "Setting `{field}` requires `path` to be set too")
            }
            VFileError::NotAPart(field) => write!(
                f,
                "`{field}` cannot be a path: did not expect `{sep}`",
                sep = super::minpath::SEP
            ),
            VFileError::ExtnameDot => write!(f, "`extname` must start with `.`"),
            VFileError::ExtnameDots => write!(f, "`extname` cannot contain multiple dots"),
        }
    }
}

impl error::Error for VFileError {}
