//! Error types

use std::error;
use std::fmt;

pub use crate::batch::BatchError;
pub use crate::vfile::VFileError;

/// Error from compiling or applying rename instructions
///
/// Failures raised by the file itself while a move is applied are kept in
/// the report as a [`VFileError`] frame under [`RenameError::File`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// The instruction is not nothing, a move, a string, a spec or a list
    InvalidInstruction,
    /// A spec names a property that is not a path property
    InvalidField(String),
    /// A spec maps a path property to something that is not a string or affix
    InvalidFieldValue(String),
    /// The file could not be created or renamed
    File,
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenameError::InvalidInstruction => {
                write!(f, "Expected function, string, array, or object as renames")
            }
            RenameError::InvalidField(key) => {
                write!(f, "Cannot rename `{key}`: it's not a path property")
            }
            RenameError::InvalidFieldValue(key) => write!(
                f,
                "Expected string, or object with `prefix` and/or `suffix`, to rename `{key}`"
            ),
            RenameError::File => write!(f, "Could not rename file"),
        }
    }
}

impl error::Error for RenameError {}
