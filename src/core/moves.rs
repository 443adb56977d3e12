use crate::core::Field;
use crate::vfile::{VFile, VFileError};
use derivative::Derivative;
use error_stack::Result;
use std::sync::Arc;

/// Signature of a caller supplied move
pub type MoveFn = dyn Fn(&mut VFile) -> Result<(), VFileError> + Send + Sync;

/// A compiled change to the path properties of a [`VFile`]
///
/// Moves are plain values: they can be inspected, cloned, reused on any number
/// of files and shared between threads.
/// Prefix and suffix moves are not idempotent, applying them twice adds the
/// affix twice.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub enum Move {
    /// Set the field to the value
    Set(Field, String),
    /// Prepend the text to the current value of the field
    Prefix(Field, String),
    /// Append the text to the current value of the field
    Suffix(Field, String),
    /// Apply every move in order, then collapse the history
    ///
    /// However many fields the inner moves change, the file's history grows by
    /// exactly one entry: the final path.
    All(Vec<Move>),
    /// Caller supplied move, applied as-is
    Custom(#[derivative(Debug = "ignore")] Arc<MoveFn>),
}

impl Move {
    /// Move that changes no field
    ///
    /// It is still a composite move, so applying it appends the current path to
    /// the history.
    pub fn nothing() -> Self {
        Move::All(Vec::new())
    }

    /// Wrap a function as a move
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut VFile) -> Result<(), VFileError> + Send + Sync + 'static,
    {
        Move::Custom(Arc::new(f))
    }

    /// Apply the move to the file
    ///
    /// Returns the same file for chaining. If an inner move fails, the changes
    /// made before it stay on the file.
    pub fn apply<'f>(&self, file: &'f mut VFile) -> Result<&'f mut VFile, VFileError> {
        match self {
            Move::Set(field, value) => file.set(*field, value)?,
            Move::Prefix(field, prefix) => {
                let current = file.get(*field).unwrap_or_default();
                file.set(*field, &format!("{prefix}{current}"))?;
            }
            Move::Suffix(field, suffix) => {
                let current = file.get(*field).unwrap_or_default();
                file.set(*field, &format!("{current}{suffix}"))?;
            }
            Move::All(moves) => {
                let mut history = file.history.clone();
                for m in moves {
                    m.apply(file)?;
                }
                // only keep the final path
                if let Some(path) = file.path() {
                    history.push(path.to_string());
                }
                file.history = history;
            }
            Move::Custom(f) => f(&mut *file)?,
        }
        Ok(file)
    }
}

impl<F> From<F> for Move
where
    F: Fn(&mut VFile) -> Result<(), VFileError> + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Move::custom(f)
    }
}
