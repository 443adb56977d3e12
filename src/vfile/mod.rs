//! Virtual file
//!
//! A [`VFile`] is an in-memory description of a file: its contents and every
//! path it has been known by. None of the operations here read or write the
//! disk.
//!
//! The five path properties ([`Field`]) are views over the last entry of
//! [`VFile::history`]. Setting one of them recomputes the path, which keeps the
//! others consistent:
//! - setting `path` pushes a new history entry when it differs from the current path
//! - setting `basename`, `stem` or `extname` rebuilds the path from the current dirname
//! - setting `dirname` keeps the current basename
//!
//! `extname` and `dirname` can only be set on a file that already has a path.

use crate::core::Field;
use error_stack::{Report, Result};
use std::fmt;

mod error;
pub use error::VFileError;
pub mod minpath;

/// In-memory virtual file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VFile {
    /// Every path the file has had, the current path last
    pub history: Vec<String>,
    /// Base of the path, informational only
    pub cwd: String,
    /// Contents of the file
    pub value: Option<String>,
}

/// Options to construct a [`VFile`]
///
/// Path properties are applied in the order `history`, `path`, `basename`,
/// `stem`, `extname`, `dirname`, so `basename` and `dirname` together describe
/// a full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VFileOptions {
    pub history: Option<Vec<String>>,
    pub path: Option<String>,
    pub basename: Option<String>,
    pub stem: Option<String>,
    pub extname: Option<String>,
    pub dirname: Option<String>,
    pub value: Option<String>,
    pub cwd: Option<String>,
}

/// Anything a [`VFile`] can be created from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VFileCompatible {
    /// An existing file, used as-is
    File(VFile),
    /// Contents of a new, pathless file
    Value(String),
    /// Options for a new file
    Options(VFileOptions),
}

impl From<VFile> for VFileCompatible {
    fn from(file: VFile) -> Self {
        Self::File(file)
    }
}

impl From<&str> for VFileCompatible {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for VFileCompatible {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<VFileOptions> for VFileCompatible {
    fn from(options: VFileOptions) -> Self {
        Self::Options(options)
    }
}

impl VFile {
    /// Create a file from anything compatible
    ///
    /// An existing [`VFile`] is returned unchanged.
    pub fn new(value: impl Into<VFileCompatible>) -> Result<Self, VFileError> {
        match value.into() {
            VFileCompatible::File(file) => Ok(file),
            VFileCompatible::Value(value) => Ok(Self {
                value: Some(value),
                cwd: default_cwd(),
                ..Default::default()
            }),
            VFileCompatible::Options(options) => Self::from_options(options),
        }
    }

    /// Create a file with the given path and no contents
    pub fn with_path(path: impl Into<String>) -> Result<Self, VFileError> {
        Self::from_options(VFileOptions {
            path: Some(path.into()),
            ..Default::default()
        })
    }

    fn from_options(options: VFileOptions) -> Result<Self, VFileError> {
        let mut file = Self {
            history: options.history.unwrap_or_default(),
            cwd: options.cwd.unwrap_or_else(default_cwd),
            value: options.value,
        };
        let props = [
            (Field::Path, options.path),
            (Field::Basename, options.basename),
            (Field::Stem, options.stem),
            (Field::Extname, options.extname),
            (Field::Dirname, options.dirname),
        ];
        for (field, value) in props {
            if let Some(value) = value {
                file.set(field, &value).map_err(|e| {
                    e.attach_printable(format!("cannot create file with {field} `{value}`"))
                })?;
            }
        }
        Ok(file)
    }

    /// Get a path property by field
    pub fn get(&self, field: Field) -> Option<String> {
        match field {
            Field::Path => self.path().map(str::to_string),
            Field::Basename => self.basename().map(str::to_string),
            Field::Stem => self.stem().map(str::to_string),
            Field::Extname => self.extname().map(str::to_string),
            Field::Dirname => self.dirname(),
        }
    }

    /// Set a path property by field
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), VFileError> {
        log::trace!("setting {field} to `{value}`");
        match field {
            Field::Path => self.set_path(value),
            Field::Basename => self.set_basename(value),
            Field::Stem => self.set_stem(value),
            Field::Extname => self.set_extname(value),
            Field::Dirname => self.set_dirname(value),
        }
    }

    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn set_path(&mut self, path: &str) -> Result<(), VFileError> {
        assert_non_empty(path, Field::Path)?;
        if self.path() != Some(path) {
            self.history.push(path.to_string());
        }
        Ok(())
    }

    pub fn dirname(&self) -> Option<String> {
        self.path().map(minpath::dirname)
    }

    pub fn set_dirname(&mut self, dirname: &str) -> Result<(), VFileError> {
        let basename = match self.basename() {
            Some(b) if !b.is_empty() => b.to_string(),
            _ => return Err(Report::new(VFileError::PathRequired(Field::Dirname))),
        };
        self.set_path(&minpath::join(&[dirname, &basename]))
    }

    pub fn basename(&self) -> Option<&str> {
        self.path().map(minpath::basename)
    }

    pub fn set_basename(&mut self, basename: &str) -> Result<(), VFileError> {
        assert_non_empty(basename, Field::Basename)?;
        assert_part(basename, Field::Basename)?;
        let dirname = self.dirname().unwrap_or_default();
        self.set_path(&minpath::join(&[&dirname, basename]))
    }

    pub fn extname(&self) -> Option<&str> {
        self.path().map(minpath::extname)
    }

    pub fn set_extname(&mut self, extname: &str) -> Result<(), VFileError> {
        assert_part(extname, Field::Extname)?;
        let path = match self.path() {
            Some(p) => p,
            None => return Err(Report::new(VFileError::PathRequired(Field::Extname))),
        };
        if !extname.is_empty() {
            if !extname.starts_with('.') {
                return Err(Report::new(VFileError::ExtnameDot)
                    .attach_printable(format!("got `{extname}`")));
            }
            if extname[1..].contains('.') {
                return Err(Report::new(VFileError::ExtnameDots)
                    .attach_printable(format!("got `{extname}`")));
            }
        }
        let dirname = minpath::dirname(path);
        let stem = format!("{}{extname}", minpath::stem(path));
        self.set_path(&minpath::join(&[&dirname, &stem]))
    }

    pub fn stem(&self) -> Option<&str> {
        self.path().map(minpath::stem)
    }

    pub fn set_stem(&mut self, stem: &str) -> Result<(), VFileError> {
        assert_non_empty(stem, Field::Stem)?;
        assert_part(stem, Field::Stem)?;
        let dirname = self.dirname().unwrap_or_default();
        let basename = format!("{stem}{}", self.extname().unwrap_or_default());
        self.set_path(&minpath::join(&[&dirname, &basename]))
    }
}

/// Displays the contents of the file
impl fmt::Display for VFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.as_deref().unwrap_or_default())
    }
}

fn default_cwd() -> String {
    std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".".to_string())
}

fn assert_non_empty(part: &str, field: Field) -> Result<(), VFileError> {
    if part.is_empty() {
        return Err(Report::new(VFileError::EmptyPart(field)));
    }
    Ok(())
}

fn assert_part(part: &str, field: Field) -> Result<(), VFileError> {
    if part.contains(minpath::SEP) {
        return Err(Report::new(VFileError::NotAPart(field)).attach_printable(format!("got `{part}`")));
    }
    Ok(())
}
