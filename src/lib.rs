//! # vfile-rename
//! Rename the path properties of in-memory virtual files.
//!
//! Rename instructions ([`Renames`]) are compiled by [`convert`] into a [`Move`],
//! which can be applied to any number of [`VFile`]s. [`rename`] does both steps for
//! one file. Nothing here touches the disk.
//!
//! - a string starting with a dot (`.`) sets `extname`
//! - any other string sets `basename`
//! - a [`Spec`] sets or prefixes/suffixes the path properties it names
//! - a list performs every rename in it
//!
//! However many properties one move changes, the file's history only records
//! the final path.
//!
//! # Example
//! ```
//! use vfile_rename::{rename, Affix, Spec, VFile};
//!
//! let file = VFile::with_path("index.js").unwrap();
//! let file = rename(file, Spec::new().with("stem", Affix::suffix(".min"))).unwrap();
//! assert_eq!(Some("index.min.js"), file.path());
//! assert_eq!(vec!["index.js", "index.min.js"], file.history);
//! ```

mod batch;
pub use crate::batch::{Batch, Config, Verbosity};
mod core;
pub use crate::core::*;
pub mod error;
mod vfile;
pub use crate::vfile::{minpath, VFile, VFileCompatible, VFileOptions};
