use crate::core::Renames;

/// Config for renaming many files at once
///
/// # Example
/// ```
/// use vfile_rename::{Batch, Config, Verbosity};
///
/// let mut cfg = Config::default();
/// cfg.inputs = vec!["src/index.js".to_string(), "lib/util.js".to_string()];
/// cfg.renames = ".ts".into();
/// cfg.verbosity = Verbosity::Quiet;
/// let files = Batch::run(cfg).unwrap();
/// assert_eq!(Some("lib/util.ts"), files[1].path());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Paths of the files to rename
    pub inputs: Vec<String>,
    /// The instructions, compiled once and applied to every input
    pub renames: Renames,
    /// The number of threads to use
    pub num_threads: usize,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - No inputs
    /// - No renames
    /// - Using 4 threads
    /// - Regular verbosity
    fn default() -> Self {
        Self {
            inputs: vec![],
            renames: Renames::Nothing,
            num_threads: 4,
            verbosity: Verbosity::Normal,
        }
    }
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}
