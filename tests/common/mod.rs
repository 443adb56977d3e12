//! Common utils for integration tests
//!
//!

use error_stack::Result;
use vfile_rename::{error::BatchError, *};

pub struct ItEnv {
    config: Config,
    test_description: String,
}

impl ItEnv {
    pub fn new(test_description: &str) -> Self {
        let mut config = Config::default();
        config.num_threads = 2;
        config.verbosity = Verbosity::Quiet;

        Self {
            test_description: test_description.to_string(),
            config,
        }
    }

    #[inline]
    pub fn execute<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        f(self)
    }

    #[inline]
    pub fn cfg(&mut self) -> &mut Config {
        &mut self.config
    }

    #[inline]
    pub fn run(&self) -> Result<Vec<VFile>, BatchError> {
        Batch::run(self.config.clone())
    }

    /// Run the batch and compare the final paths, in input order
    pub fn assert_paths(&self, expected: &[&str]) {
        let files = match self.run() {
            Ok(files) => files,
            Err(e) => panic!("batch failed in test `{}`: {:?}", self.test_description, e),
        };
        let actual = files
            .iter()
            .map(|f| f.path().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(
            expected,
            actual.as_slice(),
            "path comparison failed in test `{}`",
            self.test_description
        );
    }
}

/// Create a file with the given path
pub fn file(path: &str) -> VFile {
    VFile::with_path(path).unwrap()
}

macro_rules! testit {
    ($test_name:ident, $fnonce:expr) => {
        #[test]
        #[allow(non_snake_case)]
        fn $test_name() {
            let mut env = ItEnv::new(stringify!($test_name));
            env.execute($fnonce);
        }
    };
}

pub(crate) use testit;
