//! Renaming many files with the same instructions
//!
//! The instructions are compiled once into a [`Move`], then applied to one
//! file per input on a thread pool. A move never shares state between files,
//! so workers only need a reference to it.

use crate::core::{convert, Move};
use crate::vfile::{VFile, VFileError};
use error_stack::{Report, Result};
use std::sync::mpsc;
use std::sync::Arc;
use termcolor::Color;
use threadpool::{Builder, ThreadPool};

mod config;
pub use config::*;
mod error;
pub use error::BatchError;
mod progress;
use progress::Progress;
mod verbs;

/// The runtime state when renaming a batch of files
#[derive(Debug)]
pub struct Batch {
    /// The Config
    config: Config,
    /// The compiled instructions, shared by the workers
    compiled: Arc<Move>,
    /// The Progress reporter
    progress: Progress,
    /// The ThreadPool
    threadpool: ThreadPool,
    /// The Sender for workers to send results back
    send: mpsc::Sender<TaskResult>,
    /// The Receiver for the main thread to receive results
    recv: mpsc::Receiver<TaskResult>,
}

impl Batch {
    /// Rename every input with the renames in the config
    ///
    /// Returns the renamed files in the same order as the inputs. If any input
    /// fails, the error for the first failure received is returned.
    pub fn run(config: Config) -> Result<Vec<VFile>, BatchError> {
        log::info!("creating batch");
        log::debug!("using config: {:?}", config);

        if config.num_threads == 0 {
            return Err(Report::new(BatchError).attach_printable("number of threads must be positive"));
        }

        let compiled = convert(&config.renames).map_err(|e| {
            e.change_context(BatchError)
                .attach_printable("cannot compile renames")
        })?;

        let progress = Progress::new(config.verbosity.clone());
        let threadpool = Builder::new().num_threads(config.num_threads).build();
        let (send, recv) = mpsc::channel();

        let runtime = Self {
            config,
            compiled: Arc::new(compiled),
            progress,
            threadpool,
            send,
            recv,
        };

        runtime.run_internal()
    }

    fn run_internal(mut self) -> Result<Vec<VFile>, BatchError> {
        let _ = self.progress.print_status(
            verbs::USING,
            &format!("{} thread(s)", self.config.num_threads),
            Color::Yellow,
            true,
        );
        let _ = self.progress.print_status(
            verbs::USING,
            &format!("{:?}", self.compiled),
            Color::Yellow,
            true,
        );

        let inputs = std::mem::take(&mut self.config.inputs);
        let mut files: Vec<Option<VFile>> = vec![None; inputs.len()];
        for (index, input) in inputs.into_iter().enumerate() {
            self.execute_file(index, input);
        }

        while !self.progress.is_done() {
            let TaskResult {
                index,
                input,
                result,
            } = match self.recv.recv() {
                Ok(data) => data,
                Err(_) => {
                    // workers are disconnected unexpectedly
                    return Err(Report::new(BatchError)
                        .attach_printable("workers are disconnected unexpectedly."));
                }
            };

            let file = result.map_err(|e| {
                let _ = self
                    .progress
                    .print_status(verbs::FAILED, &input, Color::Red, false);
                e.change_context(BatchError)
                    .attach_printable(format!("cannot rename {input}"))
            })?;
            log::info!("file {input} done");
            let _ = self.progress.print_status(
                verbs::RENAMED,
                &format!("{input} -> {}", file.path().unwrap_or_default()),
                Color::Green,
                false,
            );
            files[index] = Some(file);
            let _ = self.progress.add_done(1);
        }

        let _ = self.progress.print_status(
            verbs::DONE,
            &format!("{} file(s)", self.progress.done_count),
            Color::Green,
            false,
        );

        Ok(files.into_iter().flatten().collect())
    }

    fn execute_file(&mut self, index: usize, input: String) {
        self.progress.add_total(1);
        let _ = self
            .progress
            .print_status(verbs::RENAMING, &input, Color::Green, true);
        let send = self.send.clone();
        let compiled = Arc::clone(&self.compiled);
        log::info!("renaming file: {input}");
        self.threadpool.execute(move || {
            let result = rename_path(&compiled, &input);
            // the receiver is gone if the batch already failed
            let _ = send.send(TaskResult {
                index,
                input,
                result,
            });
        });
    }
}

impl Drop for Batch {
    fn drop(&mut self) {
        log::info!("cleaning up batch");
        self.threadpool.join();
        log::info!("batch destroyed");
    }
}

fn rename_path(compiled: &Move, input: &str) -> Result<VFile, VFileError> {
    let mut file = VFile::with_path(input)?;
    compiled.apply(&mut file)?;
    Ok(file)
}

struct TaskResult {
    index: usize,
    input: String,
    result: Result<VFile, VFileError>,
}
