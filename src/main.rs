use clap::Parser;
use error_stack::Result;
use vfile_rename::error::RenameError;
use vfile_rename::{Batch, Config, Renames, Verbosity};

/// Plan renames of virtual files
///
/// Prints the new path of every input. Nothing is renamed on disk.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Paths of the files to rename
    #[arg(required = true)]
    paths: Vec<String>,

    /// Rename instructions, applied in order
    ///
    /// A value starting with `{` or `[` is read as JSON (an object maps path
    /// properties to a string or to `{"prefix": .., "suffix": ..}`). Any other
    /// value is a new extname if it starts with `.`, or a new basename.
    #[arg(short, long = "rename", value_name = "RENAMES")]
    renames: Vec<String>,

    /// Number of threads to use
    #[arg(short = 'j', long, default_value_t = 4)]
    threads: usize,

    /// Only print the renamed paths
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print more information
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn parse_renames(&self) -> Result<Renames, RenameError> {
        let renames = self
            .renames
            .iter()
            .map(|arg| parse_rename_arg(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match renames.len() {
            0 => Renames::Nothing,
            1 => renames.into_iter().next().unwrap_or_default(),
            _ => Renames::Sequence(renames),
        })
    }
}

fn parse_rename_arg(arg: &str) -> Result<Renames, RenameError> {
    if arg.starts_with('{') || arg.starts_with('[') {
        Renames::from_json(arg)
    } else {
        Ok(Renames::Literal(arg.to_string()))
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    log::debug!("arguments: {:?}", cli);

    let renames = match cli.parse_renames() {
        Ok(renames) => renames,
        Err(e) => {
            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    };

    let config = Config {
        inputs: cli.paths.clone(),
        renames,
        num_threads: cli.threads,
        verbosity: cli.verbosity(),
    };

    match Batch::run(config) {
        Ok(files) => {
            for (input, file) in cli.paths.iter().zip(files) {
                println!("{} -> {}", input, file.path().unwrap_or_default());
            }
        }
        Err(e) => {
            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    }
}
