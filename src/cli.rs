//! Command-line interface implementation for apicrud.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for apicrud.
#[derive(Parser, Debug)]
#[command(author, version, about = "apicrud: API CRUD scaffolding generator for Laravel projects", long_about = None)]
pub struct Args {
    /// Name of the model to scaffold; prompted for interactively when omitted
    #[arg(value_name = "MODEL")]
    pub model: Option<String>,

    /// Project root containing app/, routes/ and database/
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
