use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Flattens a categorical decision tree into independent strategy rules.", long_about = None)]
pub struct Cli {
    /// Path to the input tree file
    #[clap(long, default_value = "tree_to_convert.txt")]
    pub input_path: PathBuf,

    /// Path to the output strategies file
    #[clap(long, default_value = "strategies.txt")]
    pub output_path: PathBuf,

    /// Root node ID (defaults to 0)
    #[clap(long, default_value_t = 0)]
    pub root_id: usize,

    /// Suppress verbose output, only printing 'Done.' on success or errors.
    #[clap(short, long)]
    pub quiet: bool,
}
