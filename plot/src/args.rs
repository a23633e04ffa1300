use clap::Parser;
use std::path::PathBuf;

pub mod defaults {
    pub const DEFAULT_RESULTS_DIR: &str = "results";
    pub const DEFAULT_BUN_PREFIX: &str = "bun";
    pub const DEFAULT_NODE_PREFIX: &str = "node";
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
}

use defaults::*;

/// Plot wrk --latency results of two servers against the connection count
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct PlotArgs {
    /// Directory with wrk outputs named <prefix>_c<connections>.txt
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Filename prefix of the first series
    #[arg(long, default_value = DEFAULT_BUN_PREFIX)]
    pub bun_prefix: String,

    /// Filename prefix of the second series
    #[arg(long, default_value = DEFAULT_NODE_PREFIX)]
    pub node_prefix: String,

    /// Disable log scale for x axis
    #[arg(long, default_value_t = false)]
    pub no_xlog: bool,

    /// Directory where charts are written
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Also chart average and p50 latency
    #[arg(long, default_value_t = false)]
    pub all_metrics: bool,

    /// Render charts with a dark background
    #[arg(long, default_value_t = false)]
    pub dark: bool,

    /// Write the parsed series as JSON to this file
    #[arg(long)]
    pub dump_json: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl PlotArgs {
    pub fn log_x_axis(&self) -> bool {
        !self.no_xlog
    }

    pub fn prefixes(&self) -> [&str; 2] {
        [self.bun_prefix.as_str(), self.node_prefix.as_str()]
    }
}
