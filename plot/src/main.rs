mod args;
mod error;
mod logging;
mod plan;
mod runner;

use crate::args::PlotArgs;
use crate::logging::init_logging;
use crate::runner::PlotRunner;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = PlotArgs::parse();
    init_logging(args.quiet);

    info!(
        "Plotting wrk results from {} for '{}' and '{}'",
        args.results_dir.display(),
        args.bun_prefix,
        args.node_prefix
    );
    match PlotRunner::new(args).run() {
        Ok(written) => {
            info!("Finished, {} files written.", written.len());
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
