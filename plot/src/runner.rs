use crate::args::PlotArgs;
use crate::error::PlotError;
use crate::plan::chart_plan;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use wrk_bench_report::error::ReportError;
use wrk_bench_report::loader::load_series;
use wrk_bench_report::plotting::render::prepare_chart;
use wrk_bench_report::series::{to_json, Series};

pub struct PlotRunner {
    args: PlotArgs,
}

impl PlotRunner {
    pub fn new(args: PlotArgs) -> Self {
        Self { args }
    }

    /// Loads both series, renders every planned chart and serializes the
    /// JSON dump before writing anything. If a write fails, the files already
    /// written by this run are removed again.
    pub fn run(&self) -> Result<Vec<PathBuf>, PlotError> {
        let series = self.load()?;

        info!("Printing summary");
        series.iter().for_each(Series::print_summary);

        let jobs = chart_plan(
            &series,
            &self.args.output_dir,
            self.args.all_metrics,
            self.args.log_x_axis(),
            self.args.dark,
        );

        let render_start = Instant::now();
        let mut outputs = jobs
            .into_iter()
            .map(|job| Ok((job.output_path, prepare_chart(&series, &job.request)?)))
            .collect::<Result<Vec<_>, ReportError>>()?;
        info!(
            "Rendered {} charts in {:.2?}",
            outputs.len(),
            render_start.elapsed()
        );

        if let Some(path) = &self.args.dump_json {
            outputs.push((path.clone(), to_json(&series)?.into_bytes()));
        }

        std::fs::create_dir_all(&self.args.output_dir).map_err(|source| {
            ReportError::CannotWriteFile {
                path: self.args.output_dir.clone(),
                source,
            }
        })?;

        write_outputs(outputs)
    }

    /// Loads the series of both prefixes. Fails only if neither has a report.
    pub(crate) fn load(&self) -> Result<Vec<Series>, PlotError> {
        let series = self
            .args
            .prefixes()
            .into_iter()
            .map(|prefix| load_series(&self.args.results_dir, prefix))
            .collect::<Result<Vec<_>, _>>()?;

        if series.iter().all(Series::is_empty) {
            return Err(PlotError::NoResultsFound {
                results_dir: self.args.results_dir.clone(),
                expected: format!("{}_c1000.txt", self.args.bun_prefix),
            });
        }

        Ok(series)
    }
}

fn write_outputs(outputs: Vec<(PathBuf, Vec<u8>)>) -> Result<Vec<PathBuf>, PlotError> {
    let mut written: Vec<PathBuf> = Vec::with_capacity(outputs.len());
    for (path, bytes) in outputs {
        if let Err(source) = std::fs::write(&path, bytes) {
            for path in &written {
                if let Err(remove_error) = std::fs::remove_file(path) {
                    warn!("Cannot remove {}: {remove_error}", path.display());
                }
            }
            return Err(ReportError::CannotWriteFile { path, source }.into());
        }
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
