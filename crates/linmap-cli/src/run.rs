//! `linmap run`: resolve configuration, run the demo, write outputs.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use linmap::config::{load_config, DemoConfig};
use linmap::demo::{self, DemoOutput};
use linmap::export::write_csv_file;
use linmap::report::write_report;

/// Configuration plus output locations for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub demo: DemoConfig,
    pub svg: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

impl RunConfig {
    /// Load the JSON config (or defaults) and apply command-line overrides.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut demo = match matches.get_one::<PathBuf>("config") {
            Some(path) => {
                log::info!("[linmap] Using config: {:?}", path);
                load_config(path)?
            }
            None => {
                let config = DemoConfig::default();
                eprintln!("[linmap] No config file provided; using defaults.");
                eprintln!(
                    "[linmap] Default config:\n{}",
                    serde_json::to_string_pretty(&config).unwrap_or_default()
                );
                config
            }
        };

        if let Some(seed) = matches.get_one::<u64>("seed") {
            demo.seed = Some(*seed);
        }
        if let Some(steps) = matches.get_one::<usize>("steps") {
            demo.total_steps = *steps;
        }
        if matches.get_flag("axes") {
            demo.draw_axes = true;
        }
        if matches.get_flag("trajectories") {
            demo.draw_trajectories = true;
        }
        demo.validate()?;

        let report = if matches.get_flag("no_report") {
            None
        } else {
            matches.get_one::<PathBuf>("report").cloned()
        };

        Ok(Self {
            demo,
            svg: matches.get_one::<PathBuf>("svg").cloned(),
            report,
            csv: matches.get_one::<PathBuf>("csv").cloned(),
        })
    }
}

/// Run the demo and write every requested output.
///
/// Nothing is written unless the whole run succeeds.
pub fn execute(params: &RunConfig) -> Result<DemoOutput> {
    let output = demo::run(&params.demo)?;

    if let Some(path) = &params.svg {
        write_svg(path, &params.demo, &output)?;
        log::info!("[linmap] Wrote SVG to {}", path.display());
    }
    if let Some(path) = &params.report {
        write_report(path, &params.demo, &output)?;
        log::info!("[linmap] Wrote report to {}", path.display());
    }
    if let Some(path) = &params.csv {
        write_csv_file(&output.run, path)?;
        log::info!("[linmap] Wrote CSV to {}", path.display());
    }
    Ok(output)
}

pub fn write_svg(path: &Path, config: &DemoConfig, output: &DemoOutput) -> Result<()> {
    let svg = output.to_svg(config).into_svg();
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write SVG: {}", path.display()))
}
