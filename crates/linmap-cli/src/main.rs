use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use linmap::config::DemoConfig;
use linmap_cli::run::{execute, RunConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINMAP_LOG", "error,linmap=info"))
        .init();

    let matches = Command::new("linmap")
        .version(clap::crate_version!())
        .about("Iterate a scale + rotation + translation map over a square and a point set")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the iteration and write the drawing")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON configuration file. Defaults are used when omitted.")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for the random points. Overrides the seed in the configuration file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("steps")
                        .long("steps")
                        .help("Number of frames, the starting one included. Overrides total_steps.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("svg")
                        .short('o')
                        .long("svg")
                        .help("Path the SVG drawing will be written to.")
                        .default_value("linmap.svg")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .help("Path the HTML report will be written to.")
                        .default_value("linmap_report.html")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_report")
                        .long("no-report")
                        .help("Disable HTML report generation.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .help("Also write every frame vertex and point position as CSV.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("axes")
                        .long("axes")
                        .help("Draw the coordinate axes.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("trajectories")
                        .long("trajectories")
                        .help("Draw the path each point took.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("template").about("Print the default configuration as JSON"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => handle_run(run_matches),
        Some(("template", _)) => {
            println!("{}", serde_json::to_string_pretty(&DemoConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let params = match RunConfig::from_arguments(matches) {
        Ok(params) => params,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1)
        }
    };

    match execute(&params) {
        Ok(output) => {
            eprintln!(
                "[linmap] Completed {} frames with {} points.",
                output.run.frames().len(),
                output.run.trajectories().len()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Run failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
