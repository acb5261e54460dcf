use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Parser};
use rectpack_core::{RectPackError, RunConfig, run};
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "rectpack",
    about = "Pack random rectangles and draw their outlines into a PNG",
    version,
    author
)]
struct Cli {
    /// RNG seed (defaults to one derived from the current time)
    #[arg(long, help_heading = "Generation")]
    seed: Option<u64>,
    /// Skyline heuristic: bl|bf
    #[arg(long, default_value = "bl", help_heading = "Packing")]
    heuristic: String,
    /// Placement order: height_desc|area_desc|max_side_desc|none
    #[arg(long, default_value = "height_desc", help_heading = "Packing")]
    sort_order: String,
    /// Outline stamp: thick|thin
    #[arg(long, default_value = "thick", help_heading = "Output")]
    outline: String,
    /// Output PNG path
    #[arg(short, long, default_value = rectpack_core::DEFAULT_OUTPUT, help_heading = "Output")]
    output: PathBuf,
    /// Print the effective configuration and exit
    #[arg(long, default_value_t = false, help_heading = "Output")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Output")]
    print_config_format: String,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);

    let cfg = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("{err:#}");
            return ExitCode::from(1);
        }
    };

    match run_cli(&cli, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if is_write_failure(&err) {
                println!("failed to write image output to {}", cfg.output.display());
            }
            error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<RunConfig> {
    Ok(RunConfig::builder()
        .heuristic(parse_choice("skyline heuristic", &cli.heuristic)?)
        .sort_order(parse_choice("sort order", &cli.sort_order)?)
        .outline(parse_choice("outline style", &cli.outline)?)
        .seed(cli.seed)
        .output(cli.output.clone())
        .build())
}

fn parse_choice<T: FromStr<Err = ()>>(what: &str, s: &str) -> anyhow::Result<T> {
    s.parse()
        .map_err(|()| anyhow::anyhow!("unknown {what}: {s}"))
}

fn run_cli(cli: &Cli, cfg: &RunConfig) -> anyhow::Result<()> {
    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(cfg)?),
        }
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    run(cfg, &mut stdout).with_context(|| format!("pack into {}", cfg.output.display()))?;
    Ok(())
}

fn is_write_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<RectPackError>()
        .is_some_and(RectPackError::is_write_failure)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
