use clap::{Parser, Subcommand};
use fitrep_core::config::OutputFormat;
use fitrep_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitrep")]
#[command(about = "Workout sensor report calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a report for a single sensor record
    Report {
        /// Activity code (RUN, WLK, SWM)
        code: String,

        /// Positional numeric parameters for the activity
        #[arg(num_args = 1.., required = true, allow_negative_numbers = true)]
        params: Vec<f64>,

        /// Emit the report as JSON instead of the text template
        #[arg(long)]
        json: bool,
    },

    /// Process the configured packet batch (default)
    Batch {
        /// Emit reports as JSON instead of the text template
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fitrep_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Report { code, params, json }) => {
            cmd_report(&config, &code, &params, json)
        }
        Some(Commands::Batch { json }) => cmd_batch(&config, json),
        None => {
            // Default to the "batch" command
            cmd_batch(&config, false)
        }
    }
}

fn cmd_report(config: &Config, code: &str, params: &[f64], json_flag: bool) -> Result<()> {
    let report = build_report(code, params)?;
    print_report(&report, use_json(config, json_flag))
}

fn cmd_batch(config: &Config, json_flag: bool) -> Result<()> {
    // A non-empty [batch] config section replaces the built-in demo batch
    let packets: Vec<SensorPacket> = if config.batch.packets.is_empty() {
        demo_packets().to_vec()
    } else {
        config.batch.packets.clone()
    };

    let json = use_json(config, json_flag);
    let mut failures = 0usize;

    // Records are independent: a malformed one is reported and skipped
    for packet in &packets {
        match build_report(&packet.code, &packet.params) {
            Ok(report) => print_report(&report, json)?,
            Err(e) => {
                failures += 1;
                eprintln!("Skipping record {}: {}", packet.code, e);
            }
        }
    }

    tracing::debug!(
        "batch finished: {} ok, {} failed",
        packets.len() - failures,
        failures
    );

    if failures == packets.len() && !packets.is_empty() {
        return Err(Error::Other(format!(
            "all {} records in the batch failed",
            failures
        )));
    }

    Ok(())
}

fn use_json(config: &Config, json_flag: bool) -> bool {
    json_flag || config.output.format == OutputFormat::Json
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
