//! # secret-santa
//!
//! Draws a gift exchange from a JSON participant list, writes one card per
//! participant and optionally sends each giver a message rendered from an HTML
//! template (`^` is the giver, `*` the receiver).
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments and check both input files exist
//! 2. Initialize logging
//! 3. Load configuration (defaults, environment, flags)
//! 4. Run the pipeline and map the outcome to an exit code

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use santa_runtime::exit_codes::{self, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use santa_runtime::{RunInputs, RunSummary, RuntimeConfig, SantaRuntime, Transport};
use santa_telemetry::{init_telemetry, TelemetryConfig};
use ss_02_assignment_engine::DrawMode;

/// Secret Santa: draw who gives to whom, honouring exclusions
#[derive(Parser, Debug)]
#[command(name = "secret-santa")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Participant list (JSON array of {"name", "not_allowed", "email"})
    list: PathBuf,

    /// Message template (HTML; ^ is the giver, * the receiver)
    message: PathBuf,

    /// Send each giver their message after the draw
    #[arg(short, long)]
    email: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long = "verbosity", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory for the assignment cards
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Prefix for every card file name
    #[arg(long)]
    prefix: Option<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Full attempts before giving up
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Allow a rejected candidate to be drawn again for the same giver
    #[arg(long)]
    with_replacement: bool,

    /// Delivery transport used with --email
    #[arg(long, value_enum)]
    transport: Option<Transport>,

    /// Pickup directory for the maildrop transport
    #[arg(long)]
    maildrop_dir: Option<PathBuf>,

    /// SMTP relay host for the smtp transport (login via SANTA_SMTP_USERNAME/PASSWORD)
    #[arg(long)]
    smtp_host: Option<String>,

    /// SMTP relay port
    #[arg(long)]
    smtp_port: Option<u16>,

    /// Sender address
    #[arg(long = "from")]
    from: Option<String>,
}

impl Args {
    fn check_inputs(&self) -> Result<RunInputs> {
        for (what, path) in [("participant list", &self.list), ("message template", &self.message)] {
            if !path.is_file() {
                anyhow::bail!("{} {} does not exist", what, path.display());
            }
        }
        Ok(RunInputs {
            list: self.list.clone(),
            message: self.message.clone(),
        })
    }

    fn apply(&self, mut config: RuntimeConfig) -> RuntimeConfig {
        if let Some(dir) = &self.out_dir {
            config.output.dir = dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.output.prefix = prefix.clone();
        }
        if let Some(seed) = self.seed {
            config.draw.seed = Some(seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.draw.max_attempts = max_attempts;
        }
        if self.with_replacement {
            config.draw.draw_mode = DrawMode::WithReplacement;
        }
        if self.email {
            config.delivery.enabled = true;
        }
        if let Some(transport) = self.transport {
            config.delivery.transport = transport;
        }
        if let Some(dir) = &self.maildrop_dir {
            config.delivery.maildrop_dir = dir.clone();
        }
        if let Some(host) = &self.smtp_host {
            config.delivery.smtp.host = Some(host.clone());
        }
        if let Some(port) = self.smtp_port {
            config.delivery.smtp.port = port;
        }
        if let Some(from) = &self.from {
            config.delivery.sender = from.clone();
        }
        config
    }
}

fn print_summary(summary: &RunSummary) {
    println!(
        "Assigned {} participants in {} attempt(s) ({} rejected draws).",
        summary.participants, summary.attempts, summary.rejected_draws
    );
    println!("Wrote {} card(s).", summary.artifacts.len());
    if summary.delivered > 0 {
        println!("Delivered {} message(s).", summary.delivered);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let inputs = match args.check_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let telemetry = TelemetryConfig::from_env().with_verbosity(args.verbose);
    let _guard = match init_telemetry(&telemetry).context("Failed to initialize logging") {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let config = args.apply(RuntimeConfig::from_env());
    let mut runtime = SantaRuntime::new(config, inputs);

    match runtime.run() {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            let code = exit_codes::for_run_error(&e);
            error!(error = %e, exit_code = code, "Run failed");
            eprintln!("error: {:#}", anyhow::Error::new(e));
            ExitCode::from(code)
        }
    }
}
