use anyhow::{Context, Result};
use barline::click::spawn_click_reader;
use barline::config::AppConfig;
use barline::control::spawn_signal_listener;
use barline::{build_status_line, protocol_header, MainLoop, ProtocolWriter};
use clap::Parser;
use log::{error, info, warn};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// barline - a block-based status line for i3bar and swaybar
#[derive(Parser, Debug, Clone)]
#[command(name = "barline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting; logs go to stderr, stdout is the protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load_effective(cli.config.as_deref())?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    info!("Starting barline v{}", env!("CARGO_PKG_VERSION"));

    let controls = spawn_signal_listener(config.stop_signal, config.cont_signal)?;

    if config.click_events {
        spawn_click_reader(BufReader::new(io::stdin()))?;
    }

    let status_line = build_status_line(&config)?;
    if status_line.is_empty() {
        warn!("No blocks configured");
    }

    let writer = ProtocolWriter::new(io::stdout().lock());
    let mut main_loop = MainLoop::new(
        status_line,
        writer,
        protocol_header(&config),
        config.tick(),
        controls,
    );
    main_loop.run().context("Status line output failed")
}
