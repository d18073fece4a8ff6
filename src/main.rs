use anyhow::Context;
use chrome_sim::config;
use chrome_sim::tabs::TabKind;
use chrome_sim::tui;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "chrome-sim")]
#[command(about = "Browser chrome simulator", long_about = "Browser chrome simulator\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Draw with ASCII characters instead of unicode box drawing
    #[arg(long)]
    ascii: bool,

    /// Tabs to open at startup, e.g. google,chat,blank
    #[arg(long, value_delimiter = ',')]
    tabs: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    let seed: Vec<&str> = cfg.seed_tabs.iter().map(TabKind::name).collect();

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("time_format: {}", cfg.time_format);
    println!("seed_tabs: {}", seed.join(","));
    println!("tick_rate_ms: {}", cfg.tick_rate_ms);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("selection_fg: {:?}", cfg.display.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.display.unfocused_selection_fg(),
        if cfg.display.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("error_fg: {:?}", cfg.display.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Apply display and startup overrides given on the command line
fn apply_cli_overrides(cli: &Cli, config: &mut config::Config) {
    if cli.ascii {
        config.display.set_use_unicode(false);
    }
    let tabs: Vec<TabKind> = cli
        .tabs
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(TabKind::from)
        .collect();
    if !tabs.is_empty() {
        config.seed_tabs = tabs;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    apply_cli_overrides(&cli, &mut config);

    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return Ok(());
    }

    tracing::info!("Starting with {} seed tabs", config.seed_tabs.len());
    tui::run(config).await.context("terminal session failed")?;
    Ok(())
}
