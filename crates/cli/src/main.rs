//! tfdock: show docker containers and their endpoints from terraform state
//!
//! Usage:
//!   tfdock state.json                 # Read from a file
//!   terraform show --json | tfdock    # Read from stdin
//!
//! Output formats:
//!   --json       Machine-readable JSON
//!   --no-color   Tree report without ANSI colors
//!   (default)    Colored tree report

use clap::Parser;
use owo_colors::{OwoColorize, Style};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tfdock_core::{extract_inventory, render, StateDocument};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit codes
mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR_GENERAL: i32 = 1;
}

/// Configuration file support
mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tfdock_core::render::present::{DEFAULT_IMAGE_WIDTH, DEFAULT_SCHEME};

    /// User configuration from ~/.tfdock/config.toml
    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct Config {
        /// Default output settings
        pub output: OutputConfig,
        /// Tree report settings
        pub report: ReportConfig,
        /// Diagnostics settings
        pub logging: LoggingConfig,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    pub struct OutputConfig {
        /// Disable colored output by default
        pub no_color: bool,
        /// Use JSON output by default
        pub json: bool,
    }

    #[derive(Debug, Deserialize)]
    #[serde(default)]
    pub struct ReportConfig {
        /// Truncation width for image references
        pub image_width: usize,
        /// Scheme for endpoint URLs
        pub url_scheme: String,
    }

    impl Default for ReportConfig {
        fn default() -> Self {
            Self {
                image_width: DEFAULT_IMAGE_WIDTH,
                url_scheme: DEFAULT_SCHEME.to_string(),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    #[serde(default)]
    pub struct LoggingConfig {
        /// tracing filter directive, e.g. "warn" or "tfdock_core=debug"
        pub level: String,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: "warn".to_string(),
            }
        }
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".tfdock").join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load_config() -> Config {
        match config_path() {
            Some(path) => load_config_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from a file, falling back to defaults if it is missing or invalid
    pub fn load_config_from(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

}

#[derive(Parser)]
#[command(name = "tfdock")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  tfdock terraform_show.json              Read from a file, colored output
  terraform show --json | tfdock          Read from stdin
  terraform show --json | tfdock --json   Output JSON for scripting
  terraform show --json | tfdock --no-color")]
struct Cli {
    /// File containing `terraform show --json` output (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output JSON instead of the tree report
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Fatal errors, each reported once before exiting
#[derive(Debug, Error)]
enum CliError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in file '{}': {source}", .path.display())]
    InvalidJsonFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid JSON input: {0}")]
    InvalidJsonStdin(#[source] serde_json::Error),

    #[error(transparent)]
    Core(#[from] tfdock_core::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        exit_codes::ERROR_GENERAL
    }
}

/// Color configuration for diagnostics on stderr
struct Colors {
    error: Style,
    warning: Style,
}

impl Colors {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                error: Style::new().red().bold(),
                warning: Style::new().yellow(),
            }
        } else {
            Self {
                error: Style::new(),
                warning: Style::new(),
            }
        }
    }
}

fn main() {
    // Load configuration file
    let cfg = config::load_config();

    let mut cli = Cli::parse();

    // Apply config defaults (CLI flags override config)
    if !cli.no_color && cfg.output.no_color {
        cli.no_color = true;
    }
    if !cli.json && cfg.output.json {
        cli.json = true;
    }

    let colors = Colors::new(!cli.no_color);

    if let Err(e) = init_tracing(&cfg.logging) {
        print_warning(&colors, &e);
    }

    match run(&cli, &cfg) {
        Ok(output) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = out.write_all(output.as_bytes()).and_then(|_| out.flush()) {
                // Broken pipe and friends: nothing sensible left to report to
                debug!(error = %e, "failed to write report");
            }
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(e) => {
            print_error(&colors, &e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

/// Read the input, extract containers and render the requested format
fn run(cli: &Cli, cfg: &config::Config) -> Result<String, CliError> {
    let doc = read_document(cli.file.as_deref())?;
    let inventory = extract_inventory(&doc)?;
    info!(
        total = inventory.total(),
        running = inventory.running(),
        "extracted containers"
    );

    if cli.json {
        let mut json = render::render_json_string(&inventory, &cfg.report.url_scheme)
            .map_err(tfdock_core::Error::from)?;
        json.push('\n');
        return Ok(json);
    }

    let options = render::TreeOptions {
        image_width: cfg.report.image_width,
        url_scheme: cfg.report.url_scheme.clone(),
        ..render::TreeOptions::default()
    };
    let output = render::render_tree(&inventory, &options);
    if cli.no_color {
        Ok(render::strip_ansi(&output).into_owned())
    } else {
        Ok(output)
    }
}

/// Parse the state document from a file or stdin
fn read_document(file: Option<&Path>) -> Result<StateDocument, CliError> {
    match file {
        Some(path) => {
            debug!(path = %path.display(), "reading state file");
            let content = fs::read_to_string(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    CliError::FileNotFound(path.to_path_buf())
                } else {
                    CliError::ReadFailed {
                        path: path.display().to_string(),
                        source: e,
                    }
                }
            })?;
            StateDocument::from_json_str(&content).map_err(|e| CliError::InvalidJsonFile {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => {
            debug!("reading state from stdin");
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| CliError::ReadFailed {
                    path: "<stdin>".to_string(),
                    source: e,
                })?;
            StateDocument::from_json_str(&content).map_err(CliError::InvalidJsonStdin)
        }
    }
}

/// Initialize tracing, writing diagnostics to stderr
fn init_tracing(config: &config::LoggingConfig) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| format!("Invalid log filter '{}': {}", config.level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))?;

    debug!(filter = %config.level, "tracing initialized");
    Ok(())
}

/// Print an error message
fn print_error(colors: &Colors, message: &str) {
    eprintln!("{} {}", "error:".style(colors.error), message);
}

/// Print a warning message
fn print_warning(colors: &Colors, message: &str) {
    eprintln!("{} {}", "warning:".style(colors.warning), message);
}
