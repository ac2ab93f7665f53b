use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::options::PasswordOptions;

pub const LOG_FILE_NAME: &str = "password-generator.log";

/// Default filter directives, used when `RUST_LOG` is not set
pub fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        "password_generator=debug,info"
    } else {
        "password_generator=info,warn"
    }
}

/// Location of the log file when none is given on the command line
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", "password-generator")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Opens the log file for appending, creating parent directories as needed
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Initialize structured logging to a file
///
/// The console belongs to the prompts, so log records go to `log_file` (or the default
/// location) instead of stderr. Returns the path actually used.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<PathBuf> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        verbose = verbose,
        "Logging initialized"
    );

    Ok(path)
}

/// Log a successful generation. The password itself is never logged.
pub fn log_password_generated(source: &str, options: &PasswordOptions) {
    tracing::info!(
        source = source,
        length = options.length,
        uppercase = options.include_uppercase,
        lowercase = options.include_lowercase,
        minimum_digits = options.minimum_digits,
        minimum_special = options.minimum_special_characters,
        avoid_ambiguous = options.avoid_ambiguous_characters,
        "Password generated"
    );
}

pub fn log_generation_failure(source: &str, error: &dyn std::fmt::Display) {
    tracing::error!(source = source, error = %error, "Generating password failed");
}

pub fn log_clipboard_result(success: bool, error: Option<&dyn std::fmt::Display>) {
    if success {
        tracing::info!("Password copied to clipboard");
    } else if let Some(error) = error {
        tracing::error!(error = %error, "Saving password to clipboard failed");
    } else {
        tracing::error!("Saving password to clipboard failed");
    }
}

pub fn log_version_unavailable() {
    tracing::error!("Unable to retrieve the application version");
}

pub fn log_prompt_transition(from: &str, to: Option<&str>) {
    tracing::debug!(from = from, to = to.unwrap_or("exit"), "Prompt transition");
}
