use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    route::Route,
};

const DEFAULT_CONFIG_PATH: &str = "config/jar_tui.toml";

/// Where the jar widget reads its transactions from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JarSource {
    /// `GET /ledger/total`
    #[default]
    Total,
    /// `GET /ledger`
    Ledger,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub log_level: String,
    pub log_file: String,
    pub jar_source: JarSource,
    /// First view to show, as a client route (e.g. `/ledger-form?id=3`).
    pub open: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            log_file: "jar_tui.log".to_string(),
            jar_source: JarSource::Total,
            open: "/".to_string(),
        }
    }
}

impl AppConfig {
    pub fn start_route(&self) -> Result<Route> {
        self.open
            .parse()
            .map_err(|_| AppError::Route(self.open.clone()))
    }
}

#[derive(Debug, Parser)]
#[command(name = "jar_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override backend base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
    /// Override log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Override the jar endpoint.
    #[arg(long, value_enum)]
    jar_source: Option<JarSource>,
    /// Route to open first: /, /ledger, /jar, /stats, /ledger-form[?id=N].
    #[arg(long)]
    open: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("JAR_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(jar_source) = args.jar_source {
        settings.jar_source = jar_source;
    }
    if let Some(open) = args.open {
        settings.open = open;
    }

    Ok(settings)
}
