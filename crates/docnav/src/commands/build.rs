//! `docnav build` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output file for the navigation JSON (overrides config).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref())?;
        tracing::info!(
            config = ?config.config_path,
            "Loaded configuration"
        );

        let (registry, site_nav) = config.build()?;
        tracing::info!(
            sections = registry.len(),
            nav_entries = site_nav.nav.len(),
            "Assembled navigation"
        );

        if site_nav.nav.is_empty() {
            output.warning("Configuration declares no nav entries");
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(&site_nav)?
        } else {
            serde_json::to_string(&site_nav)?
        };

        let out_file = self.out.unwrap_or_else(|| config.out_file());
        if let Some(parent) = out_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_file, json)?;

        output.info(&format!("Site: {}", config.site.title));
        output.success(&format!(
            "Navigation written to {} ({} sections, {} nav entries, {} sidebars)",
            out_file.display(),
            registry.len(),
            site_nav.nav.len(),
            site_nav.sidebar.len()
        ));
        Ok(())
    }
}
