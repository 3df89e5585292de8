//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref())?;
        let (registry, site_nav) = config.build()?;

        output.info(&format!("Site: {}", config.site.title));
        output.info(&format!("Sections: {}", registry.len()));
        output.info(&format!("Nav entries: {}", site_nav.nav.len()));
        output.info(&format!("Sidebars: {}", site_nav.sidebar.len()));

        if site_nav.sidebar.is_empty() {
            output.warning("No sidebars declared; pages will render without one");
        }

        output.success("Configuration is valid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_check_valid_config_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("docnav.toml");
        fs::write(
            &config_path,
            "[[sections]]\nkey = \"how_to\"\npath = \"/how_to\"\n",
        )
        .unwrap();

        let args = CheckArgs {
            config: Some(config_path),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_check_dangling_reference_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("docnav.toml");
        fs::write(&config_path, "[[nav]]\ntext = \"IaC\"\nsection = \"iac\"\n").unwrap();

        let args = CheckArgs {
            config: Some(config_path),
        };

        let result = args.execute();

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
