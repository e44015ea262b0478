//! Init command implementation
//!
//! Handles the `broker-roi init` command which writes a `.broker-roi.toml`
//! seeded from one of the domain presets.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, DomainPreset};
use crate::error::RoiError;
use crate::fmt::{icon, CHECKMARK, INFO, SPARKLES, WARNING};
use crate::report::ReportFormatter;

/// Outcome of [`init_in`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A new config file was written
    Created,
    /// A config file was already present and left untouched
    AlreadyExists,
}

/// Write a config for `domain` into `project_root`
///
/// An existing file is never overwritten unless `force` is set.
pub fn init_in(project_root: &Path, domain: &str, force: bool) -> Result<InitOutcome> {
    let preset = DomainPreset::get(domain).ok_or_else(|| RoiError::InvalidDomain {
        name: domain.to_string(),
        available: DomainPreset::names(),
    })?;

    if config::ConfigLoader::exists(project_root) && !force {
        return Ok(InitOutcome::AlreadyExists);
    }

    let config = config::PresetResolver::from_preset(&preset);
    config::ConfigLoader::save(&config, project_root)?;
    log::info!(
        "Wrote {} for '{}'",
        config::CONFIG_FILE_NAME,
        preset.name
    );
    Ok(InitOutcome::Created)
}

/// Initialize broker-roi configuration from a domain preset
///
/// # Examples
///
/// ```no_run
/// use broker_roi::cmd::init::cmd_init;
///
/// // Seed the config with the Telecom benchmarks
/// cmd_init("Telecom", false, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(domain: &str, list: bool, force: bool) -> Result<()> {
    if list {
        println!("{}  {}", icon(INFO), style("Domain presets").bold());
        print!("{}", ReportFormatter::presets(&DomainPreset::all())?);
        return Ok(());
    }

    let project_root = env::current_dir()?;
    match init_in(&project_root, domain, force)? {
        InitOutcome::AlreadyExists => {
            println!(
                "{} Config file already exists: {}",
                icon(WARNING),
                style(config::CONFIG_FILE_NAME).cyan()
            );
            println!("   Pass --force to overwrite it, or edit it manually.");
        }
        InitOutcome::Created => {
            // init_in has validated the name
            let preset = DomainPreset::get(domain).unwrap_or_default();
            println!(
                "{} Selected preset: {}",
                icon(SPARKLES),
                style(&preset.name).bold().cyan()
            );
            println!("   {}", style(&preset.description).dim());
            println!(
                "   savings {}%, fee {}%, {} hours/year",
                preset.savings_pct, preset.fee_pct, preset.baseline_hours
            );
            println!(
                "\n{} Created {}",
                icon(CHECKMARK),
                style(config::CONFIG_FILE_NAME).cyan()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, PresetResolver};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_preset_config() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            init_in(temp.path(), "security", false).unwrap(),
            InitOutcome::Created
        );

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.domain, "Security");
        let resolved = PresetResolver::resolve(&config).unwrap();
        assert_eq!(resolved.assumptions.baseline_hours, 350.0);
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".broker-roi.toml"), "domain = \"Telecom\"\n").unwrap();

        assert_eq!(
            init_in(temp.path(), "Governance", false).unwrap(),
            InitOutcome::AlreadyExists
        );
        assert_eq!(ConfigLoader::load(temp.path()).unwrap().domain, "Telecom");

        assert_eq!(
            init_in(temp.path(), "Governance", true).unwrap(),
            InitOutcome::Created
        );
        assert_eq!(ConfigLoader::load(temp.path()).unwrap().domain, "Governance");
    }

    #[test]
    fn test_init_rejects_unknown_domain() {
        let temp = TempDir::new().unwrap();
        let err = init_in(temp.path(), "Mainframes", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RoiError>(),
            Some(RoiError::InvalidDomain { .. })
        ));
        assert!(!ConfigLoader::exists(temp.path()));
    }
}
