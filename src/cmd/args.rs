//! Assumption flags shared by the calculation commands

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader, PresetResolver, ResolvedConfig};

/// Command-line overrides, applied on top of the preset and config file
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AssumptionArgs {
    /// Domain preset (Telecom, Mobility & IoT, Cloud & SaaS, Security, Governance, All)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Annual IT spend
    #[arg(long, value_name = "AMOUNT")]
    pub spend: Option<f64>,

    /// Expected broker savings (%)
    #[arg(long, value_name = "PCT")]
    pub savings: Option<f64>,

    /// Broker fee (%)
    #[arg(long, value_name = "PCT")]
    pub fee: Option<f64>,

    /// Annual procurement hours
    #[arg(long)]
    pub hours: Option<f64>,

    /// Share of procurement hours the broker saves (%)
    #[arg(long, value_name = "PCT")]
    pub time_saved: Option<f64>,

    /// Staff cost per hour
    #[arg(long, value_name = "AMOUNT")]
    pub cost_per_hour: Option<f64>,

    /// Opportunity value per freed hour
    #[arg(long, value_name = "AMOUNT")]
    pub opportunity_value: Option<f64>,

    /// Forecast horizon in years
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Annual discount rate as a fraction (0.08 = 8%)
    #[arg(long, value_name = "RATE")]
    pub discount_rate: Option<f64>,
}

impl AssumptionArgs {
    /// Apply the flags that were given
    pub fn apply(&self, resolved: &mut ResolvedConfig) {
        let a = &mut resolved.assumptions;
        if let Some(v) = self.spend {
            a.annual_spend = v;
        }
        if let Some(v) = self.savings {
            a.savings_rate_pct = v;
        }
        if let Some(v) = self.fee {
            a.fee_rate_pct = v;
        }
        if let Some(v) = self.hours {
            a.baseline_hours = v;
        }
        if let Some(v) = self.time_saved {
            a.time_saved_pct = v;
        }
        if let Some(v) = self.cost_per_hour {
            a.cost_per_hour = v;
        }
        if let Some(v) = self.opportunity_value {
            a.opportunity_value_per_hour = v;
        }
        if let Some(v) = self.years {
            a.forecast_years = v;
        }
        if let Some(v) = self.discount_rate {
            a.discount_rate = v;
        }
    }

    /// Resolve preset, config file and flags, in that order
    ///
    /// `config_path` names an explicit file; otherwise `.broker-roi.toml` in
    /// `project_root` is used when present.
    pub fn resolve(&self, config_path: Option<&Path>, project_root: &Path) -> Result<ResolvedConfig> {
        let mut config: ConfigFile = match config_path {
            Some(path) => ConfigLoader::load_file(path)?,
            None => ConfigLoader::load(project_root)?,
        };
        if let Some(ref domain) = self.domain {
            config.domain = domain.clone();
        }

        let mut resolved = PresetResolver::resolve(&config)?;
        self.apply(&mut resolved);
        log::debug!("Effective assumptions: {:?}", resolved.assumptions);
        Ok(resolved)
    }
}
