//! Configuration file data structures

use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".broker-roi.toml";

/// broker-roi configuration file structure
///
/// Every section is optional; anything left out falls back to the domain
/// preset and the global defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Domain preset to start from
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Default spend category for the category model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Spend, savings and fee overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<BrokerSettings>,

    /// Procurement time overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeSettings>,

    /// Horizon and discount rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<ForecastSettings>,

    /// Category-model productivity assumptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub productivity: Option<ProductivitySettings>,

    /// Category-model outsourcing cost assumptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outsourcing: Option<OutsourcingSettings>,

    /// Sensitivity grid layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivitySettings>,

    /// Replacement category rate table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryEntry>,
}

fn default_domain() -> String {
    "All".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            category: None,
            broker: None,
            time: None,
            forecast: None,
            productivity: None,
            outsourcing: None,
            sensitivity: None,
            categories: Vec::new(),
        }
    }
}

/// `[broker]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BrokerSettings {
    /// Annual IT spend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_spend: Option<f64>,

    /// Expected broker savings (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_pct: Option<f64>,

    /// Broker fee (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_pct: Option<f64>,
}

/// `[time]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimeSettings {
    /// Annual procurement hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_hours: Option<f64>,

    /// Share of hours the broker saves (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_saved_pct: Option<f64>,

    /// Staff cost per hour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_hour: Option<f64>,

    /// Opportunity value per freed hour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_value_per_hour: Option<f64>,
}

/// `[forecast]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ForecastSettings {
    /// Horizon in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<u32>,

    /// Annual discount rate as a fraction (0.08 = 8%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
}

/// `[productivity]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProductivitySettings {
    /// Productivity gain (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_pct: Option<f64>,

    /// Annual salary per employee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_per_employee: Option<f64>,

    /// Head count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<u32>,
}

/// `[outsourcing]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutsourcingSettings {
    /// Broker fee as a share of spend (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_fee_pct: Option<f64>,

    /// In-house cost as a multiple of the broker fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_cost_multiplier: Option<f64>,
}

/// `[sensitivity]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SensitivitySettings {
    /// Sweep the neighbourhood of the chosen rates instead of fixed ranges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub around: Option<bool>,

    /// Inclusive savings range `[start, end]` (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_range: Option<[f64; 2]>,

    /// Inclusive fee range `[start, end]` (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_range: Option<[f64; 2]>,

    /// Savings step (percentage points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,

    /// Fee step (percentage points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_step: Option<f64>,
}

/// One `[[categories]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CategoryEntry {
    /// Category label
    pub name: String,
    /// Licensing savings rate as a fraction of spend
    pub license_rate: f64,
    /// Implementation savings rate as a fraction of spend
    pub implementation_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_all_domain() {
        let config: ConfigFile = toml_edit::de::from_str("").unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.domain, "All");
    }

    #[test]
    fn test_kebab_case_sections_parse() {
        let toml = r#"
domain = "Telecom"
category = "Cloud Services"

[broker]
annual-spend = 250000.0
fee-pct = 12.0

[time]
cost-per-hour = 120.0

[forecast]
years = 5
discount-rate = 0.1

[sensitivity]
savings-range = [5.0, 25.0]
step = 5.0

[[categories]]
name = "Cloud Services"
license-rate = 0.4
implementation-rate = 0.2
"#;
        let config: ConfigFile = toml_edit::de::from_str(toml).unwrap();
        assert_eq!(config.domain, "Telecom");
        assert_eq!(config.category.as_deref(), Some("Cloud Services"));

        let broker = config.broker.unwrap();
        assert_eq!(broker.annual_spend, Some(250_000.0));
        assert_eq!(broker.savings_pct, None);
        assert_eq!(broker.fee_pct, Some(12.0));

        assert_eq!(config.time.unwrap().cost_per_hour, Some(120.0));
        assert_eq!(config.forecast.unwrap().years, Some(5));
        assert_eq!(
            config.sensitivity.unwrap().savings_range,
            Some([5.0, 25.0])
        );
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].license_rate, 0.4);
    }

    #[test]
    fn test_unset_sections_are_not_serialized() {
        let text = toml_edit::ser::to_string_pretty(&ConfigFile::default()).unwrap();
        assert!(text.contains("domain"));
        assert!(!text.contains("[broker]"));
        assert!(!text.contains("categories"));
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let config = ConfigFile {
            domain: "Security".to_string(),
            broker: Some(BrokerSettings {
                annual_spend: Some(500_000.0),
                savings_pct: Some(20.0),
                fee_pct: Some(10.0),
            }),
            forecast: Some(ForecastSettings {
                years: Some(4),
                discount_rate: None,
            }),
            ..ConfigFile::default()
        };
        let text = toml_edit::ser::to_string_pretty(&config).unwrap();
        assert!(text.contains("annual-spend"));
        let parsed: ConfigFile = toml_edit::de::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
