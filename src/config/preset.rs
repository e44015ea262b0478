//! Technology-domain presets
//!
//! Industry benchmark defaults for the percentage model, one per domain:
//! - `Telecom`, `Mobility & IoT`, `Cloud & SaaS`, `Security`, `Governance`
//! - `All`: blended default across domains
//!
//! # Examples
//!
//! ```
//! use broker_roi::config::{DomainPreset, DomainType};
//!
//! let telecom = DomainPreset::new(DomainType::Telecom);
//! assert_eq!(telecom.savings_pct, 35.0);
//!
//! // Lookup accepts display names and slugs, ignoring case
//! assert!(DomainPreset::get("cloud & saas").is_some());
//! assert!(DomainPreset::get("mobility-iot").is_some());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Domain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainType {
    /// Carrier, voice and network services
    Telecom,
    /// Mobile devices, plans and IoT connectivity
    MobilityIot,
    /// Cloud infrastructure and SaaS subscriptions
    CloudSaas,
    /// Security tooling and services
    Security,
    /// IT governance, audit and compliance
    Governance,
    /// Blended default across domains
    All,
}

impl DomainType {
    /// Every domain, in display order
    pub const ALL: [DomainType; 6] = [
        Self::Telecom,
        Self::MobilityIot,
        Self::CloudSaas,
        Self::Security,
        Self::Governance,
        Self::All,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Telecom => "Telecom",
            Self::MobilityIot => "Mobility & IoT",
            Self::CloudSaas => "Cloud & SaaS",
            Self::Security => "Security",
            Self::Governance => "Governance",
            Self::All => "All",
        }
    }

    /// Command-line friendly name
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Telecom => "telecom",
            Self::MobilityIot => "mobility-iot",
            Self::CloudSaas => "cloud-saas",
            Self::Security => "security",
            Self::Governance => "governance",
            Self::All => "all",
        }
    }

    /// Short description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Telecom => "Carrier contracts, voice and network services",
            Self::MobilityIot => "Mobile fleets, data plans and IoT connectivity",
            Self::CloudSaas => "Cloud infrastructure and SaaS subscriptions",
            Self::Security => "Security tooling and managed security services",
            Self::Governance => "IT governance, audit and compliance programs",
            Self::All => "Blended benchmark across all domains",
        }
    }
}

impl FromStr for DomainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == wanted || d.slug() == wanted)
            .ok_or_else(|| format!("Unknown domain: {}", s))
    }
}

/// Benchmark defaults for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPreset {
    /// Domain identifier
    pub domain_type: DomainType,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Typical broker savings (%)
    pub savings_pct: f64,
    /// Standard broker fee (%)
    pub fee_pct: f64,
    /// Average annual hours spent managing sourcing
    pub baseline_hours: f64,
}

impl DomainPreset {
    /// Preset for a domain
    pub fn new(domain_type: DomainType) -> Self {
        let (savings_pct, fee_pct, baseline_hours) = match domain_type {
            DomainType::Telecom => (35.0, 10.0, 400.0),
            DomainType::MobilityIot => (25.0, 10.0, 450.0),
            DomainType::CloudSaas => (30.0, 10.0, 500.0),
            DomainType::Security => (20.0, 10.0, 350.0),
            DomainType::Governance => (15.0, 10.0, 300.0),
            DomainType::All => (30.0, 10.0, 500.0),
        };
        Self {
            domain_type,
            name: domain_type.name().to_string(),
            description: domain_type.description().to_string(),
            savings_pct,
            fee_pct,
            baseline_hours,
        }
    }

    /// Look up a preset by display name or slug
    pub fn get(name: &str) -> Option<Self> {
        name.parse::<DomainType>().ok().map(Self::new)
    }

    /// All presets in display order
    pub fn all() -> Vec<Self> {
        DomainType::ALL.into_iter().map(Self::new).collect()
    }

    /// Display names of every preset
    pub fn names() -> Vec<String> {
        DomainType::ALL
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    }
}

impl Default for DomainPreset {
    fn default() -> Self {
        Self::new(DomainType::All)
    }
}
