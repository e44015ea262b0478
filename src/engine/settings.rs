//! Immutable engine configuration
//!
//! Everything the calculations need beyond their explicit arguments lives
//! here: productivity constants, outsourcing constants and the category rate
//! table. An [`EngineSettings`] value is built once (defaults or resolved
//! config) and shared read-only by every calculation.

use serde::{Deserialize, Serialize};

use super::error::{ensure_non_negative, ensure_percent, ensure_rate, EngineError};

/// Benchmark savings rates for one category of IT spend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRates {
    /// Category label (e.g. "Cloud Services")
    pub name: String,
    /// Fraction of annual spend saved on licensing
    pub license_rate: f64,
    /// Fraction of annual spend saved on implementation
    pub implementation_rate: f64,
}

impl CategoryRates {
    /// Create a rate entry
    pub fn new(name: impl Into<String>, license_rate: f64, implementation_rate: f64) -> Self {
        Self {
            name: name.into(),
            license_rate,
            implementation_rate,
        }
    }
}

/// Fixed lookup from category label to its rate pair
///
/// Every label maps to exactly one pair. Lookups ignore ASCII case and
/// surrounding whitespace; anything else is an [`EngineError::UnknownCategory`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    entries: Vec<CategoryRates>,
}

impl CategoryTable {
    /// Build a table, rejecting duplicate labels and rates outside [0, 1]
    pub fn new(entries: Vec<CategoryRates>) -> Result<Self, EngineError> {
        for (idx, entry) in entries.iter().enumerate() {
            ensure_rate("license_rate", entry.license_rate)?;
            ensure_rate("implementation_rate", entry.implementation_rate)?;
            let key = normalize(&entry.name);
            if entries[..idx].iter().any(|e| normalize(&e.name) == key) {
                return Err(EngineError::DuplicateCategory(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Look up the rates for a category label
    pub fn get(&self, category: &str) -> Result<&CategoryRates, EngineError> {
        let key = normalize(category);
        self.entries
            .iter()
            .find(|e| normalize(&e.name) == key)
            .ok_or_else(|| EngineError::UnknownCategory {
                category: category.to_string(),
                available: self.names(),
            })
    }

    /// Category labels in table order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRates> {
        self.entries.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no categories
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            entries: vec![
                CategoryRates::new("Cloud Services", 0.40, 0.20),
                CategoryRates::new("Software Licensing", 0.30, 0.15),
                CategoryRates::new("Telecom", 0.35, 0.10),
                CategoryRates::new("Hardware", 0.15, 0.10),
                CategoryRates::new("Security", 0.20, 0.15),
                CategoryRates::new("Managed Services", 0.25, 0.20),
            ],
        }
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

/// Workforce assumptions behind the fixed productivity savings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductivityAssumptions {
    /// Productivity gain as a percentage
    pub gain_pct: f64,
    /// Fully loaded annual salary per employee
    pub salary_per_employee: f64,
    /// Headcount affected by the gain
    pub num_employees: u32,
}

impl ProductivityAssumptions {
    /// Annual savings from the productivity gain
    pub fn annual_savings(&self) -> f64 {
        (self.gain_pct / 100.0) * self.salary_per_employee * f64::from(self.num_employees)
    }

    /// Validate the assumption set
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_percent("productivity_gain_pct", self.gain_pct)?;
        ensure_non_negative("salary_per_employee", self.salary_per_employee)
    }
}

impl Default for ProductivityAssumptions {
    fn default() -> Self {
        Self {
            gain_pct: 15.0,
            salary_per_employee: 80_000.0,
            num_employees: 50,
        }
    }
}

/// Cost model for the outsourced vs in-house discounted comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutsourcingAssumptions {
    /// Broker fee as a percentage of annual spend
    pub broker_fee_pct: f64,
    /// In-house cost relative to the broker fee
    pub opportunity_cost_multiplier: f64,
}

impl OutsourcingAssumptions {
    /// Validate the assumption set
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_percent("broker_fee_pct", self.broker_fee_pct)?;
        ensure_non_negative(
            "opportunity_cost_multiplier",
            self.opportunity_cost_multiplier,
        )
    }
}

impl Default for OutsourcingAssumptions {
    fn default() -> Self {
        Self {
            broker_fee_pct: 10.0,
            opportunity_cost_multiplier: 1.5,
        }
    }
}

/// Complete, immutable engine configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineSettings {
    /// Productivity constants for category mode
    pub productivity: ProductivityAssumptions,
    /// Fee model for the outsourced/in-house comparison
    pub outsourcing: OutsourcingAssumptions,
    /// Category rate lookup
    pub categories: CategoryTable,
}

impl EngineSettings {
    /// Validate every component
    pub fn validate(&self) -> Result<(), EngineError> {
        self.productivity.validate()?;
        self.outsourcing.validate()
    }
}
