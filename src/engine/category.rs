//! Category-rate benefit model and the outsourced vs in-house comparison

use serde::{Deserialize, Serialize};

use super::discount::{compute_discounted_scenario, DiscountedMetrics};
use super::error::{ensure_non_negative, EngineError};
use super::settings::EngineSettings;

/// Annual benefit for a category of spend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBenefit {
    /// Category label as stored in the table
    pub category: String,
    /// Annual spend the rates were applied to
    pub annual_spend: f64,
    /// Licensing savings
    pub license_savings: f64,
    /// Implementation savings
    pub implementation_savings: f64,
    /// Productivity savings (independent of spend)
    pub productivity_savings: f64,
    /// Sum of the three savings components
    pub annual_benefit: f64,
}

/// Look up the category rates and compute the annual benefit
pub fn compute_category_benefit(
    annual_spend: f64,
    category: &str,
    settings: &EngineSettings,
) -> Result<CategoryBenefit, EngineError> {
    ensure_non_negative("annual_spend", annual_spend)?;
    let rates = settings.categories.get(category)?;
    settings.productivity.validate()?;

    let license_savings = annual_spend * rates.license_rate;
    let implementation_savings = annual_spend * rates.implementation_rate;
    let productivity_savings = settings.productivity.annual_savings();

    Ok(CategoryBenefit {
        category: rates.name.clone(),
        annual_spend,
        license_savings,
        implementation_savings,
        productivity_savings,
        annual_benefit: license_savings + implementation_savings + productivity_savings,
    })
}

/// Outsourced and in-house discounted metrics for the same benefit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedComparison {
    /// Benefit both scenarios are measured against
    pub benefit: CategoryBenefit,
    /// Discount rate applied
    pub discount_rate: f64,
    /// Horizon in years
    pub horizon_years: u32,
    /// Broker-mediated scenario (cost = broker fee)
    pub outsourced: DiscountedMetrics,
    /// In-house scenario (cost = broker fee x opportunity multiplier)
    pub in_house: DiscountedMetrics,
}

impl DiscountedComparison {
    /// NPV of outsourcing minus NPV of running in-house
    pub fn npv_advantage(&self) -> f64 {
        self.outsourced.npv - self.in_house.npv
    }
}

/// Run both cost models through the discounted cash-flow calculation
pub fn compare_discounted(
    annual_spend: f64,
    category: &str,
    discount_rate: f64,
    horizon_years: u32,
    settings: &EngineSettings,
) -> Result<DiscountedComparison, EngineError> {
    settings.outsourcing.validate()?;
    let benefit = compute_category_benefit(annual_spend, category, settings)?;

    let broker_fee = annual_spend * settings.outsourcing.broker_fee_pct / 100.0;
    let in_house_cost = broker_fee * settings.outsourcing.opportunity_cost_multiplier;

    let outsourced = compute_discounted_scenario(
        benefit.annual_benefit,
        broker_fee,
        discount_rate,
        horizon_years,
    )?;
    let in_house = compute_discounted_scenario(
        benefit.annual_benefit,
        in_house_cost,
        discount_rate,
        horizon_years,
    )?;

    Ok(DiscountedComparison {
        benefit,
        discount_rate,
        horizon_years,
        outsourced,
        in_house,
    })
}
