//! Depreciation schedule and ownership costs
//!
//! Both purchase scenarios own the same car, so they share one computation of
//! depreciation, IPVA, insurance and maintenance. Two proration policies coexist
//! on purpose:
//! - residual value compounds monthly through a partial final year
//! - IPVA, insurance and maintenance prorate linearly over that partial year

use crate::config::CalculationInput;

/// Depreciation factor for year `year` (0-based), reusing the last factor past the end
///
/// An empty sequence yields `0.0` for every year, so the car keeps its full value.
/// Validated input never has one; this only applies to a hand-built or directly
/// deserialized `CalculationInput`.
pub fn rate_for_year(rates: &[f64], year: usize) -> f64 {
    rates
        .get(year)
        .or_else(|| rates.last())
        .copied()
        .unwrap_or(0.0)
}

/// Year-by-year vehicle values over a horizon
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationSchedule {
    /// Purchase price
    pub car_value: f64,
    /// Value at the start of each year; `full_years + 1` entries, first is the price
    pub year_start_values: Vec<f64>,
    /// Value at the end of the horizon
    pub residual_value: f64,
    pub full_years: usize,
    pub remainder_months: u32,
}

impl DepreciationSchedule {
    /// Build the schedule for `months` of ownership
    pub fn build(car_value: f64, months: u32, rates: &[f64]) -> Self {
        let full_years = (months / 12) as usize;
        let remainder_months = months % 12;

        let mut value = car_value;
        let mut year_start_values = Vec::with_capacity(full_years + 1);
        year_start_values.push(value);

        for year in 0..full_years {
            value *= 1.0 - rate_for_year(rates, year);
            year_start_values.push(value);
        }

        // Partial year compounds monthly at the next year's rate / 12
        if remainder_months > 0 {
            let monthly_rate = rate_for_year(rates, full_years) / 12.0;
            value *= (1.0 - monthly_rate).powi(remainder_months as i32);
        }

        Self {
            car_value,
            year_start_values,
            residual_value: value,
            full_years,
            remainder_months,
        }
    }

    /// Value lost over the horizon
    pub fn total_depreciation(&self) -> f64 {
        self.car_value - self.residual_value
    }

    /// Fraction of a year covered by the trailing partial year
    pub fn remainder_fraction(&self) -> f64 {
        f64::from(self.remainder_months) / 12.0
    }

    /// Accrue a cost charged yearly as `annual_rate` of the value at the start of the year
    ///
    /// The trailing partial year is charged linearly on the value at its start.
    pub fn accrue_on_value(&self, annual_rate: f64) -> f64 {
        let full: f64 = self.year_start_values[..self.full_years]
            .iter()
            .map(|value| value * annual_rate)
            .sum();

        let partial = if self.remainder_months > 0 {
            self.year_start_values[self.full_years] * annual_rate * self.remainder_fraction()
        } else {
            0.0
        };

        full + partial
    }

    /// Accrue a flat yearly amount, prorated linearly over the partial year
    pub fn accrue_flat(&self, annual_amount: f64) -> f64 {
        annual_amount * self.full_years as f64 + annual_amount * self.remainder_fraction()
    }
}

/// Costs of holding the vehicle, independent of how it was paid for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OwnershipCosts {
    pub depreciation: f64,
    pub residual_value: f64,
    pub ipva: f64,
    pub insurance: f64,
    pub maintenance: f64,
}

/// Ownership costs of `input.car_value` over `input.analysis_period_months`
pub fn ownership_costs(input: &CalculationInput) -> OwnershipCosts {
    let schedule = DepreciationSchedule::build(
        input.car_value,
        input.analysis_period_months,
        &input.depreciation_rate,
    );

    OwnershipCosts {
        depreciation: schedule.total_depreciation(),
        residual_value: schedule.residual_value,
        ipva: schedule.accrue_on_value(input.ipva_rate),
        insurance: schedule.accrue_on_value(input.insurance_rate_annual),
        maintenance: schedule.accrue_flat(input.maintenance_annual),
    }
}
