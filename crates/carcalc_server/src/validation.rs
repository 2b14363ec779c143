//! Request validation
//!
//! Every field of the request body is optional at the JSON level so that a
//! missing field is reported next to every other problem instead of failing
//! deserialization. `validate_calculation_request` checks all fields, collects
//! every violation and only then builds a `CalculationInput`.

use carcalc_core::config::{
    CalculationInput, DEFAULT_DEPRECIATION_RATES, DEFAULT_DOWN_PAYMENT_PERCENT,
    DEFAULT_INSURANCE_RATE_ANNUAL, DEFAULT_IPVA_RATE, DEFAULT_MAINTENANCE_ANNUAL,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Longest accepted horizon; the break-even search is quadratic in it
pub const MAX_ANALYSIS_PERIOD_MONTHS: u32 = 600;

/// Body of `/api/calculate` and `/api/calculate-timeline`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculationRequest {
    pub car_value: Option<f64>,
    pub monthly_rent: Option<f64>,
    pub interest_rate_month: Option<f64>,
    pub financing_term_months: Option<f64>,
    pub analysis_period_months: Option<f64>,
    pub down_payment_percent: Option<f64>,
    pub maintenance_annual: Option<f64>,
    pub insurance_rate_annual: Option<f64>,
    pub ipva_rate: Option<f64>,
    pub depreciation_rate: Option<Vec<f64>>,
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn required(field: &str, value: Option<f64>) -> Result<f64, FieldViolation> {
    value.ok_or_else(|| FieldViolation::new(field, format!("{field} is required")))
}

fn positive(field: &str, value: Option<f64>) -> Result<f64, FieldViolation> {
    let value = required(field, value)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(FieldViolation::new(field, format!("{field} must be positive")));
    }
    Ok(value)
}

fn unit_rate(field: &str, value: f64) -> Result<f64, FieldViolation> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FieldViolation::new(
            field,
            format!("{field} must be between 0 and 1"),
        ));
    }
    Ok(value)
}

fn optional_unit_rate(field: &str, value: Option<f64>, default: f64) -> Result<f64, FieldViolation> {
    value.map_or(Ok(default), |v| unit_rate(field, v))
}

/// A strictly positive whole number of months, at most `max`
fn whole_months(field: &str, value: Option<f64>, max: u32) -> Result<u32, FieldViolation> {
    let value = required(field, value)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(FieldViolation::new(
            field,
            format!("{field} must be an integer"),
        ));
    }
    if value <= 0.0 {
        return Err(FieldViolation::new(field, format!("{field} must be positive")));
    }
    if value > f64::from(max) {
        return Err(FieldViolation::new(
            field,
            format!("{field} cannot exceed {max}"),
        ));
    }
    Ok(value as u32)
}

fn maintenance(value: Option<f64>) -> Result<f64, FieldViolation> {
    match value {
        None => Ok(DEFAULT_MAINTENANCE_ANNUAL),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(FieldViolation::new(
            "maintenanceAnnual",
            "maintenanceAnnual must not be negative",
        )),
    }
}

fn depreciation_rates(value: Option<&[f64]>) -> Result<Vec<f64>, Vec<FieldViolation>> {
    let Some(rates) = value else {
        return Ok(DEFAULT_DEPRECIATION_RATES.to_vec());
    };

    if rates.is_empty() {
        return Err(vec![FieldViolation::new(
            "depreciationRate",
            "depreciationRate must have at least one rate",
        )]);
    }

    let violations: Vec<FieldViolation> = rates
        .iter()
        .enumerate()
        .filter(|(_, rate)| !(0.0..=1.0).contains(*rate))
        .map(|(index, _)| {
            FieldViolation::new(
                format!("depreciationRate[{index}]"),
                "each depreciation rate must be between 0 and 1",
            )
        })
        .collect();

    if violations.is_empty() {
        Ok(rates.to_vec())
    } else {
        Err(violations)
    }
}

/// Keep the value, or record why it was rejected
fn record<T>(violations: &mut Vec<FieldViolation>, result: Result<T, FieldViolation>) -> Option<T> {
    result.map_err(|violation| violations.push(violation)).ok()
}

/// Validate a request body, applying defaults to omitted optional fields
///
/// Returns every violation found, in field order.
pub fn validate_calculation_request(
    request: &CalculationRequest,
) -> Result<CalculationInput, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let car_value = record(&mut violations, positive("carValue", request.car_value));
    let monthly_rent = record(&mut violations, positive("monthlyRent", request.monthly_rent));
    let interest_rate_month = record(
        &mut violations,
        required("interestRateMonth", request.interest_rate_month)
            .and_then(|v| unit_rate("interestRateMonth", v)),
    );
    let financing_term_months = record(
        &mut violations,
        whole_months(
            "financingTermMonths",
            request.financing_term_months,
            u32::MAX,
        ),
    );
    let analysis_period_months = record(
        &mut violations,
        whole_months(
            "analysisPeriodMonths",
            request.analysis_period_months,
            MAX_ANALYSIS_PERIOD_MONTHS,
        ),
    );
    let down_payment_percent = record(
        &mut violations,
        optional_unit_rate(
            "downPaymentPercent",
            request.down_payment_percent,
            DEFAULT_DOWN_PAYMENT_PERCENT,
        ),
    );
    let maintenance_annual = record(&mut violations, maintenance(request.maintenance_annual));
    let insurance_rate_annual = record(
        &mut violations,
        optional_unit_rate(
            "insuranceRateAnnual",
            request.insurance_rate_annual,
            DEFAULT_INSURANCE_RATE_ANNUAL,
        ),
    );
    let ipva_rate = record(
        &mut violations,
        optional_unit_rate("ipvaRate", request.ipva_rate, DEFAULT_IPVA_RATE),
    );
    let depreciation_rate = depreciation_rates(request.depreciation_rate.as_deref())
        .map_err(|rate_violations| violations.extend(rate_violations))
        .ok();

    let (
        Some(car_value),
        Some(monthly_rent),
        Some(interest_rate_month),
        Some(financing_term_months),
        Some(analysis_period_months),
        Some(down_payment_percent),
        Some(maintenance_annual),
        Some(insurance_rate_annual),
        Some(ipva_rate),
        Some(depreciation_rate),
    ) = (
        car_value,
        monthly_rent,
        interest_rate_month,
        financing_term_months,
        analysis_period_months,
        down_payment_percent,
        maintenance_annual,
        insurance_rate_annual,
        ipva_rate,
        depreciation_rate,
    )
    else {
        return Err(violations);
    };

    Ok(CalculationInput::builder(car_value, monthly_rent)
        .interest_rate_month(interest_rate_month)
        .financing_term_months(financing_term_months)
        .analysis_period_months(analysis_period_months)
        .down_payment_percent(down_payment_percent)
        .maintenance_annual(maintenance_annual)
        .insurance_rate_annual(insurance_rate_annual)
        .ipva_rate(ipva_rate)
        .depreciation_rate(depreciation_rate)
        .build())
}
