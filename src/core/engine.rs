use thiserror::Error;

use super::format::usd;
use super::types::{Inputs, Projection};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("projection produced a non-finite value")]
    NonFinite,
    #[error("{0}")]
    Failed(String),
}

pub trait ProjectionEngine: Send + Sync {
    fn calculate(&self, inputs: &Inputs) -> Result<Projection, EngineError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FutureValueEngine;

impl ProjectionEngine for FutureValueEngine {
    fn calculate(&self, inputs: &Inputs) -> Result<Projection, EngineError> {
        // Ages are truncated toward zero; fractional years do not count.
        let years = inputs.retirement_age.trunc() as i64 - inputs.current_age.trunc() as i64;
        let months = years * 12;

        let monthly_return = inputs.expected_return_percent / 100.0 / 12.0;
        let projected_balance = future_value(
            inputs.current_savings,
            inputs.monthly_contribution,
            monthly_return,
            months,
        );

        let annual_income_nominal = projected_balance * (inputs.withdrawal_rate_percent / 100.0);
        let monthly_income_nominal = annual_income_nominal / 12.0;

        let inflation_factor = (1.0 + inputs.inflation_percent / 100.0).powf(years as f64);
        let monthly_income_today = if inflation_factor > 0.0 {
            monthly_income_nominal / inflation_factor
        } else {
            monthly_income_nominal
        };

        // Rounding scales by 100 first, so a finite value near f64::MAX can
        // still overflow. Check the values the projection will carry.
        let balance_rounded = round2(projected_balance);
        let nominal_rounded = round2(monthly_income_nominal);
        let today_rounded = round2(monthly_income_today);
        if !balance_rounded.is_finite()
            || !nominal_rounded.is_finite()
            || !today_rounded.is_finite()
        {
            return Err(EngineError::NonFinite);
        }

        let track_indicator = if inputs.target_monthly_income > 0.0 {
            if monthly_income_today >= inputs.target_monthly_income {
                "On track for your target income".to_string()
            } else {
                let gap = inputs.target_monthly_income - monthly_income_today;
                format!(
                    "Not on track yet (estimated shortfall: {}/month in today's dollars)",
                    usd(gap)
                )
            }
        } else {
            "Target income not provided".to_string()
        };

        Ok(Projection {
            projected_balance_at_retirement: balance_rounded,
            estimated_monthly_income_nominal: nominal_rounded,
            estimated_monthly_income_todays_dollars: today_rounded,
            track_indicator,
        })
    }
}

fn future_value(
    current_savings: f64,
    monthly_contribution: f64,
    monthly_return: f64,
    months: i64,
) -> f64 {
    if months <= 0 {
        return current_savings;
    }
    if monthly_return == 0.0 {
        return current_savings + monthly_contribution * months as f64;
    }

    let growth = (1.0 + monthly_return).powf(months as f64);
    let contribution_fv = monthly_contribution * ((growth - 1.0) / monthly_return);
    current_savings * growth + contribution_fv
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
