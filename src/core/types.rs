use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub current_age: f64,
    pub retirement_age: f64,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub expected_return_percent: f64,
    pub inflation_percent: f64,
    pub withdrawal_rate_percent: f64,
    pub target_monthly_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub projected_balance_at_retirement: f64,
    pub estimated_monthly_income_nominal: f64,
    pub estimated_monthly_income_todays_dollars: f64,
    pub track_indicator: String,
}
