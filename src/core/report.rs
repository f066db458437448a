use serde::Serialize;

use super::format::usd;
use super::types::Projection;

pub const SUMMARY_TITLE: &str = "Retirement Calculator";
pub const SUMMARY_DISCLAIMER: &str = "Estimates only. Not financial advice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrackStatus {
    #[serde(rename = "ok")]
    OnTrack,
    #[serde(rename = "warn")]
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub projection: Projection,
    pub balance_line: String,
    pub income_nominal_line: String,
    pub income_today_line: String,
    pub track_line: String,
    pub track_status: TrackStatus,
    pub summary: String,
}

pub fn render(projection: &Projection) -> ProjectionReport {
    let balance_line = format!(
        "Projected balance at retirement: {}",
        usd(projection.projected_balance_at_retirement)
    );
    let income_nominal_line = format!(
        "Estimated monthly income (nominal): {}",
        usd(projection.estimated_monthly_income_nominal)
    );
    let income_today_line = format!(
        "Estimated monthly income (today's dollars): {}",
        usd(projection.estimated_monthly_income_todays_dollars)
    );
    let track_line = format!("Track indicator: {}", projection.track_indicator);
    let track_status = classify_track(&projection.track_indicator);
    let summary = [
        SUMMARY_TITLE,
        balance_line.as_str(),
        income_nominal_line.as_str(),
        income_today_line.as_str(),
        track_line.as_str(),
        SUMMARY_DISCLAIMER,
    ]
    .join("\n");

    ProjectionReport {
        projection: projection.clone(),
        balance_line,
        income_nominal_line,
        income_today_line,
        track_line,
        track_status,
        summary,
    }
}

// Any casing of "on track" counts as on-track; everything else warns.
pub fn classify_track(indicator: &str) -> TrackStatus {
    if indicator.to_lowercase().contains("on track") {
        TrackStatus::OnTrack
    } else {
        TrackStatus::Warning
    }
}
