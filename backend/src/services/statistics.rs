//! Statistics service for trend charts and period reports

use crate::config::StatisticsConfig;
use crate::error::ApiError;
use chrono::{Days, NaiveDate};
use healthtrack_shared::types::{ReportRequest, TrendRequest, TrendResponse};
use healthtrack_shared::{
    aggregate_trend, average, build_report, days_goal_met, trailing_week, DateRange, GoalPolicy,
    StatisticsReport, TrendBucket,
};
use tracing::{debug, instrument};

/// Statistics service
pub struct StatisticsService;

impl StatisticsService {
    /// Reject windows longer than the configured limit
    pub fn check_window_length(
        settings: &StatisticsConfig,
        window: &DateRange,
    ) -> Result<(), ApiError> {
        if window.num_days() > settings.max_window_days {
            return Err(ApiError::invalid_field(
                "window_end",
                format!(
                    "window covers {} days, at most {} allowed",
                    window.num_days(),
                    settings.max_window_days
                ),
            ));
        }
        Ok(())
    }

    /// Bucket the records of a trend request
    pub fn buckets(
        settings: &StatisticsConfig,
        req: &TrendRequest,
    ) -> Result<Vec<TrendBucket>, ApiError> {
        let window = DateRange {
            start: req.window_start,
            end: req.window_end,
        };
        Self::check_window_length(settings, &window)?;

        let buckets = aggregate_trend(
            &req.records,
            req.window_start,
            req.window_end,
            req.granularity,
        )?;
        Ok(buckets)
    }

    /// Bucket records and compute the chart scalars
    #[instrument(skip_all, fields(records = req.records.len(), granularity = ?req.granularity))]
    pub fn trend(
        settings: &StatisticsConfig,
        req: &TrendRequest,
    ) -> Result<TrendResponse, ApiError> {
        if req.goal.is_some() && req.kind.is_none() {
            return Err(ApiError::invalid_field(
                "kind",
                "a goal can only be evaluated for a known activity kind",
            ));
        }

        let buckets = Self::buckets(settings, req)?;
        let total = buckets.iter().fold(0.0, |acc, b| acc + b.total);
        let policy = req.kind.map(GoalPolicy::for_kind);
        let met = match (policy, req.goal) {
            (Some(policy), Some(goal)) => {
                Some(days_goal_met(&buckets, goal, |t, g| policy.is_met(t, g)))
            }
            _ => None,
        };
        debug!(periods = buckets.len(), total, "Aggregated trend");

        Ok(TrendResponse {
            average: average(&buckets),
            total,
            unit: req.kind.map(|k| k.unit().to_string()),
            policy: met.and(policy),
            days_goal_met: met,
            buckets,
        })
    }

    /// Build the diet/exercise report for a window
    ///
    /// A missing window end defaults to `today`, a missing start to six days
    /// before the end, matching the weekly statistics view.
    #[instrument(skip_all, fields(granularity = ?req.granularity))]
    pub fn report(
        settings: &StatisticsConfig,
        req: &ReportRequest,
        today: NaiveDate,
    ) -> Result<StatisticsReport, ApiError> {
        let window = Self::resolve_window(req.window_start, req.window_end, today)?;
        Self::check_window_length(settings, &window)?;

        let goals = req.goals.unwrap_or_default();
        let report = build_report(
            &req.profile,
            &goals,
            &req.diet_records,
            &req.exercise_records,
            window.start,
            window.end,
            req.granularity,
        )?;
        debug!(
            diet_met = report.diet.days_goal_met,
            exercise_met = report.exercise.days_goal_met,
            "Built statistics report"
        );
        Ok(report)
    }

    fn resolve_window(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DateRange, ApiError> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(DateRange { start, end }),
            (None, Some(end)) => Ok(trailing_week(end)?),
            (None, None) => Ok(trailing_week(today)?),
            (Some(start), None) => {
                let end = start
                    .checked_add_days(Days::new(6))
                    .ok_or_else(|| ApiError::invalid_field("window_start", "date out of range"))?;
                Ok(DateRange { start, end })
            }
        }
    }
}
