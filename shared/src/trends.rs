//! Trend aggregation
//!
//! Buckets timestamped diet and exercise records into calendar periods and
//! derives the scalars shown next to the charts.
//!
//! # Time convention
//!
//! A record belongs to the period containing the UTC calendar date of its
//! `occurred_at` event time. Record insertion time plays no part.

use crate::errors::{CalcResult, InvalidInputError};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of activity a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Quantity is energy intake in kcal
    Diet,
    /// Quantity is duration in minutes
    Exercise,
}

impl ActivityKind {
    /// Unit of the record quantity
    pub fn unit(&self) -> &'static str {
        match self {
            ActivityKind::Diet => "kcal",
            ActivityKind::Exercise => "min",
        }
    }
}

/// A single diet or exercise entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// When the meal or workout happened
    pub occurred_at: DateTime<Utc>,
    /// kcal for diet records, minutes for exercise records
    pub quantity: f64,
}

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` lies within the range, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Calendar period size used for bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    #[serde(alias = "daily")]
    Day,
    /// ISO week, Monday through Sunday
    #[serde(alias = "weekly")]
    Week,
    #[serde(alias = "monthly")]
    Month,
}

impl Granularity {
    /// First date of the period containing `date`
    ///
    /// `None` when that date lies before the earliest representable date.
    pub fn period_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Day => Some(date),
            Granularity::Week => date.checked_sub_days(Days::new(u64::from(
                date.weekday().num_days_from_monday(),
            ))),
            Granularity::Month => date.checked_sub_days(Days::new(u64::from(date.day0()))),
        }
    }

    /// First date of the period following the one starting at `start`
    fn next_period_start(&self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Day => start.succ_opt(),
            Granularity::Week => start.checked_add_days(Days::new(7)),
            Granularity::Month => start.checked_add_months(Months::new(1)),
        }
    }

    /// Chart label for the period starting at `start`
    pub fn label(&self, start: NaiveDate) -> String {
        self.label_with_year(start, false)
    }

    /// Day labels gain a `YYYY/` prefix when `with_year` is set
    fn label_with_year(&self, start: NaiveDate, with_year: bool) -> String {
        match self {
            Granularity::Day if with_year => start.format("%Y/%-m/%-d").to_string(),
            Granularity::Day => start.format("%-m/%-d").to_string(),
            Granularity::Week => start.format("%G-W%V").to_string(),
            Granularity::Month => start.format("%Y-%m").to_string(),
        }
    }

    /// Start dates of every period touched by the window, ascending
    fn period_starts(
        &self,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> CalcResult<Vec<NaiveDate>> {
        let out_of_range = || InvalidInputError::new("window_start", "date out of range");
        let first = self.period_start(window_start).ok_or_else(out_of_range)?;
        let last = self.period_start(window_end).ok_or_else(out_of_range)?;
        let mut starts = Vec::new();
        let mut current = Some(first);

        while let Some(start) = current {
            if start > last {
                break;
            }
            starts.push(start);
            current = self.next_period_start(start);
        }

        Ok(starts)
    }
}

/// Total for one calendar period
///
/// `period_start` identifies the bucket. Day labels omit the year unless the
/// window spans more than one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    pub period_label: String,
    pub period_start: NaiveDate,
    pub total: f64,
}

/// Sum record quantities per calendar period of the window
///
/// One bucket is produced for every period from the one containing
/// `window_start` through the one containing `window_end`, whether or not
/// any record falls into it. Records dated outside the window are ignored.
/// Totals do not depend on the order of `records`.
pub fn aggregate_trend(
    records: &[ActivityRecord],
    window_start: NaiveDate,
    window_end: NaiveDate,
    granularity: Granularity,
) -> CalcResult<Vec<TrendBucket>> {
    if window_start > window_end {
        return Err(InvalidInputError::new(
            "window_start",
            "must not be after window_end",
        ));
    }

    let window = DateRange {
        start: window_start,
        end: window_end,
    };
    let starts = granularity.period_starts(window_start, window_end)?;
    let with_year = window_start.year() != window_end.year();
    let mut quantities: Vec<Vec<f64>> = vec![Vec::new(); starts.len()];

    for record in records {
        let day = record.occurred_at.date_naive();
        if !window.contains(day) {
            continue;
        }
        let index = granularity
            .period_start(day)
            .and_then(|start| starts.binary_search(&start).ok());
        if let Some(index) = index {
            quantities[index].push(record.quantity);
        }
    }

    let buckets = starts
        .into_iter()
        .zip(quantities)
        .map(|(start, mut values)| {
            // Fixed summation order keeps totals identical under permutation
            values.sort_by(f64::total_cmp);
            TrendBucket {
                period_label: granularity.label_with_year(start, with_year),
                period_start: start,
                total: values.iter().fold(0.0, |acc, v| acc + v),
            }
        })
        .collect();

    Ok(buckets)
}

/// Mean total per bucket, 0 when there are no buckets
pub fn average(buckets: &[TrendBucket]) -> f64 {
    if buckets.is_empty() {
        return 0.0;
    }
    let sum = buckets.iter().fold(0.0, |acc, b| acc + b.total);
    sum / buckets.len() as f64
}

/// Count buckets whose total satisfies `comparator(total, goal)`
pub fn days_goal_met<F>(buckets: &[TrendBucket], goal: f64, comparator: F) -> usize
where
    F: Fn(f64, f64) -> bool,
{
    buckets.iter().filter(|b| comparator(b.total, goal)).count()
}

/// Calorie goal: something was eaten, and no more than the goal
pub fn calorie_goal_met(total: f64, goal: f64) -> bool {
    total > 0.0 && total <= goal
}

/// Exercise goal: at least the goal duration
pub fn exercise_goal_met(total: f64, goal: f64) -> bool {
    total >= goal
}

/// Rule deciding whether a period met its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    /// See [`calorie_goal_met`]
    CalorieCeiling,
    /// See [`exercise_goal_met`]
    ExerciseFloor,
}

impl GoalPolicy {
    /// Policy applied to records of `kind`
    pub fn for_kind(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::Diet => GoalPolicy::CalorieCeiling,
            ActivityKind::Exercise => GoalPolicy::ExerciseFloor,
        }
    }

    pub fn is_met(&self, total: f64, goal: f64) -> bool {
        match self {
            GoalPolicy::CalorieCeiling => calorie_goal_met(total, goal),
            GoalPolicy::ExerciseFloor => exercise_goal_met(total, goal),
        }
    }
}

/// Seven-day window ending on `today`, as charted by the statistics screen
pub fn trailing_week(today: NaiveDate) -> CalcResult<DateRange> {
    let start = today
        .checked_sub_days(Days::new(6))
        .ok_or_else(|| InvalidInputError::new("window_start", "date out of range"))?;
    Ok(DateRange { start, end: today })
}
