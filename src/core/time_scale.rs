use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_timestamp_ms, timestamp_ms_to_datetime};
use crate::core::scale::{self, LinearScale};
use crate::error::{ChartError, ChartResult};

pub const YEAR_TICK_FORMAT: &str = "%Y";

/// Calendar axis model mapping dates to horizontal pixels.
///
/// The continuous domain is milliseconds since the Unix epoch (UTC), so a
/// year-start date maps to the same pixel regardless of host timezone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> ChartResult<Self> {
        let start_ms = date_to_timestamp_ms(domain.0)?;
        let end_ms = date_to_timestamp_ms(domain.1)?;
        let linear = LinearScale::new((start_ms, end_ms), range)?;
        Ok(Self {
            start: domain.0,
            end: domain.1,
            linear,
        })
    }

    /// Fits the domain to the extent of `dates` and maps it onto `[0, width]`.
    pub fn from_extent<I>(dates: I, width: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut extent: Option<(NaiveDate, NaiveDate)> = None;
        for date in dates {
            extent = Some(match extent {
                Some((min, max)) => (min.min(date), max.max(date)),
                None => (date, date),
            });
        }
        let extent = extent.ok_or_else(|| {
            ChartError::InvalidData("time scale cannot be built from empty data".to_owned())
        })?;
        Self::new(extent, (0.0, width))
    }

    #[must_use]
    pub fn domain(self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn domain_ms(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn map(self, date: NaiveDate) -> ChartResult<f64> {
        self.map_timestamp_ms(date_to_timestamp_ms(date)?)
    }

    pub fn map_timestamp_ms(self, timestamp_ms: f64) -> ChartResult<f64> {
        self.linear.map(timestamp_ms)
    }

    pub fn invert(self, pixel: f64) -> ChartResult<NaiveDateTime> {
        timestamp_ms_to_datetime(self.linear.invert(pixel)?)
    }

    /// Year-start ticks on multiples of a 1-2-5 year step.
    ///
    /// At most roughly `count` ticks are produced; a single-year domain yields
    /// one tick.
    #[must_use]
    pub fn year_ticks(self, count: usize) -> Vec<NaiveDate> {
        let (first, last) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };

        let first_year = if first.ordinal() == 1 {
            first.year()
        } else {
            first.year() + 1
        };
        let last_year = last.year();
        if first_year > last_year {
            return Vec::new();
        }

        let step = if first_year == last_year || count == 0 {
            1
        } else {
            let raw = scale::tick_step(f64::from(first_year), f64::from(last_year), count as f64);
            (raw.abs().round() as i32).max(1)
        };

        let aligned_first = first_year.div_euclid(step) * step;
        let aligned_first = if aligned_first < first_year {
            aligned_first + step
        } else {
            aligned_first
        };

        let mut ticks: Vec<NaiveDate> = (aligned_first..=last_year)
            .step_by(step as usize)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .collect();
        if self.start > self.end {
            ticks.reverse();
        }
        ticks
    }

    #[must_use]
    pub fn format_tick(date: NaiveDate) -> String {
        date.format(YEAR_TICK_FORMAT).to_string()
    }
}
