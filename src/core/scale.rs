use serde::{Deserialize, Serialize};

use crate::core::primitives::{ensure_finite, group_thousands};
use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Upper bound on generated ticks; larger requests yield no ticks.
pub const MAX_TICKS: usize = 10_000;

/// Continuous linear mapping from a value domain to a pixel range.
///
/// A degenerate domain (`start == end`) maps every value to the middle of the
/// range, and a degenerate range inverts to the middle of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Builds a value axis anchored at zero: `[0, max]` onto `[height, 0]`.
    pub fn zero_based(max_value: f64, plot_height: f64) -> ChartResult<Self> {
        Self::new((0.0, max_value), (plot_height, 0.0))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        let value = ensure_finite(value, "value")?;
        let t = normalize(value, self.domain_start, self.domain_end);
        Ok(interpolate(self.range_start, self.range_end, t))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        let pixel = ensure_finite(pixel, "pixel")?;
        let t = normalize(pixel, self.range_start, self.range_end);
        Ok(interpolate(self.domain_start, self.domain_end, t))
    }

    /// Evenly spaced, human-friendly tick values within the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks(self.domain_start, self.domain_end, count as f64)
    }

    /// Signed distance between consecutive ticks for `count`.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        tick_step(self.domain_start, self.domain_end, count as f64)
    }

    /// Formats `value` with the fixed precision implied by the tick step.
    #[must_use]
    pub fn format_tick(self, value: f64, count: usize) -> String {
        let precision = precision_fixed(self.tick_step(count));
        let text = format!("{value:.precision$}");
        let text = if text.starts_with('-') && text.trim_start_matches(['-', '0', '.']).is_empty()
        {
            text.trim_start_matches('-').to_owned()
        } else {
            text
        };
        group_thousands(&text)
    }
}

fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span == 0.0 {
        0.5
    } else {
        (value - start) / span
    }
}

fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Rounds half toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Tick index bounds and increment. A negative increment encodes `1 / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * scaled);
        i2 = round_half_up(stop * scaled);
        if i1 / scaled < start {
            i1 += 1.0;
        }
        if i2 / scaled > stop {
            i2 -= 1.0;
        }
        inc = -scaled;
    } else {
        let scaled = 10f64.powf(power) * factor;
        i1 = round_half_up(start / scaled);
        i2 = round_half_up(stop / scaled);
        if i1 * scaled < start {
            i1 += 1.0;
        }
        if i2 * scaled > stop {
            i2 -= 1.0;
        }
        inc = scaled;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub(crate) fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) || !inc.is_finite() || i2 - i1 >= MAX_TICKS as f64 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value_at = |index: f64| {
        if inc < 0.0 {
            index / -inc
        } else {
            index * inc
        }
    };
    (0..n)
        .map(|offset| {
            let offset = offset as f64;
            if reverse {
                value_at(i2 - offset)
            } else {
                value_at(i1 + offset)
            }
        })
        .collect()
}

pub(crate) fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    let magnitude = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -magnitude } else { magnitude }
}

fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_one_two_five_steps() {
        assert_eq!(
            ticks(0.0, 10.0, 10.0),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(ticks(0.0, 1.0, 5.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 36.0, 10.0), vec![
            0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0
        ]);
    }

    #[test]
    fn reversed_domain_yields_descending_ticks() {
        assert_eq!(ticks(10.0, 0.0, 5.0), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert!(tick_step(10.0, 0.0, 5.0) < 0.0);
    }

    #[test]
    fn oversized_tick_requests_yield_nothing() {
        assert!(ticks(0.0, 40.0, 100_000_000.0).is_empty());
        assert!(ticks(0.0, 40.0, f64::MAX).is_empty());
        assert_eq!(ticks(0.0, 40.0, 1_000.0).len(), 801);
    }

    #[test]
    fn precision_tracks_step_magnitude() {
        assert_eq!(precision_fixed(0.5), 1);
        assert_eq!(precision_fixed(0.02), 2);
        assert_eq!(precision_fixed(1000.0), 0);
    }
}
