use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// One yearly observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRecord {
    /// January 1st of the observed calendar year.
    pub year: NaiveDate,
    pub population: u64,
    pub co2: f64,
}

impl EmissionsRecord {
    pub fn new(year: i32, population: u64, co2: f64) -> ChartResult<Self> {
        let year = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
            ChartError::InvalidData(format!("year {year} is out of range"))
        })?;
        if !co2.is_finite() {
            return Err(ChartError::InvalidData("co2 must be finite".to_owned()));
        }
        Ok(Self {
            year,
            population,
            co2,
        })
    }
}

/// Raw CSV row; unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    year: String,
    population: String,
    co2: String,
}

/// Non-empty, year-ordered list of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<EmissionsRecord>,
}

impl Dataset {
    /// Builds a dataset, stably sorting records by year when needed.
    pub fn new(mut records: Vec<EmissionsRecord>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one record".to_owned(),
            ));
        }
        if records.iter().any(|record| !record.co2.is_finite()) {
            return Err(ChartError::InvalidData("co2 must be finite".to_owned()));
        }

        if records.windows(2).any(|pair| pair[0].year > pair[1].year) {
            debug!(count = records.len(), "reordering records by year");
            records.sort_by_key(|record| record.year);
        }

        Ok(Self { records })
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        debug!(path = %path.display(), count = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn from_csv_str(input: &str) -> ChartResult<Self> {
        Self::from_reader(input.as_bytes())
    }

    /// Parses `year,population,co2` CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> ChartResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = row?;
            records.push(parse_row(&row, index + 1)?);
        }

        let dataset = Self::new(records)?;
        debug!(count = dataset.len(), "parsed emissions csv");
        Ok(dataset)
    }

    #[must_use]
    pub fn records(&self) -> &[EmissionsRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn year_extent(&self) -> (NaiveDate, NaiveDate) {
        let first = self.records[0].year;
        let last = self.records[self.records.len() - 1].year;
        (first, last)
    }

    #[must_use]
    pub fn max_co2(&self) -> f64 {
        self.records
            .iter()
            .map(|record| record.co2)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn max_population(&self) -> u64 {
        self.records
            .iter()
            .map(|record| record.population)
            .max()
            .unwrap_or(0)
    }
}

fn parse_row(row: &CsvRow, row_number: usize) -> ChartResult<EmissionsRecord> {
    let year = parse_year(&row.year).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "row {row_number}: `{}` is not a calendar year",
            row.year
        ))
    })?;
    let population = parse_population(&row.population, row_number)?;
    let co2 = parse_number(&row.co2, "co2", row_number)?;

    Ok(EmissionsRecord {
        year,
        population,
        co2,
    })
}

/// Accepts the same input as a `%Y` time parse: up to four digits with an
/// optional sign, nothing else.
fn parse_year(raw: &str) -> Option<NaiveDate> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = raw.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

fn parse_number(raw: &str, field: &str, row_number: usize) -> ChartResult<f64> {
    if raw.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "row {row_number}: missing `{field}` value"
        )));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::InvalidData(format!(
            "row {row_number}: `{raw}` is not a finite `{field}` value"
        ))),
    }
}

fn parse_population(raw: &str, row_number: usize) -> ChartResult<u64> {
    if let Ok(value) = raw.parse::<u64>() {
        return Ok(value);
    }

    let value = parse_number(raw, "population", row_number)?;
    if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(ChartError::InvalidData(format!(
            "row {row_number}: population `{raw}` must be a non-negative whole number"
        )));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_year_rejects_trailing_characters() {
        assert!(parse_year("1990").is_some());
        assert!(parse_year("19900").is_none());
        assert!(parse_year("1990a").is_none());
        assert!(parse_year("").is_none());
        assert_eq!(
            parse_year("-50"),
            NaiveDate::from_ymd_opt(-50, 1, 1)
        );
    }

    #[test]
    fn population_accepts_integral_scientific_notation() {
        assert_eq!(parse_population("6.0e9", 1).expect("integral"), 6_000_000_000);
        assert!(parse_population("6.5", 1).is_err());
        assert!(parse_population("-1", 1).is_err());
    }
}
