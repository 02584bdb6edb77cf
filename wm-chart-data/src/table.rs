//! Chart table built from backend rows.
//!
//! Each `[date, low, mid]` row becomes `[date, mid, mid, low]`: the trend
//! line is `mid`, and the interval band runs from `mid` down (or up) to
//! `low`.

use crate::rows::DataRow;
use chrono::{Datelike, Months, NaiveDate, TimeDelta};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Date of a chart row.
///
/// `Invalid` stands in for date text whose components are missing or not
/// numeric; the point is still handed to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartDate {
    Valid(NaiveDate),
    Invalid,
}

impl ChartDate {
    /// Parse digit-delimited date text (`2021-03-05`, `2021/3/5`, ...).
    ///
    /// Any run of non-digit characters separates components. The first
    /// three components are year, 1-based month and day; anything after
    /// them (a time of day, say) is ignored.
    pub fn parse(text: &str) -> Self {
        let mut pieces = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|piece| !piece.is_empty())
            .map(|piece| piece.parse::<i64>().ok());

        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some(Some(year)), Some(Some(month)), Some(Some(day))) => {
                Self::from_components(year, month, day)
            }
            _ => ChartDate::Invalid,
        }
    }

    /// Build a date from year, 1-based month and day.
    ///
    /// Out-of-range months and days roll over into neighbouring months and
    /// years: month 13 is January of the following year, day 0 the last day
    /// of the previous month. Years 0 to 99 mean 1900 to 1999, as in native
    /// date construction.
    pub fn from_components(year: i64, month: i64, day: i64) -> Self {
        let year = if (0..=99).contains(&year) { year + 1900 } else { year };
        roll_over(year, month, day).map_or(ChartDate::Invalid, ChartDate::Valid)
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        match self {
            ChartDate::Valid(date) => Some(*date),
            ChartDate::Invalid => None,
        }
    }

    /// 0-based month, as the charting library expects.
    pub fn month_index(&self) -> Option<u32> {
        self.naive_date().map(|date| date.month0())
    }
}

fn roll_over(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year_start = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let month_offset = month.checked_sub(1)?;
    let months = Months::new(u32::try_from(month_offset.unsigned_abs()).ok()?);
    let month_start = if month_offset >= 0 {
        year_start.checked_add_months(months)?
    } else {
        year_start.checked_sub_months(months)?
    };
    month_start.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Serialized as `[year, monthIndex, day]`, or `null` when invalid.
impl Serialize for ChartDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChartDate::Valid(date) => (date.year(), date.month0(), date.day()).serialize(serializer),
            ChartDate::Invalid => serializer.serialize_none(),
        }
    }
}

/// One row of the chart table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub date: ChartDate,
    pub trend: Option<f64>,
    pub interval_high: Option<f64>,
    pub interval_low: Option<f64>,
}

impl ChartRow {
    /// Map a `[date, low, mid]` row to `[date, mid, mid, low]`.
    pub fn from_data_row(row: &DataRow) -> Self {
        Self {
            date: ChartDate::parse(&row.date),
            trend: row.mid,
            interval_high: row.mid,
            interval_low: row.low,
        }
    }
}

/// Serialized positionally, matching the column order.
impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.date, self.trend, self.interval_high, self.interval_low).serialize(serializer)
    }
}

/// Column description handed to the chart's data table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChartColumn {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
}

impl ChartColumn {
    const fn labeled(kind: &'static str, label: &'static str) -> Self {
        Self {
            kind,
            label: Some(label),
            id: None,
            role: None,
        }
    }

    const fn interval() -> Self {
        Self {
            kind: "number",
            label: None,
            id: Some("wtpair"),
            role: Some("interval"),
        }
    }
}

/// Columns: date, trend, and the two interval bounds.
pub const TREND_COLUMNS: [ChartColumn; 4] = [
    ChartColumn::labeled("date", "Date"),
    ChartColumn::labeled("number", "Trend"),
    ChartColumn::interval(),
    ChartColumn::interval(),
];

/// Date-keyed table drawn as a line with an interval band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartTable {
    rows: Vec<ChartRow>,
}

impl ChartTable {
    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Serialized as `{ "cols": [...], "rows": [[date, mid, mid, low], ...] }`.
impl Serialize for ChartTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut table = serializer.serialize_struct("ChartTable", 2)?;
        table.serialize_field("cols", &TREND_COLUMNS)?;
        table.serialize_field("rows", &self.rows)?;
        table.end()
    }
}

/// Build the chart table, one entry per input row, in input order.
pub fn build_chart_table(rows: &[DataRow]) -> ChartTable {
    let rows: Vec<ChartRow> = rows.iter().map(ChartRow::from_data_row).collect();
    let invalid = rows
        .iter()
        .filter(|row| row.date == ChartDate::Invalid)
        .count();
    if invalid > 0 {
        log::warn!("{} of {} chart rows have an invalid date", invalid, rows.len());
    }
    ChartTable { rows }
}
