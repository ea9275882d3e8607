// 📋 Trip Table - In-memory trip records for one city
//
// Tables are values: filtering and column renaming build a new table and
// leave the original untouched.

use crate::filters::{weekday_name, FilterSpec};
use chrono::{NaiveDateTime, Weekday};

/// Name of the derived month column
pub const MONTH_COLUMN: &str = "month";
/// Name of the derived weekday column
pub const DAY_OF_WEEK_COLUMN: &str = "day_of_week";

const START_TIME_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// TRIP RECORD
// ============================================================================

/// TripRecord - One row of the trip log plus its derived fields
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// 0-based position of the row in the source file
    pub index: usize,
    pub start_time: NaiveDateTime,
    /// Calendar month of `start_time` (1 = January)
    pub month: u32,
    pub day_of_week: Weekday,
    /// Source cells in header order
    pub values: Vec<String>,
}

impl TripRecord {
    pub fn new(index: usize, start_time: NaiveDateTime, values: Vec<String>) -> Self {
        use chrono::Datelike;

        TripRecord {
            index,
            start_time,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            values,
        }
    }

    /// Cells as displayed: source values, then `month` and `day_of_week`
    ///
    /// The start-time cell is shown in its parsed, canonical form.
    fn display_cells(&self, start_col: usize) -> Vec<String> {
        let mut cells: Vec<String> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                if i == start_col {
                    self.start_time.format(START_TIME_DISPLAY).to_string()
                } else {
                    v.clone()
                }
            })
            .collect();
        cells.push(self.month.to_string());
        cells.push(weekday_name(self.day_of_week).to_string());
        cells
    }
}

// ============================================================================
// TRIP TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    /// Source headers followed by the derived columns
    columns: Vec<String>,
    /// Position of the start-time column among the source headers
    start_col: usize,
    records: Vec<TripRecord>,
}

impl TripTable {
    /// Build a table from source headers; derived column names are appended
    pub fn new(headers: Vec<String>, start_col: usize, records: Vec<TripRecord>) -> Self {
        let mut columns = headers;
        columns.push(MONTH_COLUMN.to_string());
        columns.push(DAY_OF_WEEK_COLUMN.to_string());

        TripTable {
            columns,
            start_col,
            records,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching both the month and the day filter, in original order
    pub fn filter(&self, spec: &FilterSpec) -> TripTable {
        let records = self
            .records
            .iter()
            .filter(|r| spec.month.matches(r.month) && spec.day.matches(r.day_of_week))
            .cloned()
            .collect();

        TripTable {
            columns: self.columns.clone(),
            start_col: self.start_col,
            records,
        }
    }

    /// Same records, column names in `snake_case` form
    pub fn with_normalized_columns(self) -> TripTable {
        let columns = self.columns.iter().map(|c| normalize_column(c)).collect();
        TripTable { columns, ..self }
    }

    /// Lay out `records` as a plain-text table under this table's header
    ///
    /// Returns an empty string for an empty window.
    pub fn render(&self, records: &[TripRecord]) -> String {
        if records.is_empty() {
            return String::new();
        }

        let index_cells: Vec<String> = records.iter().map(|r| r.index.to_string()).collect();
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| r.display_cells(self.start_col))
            .collect();

        let index_width = index_cells.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&format_line(
            &" ".repeat(index_width),
            self.columns.iter().map(String::as_str),
            &widths,
        ));
        for (index, row) in index_cells.iter().zip(&rows) {
            out.push_str(&format_line(
                &format!("{:>width$}", index, width = index_width),
                row.iter().map(String::as_str),
                &widths,
            ));
        }
        out
    }
}

fn format_line<'a>(lead: &str, cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = lead.to_string();
    for (cell, width) in cells.zip(widths) {
        line.push_str("  ");
        line.push_str(&format!("{:<width$}", cell, width = width));
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

/// "  Start Time " → "start_time"
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{City, DayFilter, Month, MonthFilter};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn sample_table() -> TripTable {
        let dates = [
            at(2017, 1, 2),  // Monday
            at(2017, 3, 7),  // Tuesday
            at(2017, 3, 13), // Monday
            at(2017, 5, 1),  // Monday
            at(2017, 5, 6),  // Saturday
        ];
        let records = dates
            .iter()
            .enumerate()
            .map(|(i, t)| {
                TripRecord::new(
                    i,
                    *t,
                    vec![t.to_string(), format!("{}", 100 + i)],
                )
            })
            .collect();

        TripTable::new(
            vec!["Start Time".to_string(), "Trip Duration".to_string()],
            0,
            records,
        )
    }

    fn indices(table: &TripTable) -> Vec<usize> {
        table.records().iter().map(|r| r.index).collect()
    }

    #[test]
    fn test_record_derives_month_and_weekday() {
        let record = TripRecord::new(0, at(2017, 6, 23), vec![]);
        assert_eq!(record.month, 6);
        assert_eq!(record.day_of_week, Weekday::Fri);
    }

    #[test]
    fn test_derived_columns_are_appended() {
        let table = sample_table();
        assert_eq!(
            table.columns(),
            &["Start Time", "Trip Duration", "month", "day_of_week"]
        );
    }

    #[test]
    fn test_filter_by_month() {
        let table = sample_table();
        let spec = FilterSpec::new(City::Chicago, MonthFilter::Only(Month::March), DayFilter::All);

        let filtered = table.filter(&spec);
        assert_eq!(indices(&filtered), vec![1, 2]);
        assert!(filtered.records().iter().all(|r| r.month == 3));
    }

    #[test]
    fn test_filter_by_month_and_day() {
        let table = sample_table();
        let spec = FilterSpec::new(
            City::Chicago,
            MonthFilter::Only(Month::May),
            DayFilter::Only(Weekday::Mon),
        );

        assert_eq!(indices(&table.filter(&spec)), vec![3]);
    }

    #[test]
    fn test_filter_keeps_order_and_leaves_source_alone() {
        let table = sample_table();
        let spec = FilterSpec::new(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Mon));

        let filtered = table.filter(&spec);
        assert_eq!(indices(&filtered), vec![0, 2, 3]);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_unfiltered_is_identity() {
        let table = sample_table();
        assert_eq!(table.filter(&FilterSpec::unfiltered(City::Washington)), table);
    }

    #[test]
    fn test_normalize_column() {
        assert_eq!(normalize_column("Start Time"), "start_time");
        assert_eq!(normalize_column("  Birth Year "), "birth_year");
        assert_eq!(normalize_column("User Type"), "user_type");
        assert_eq!(normalize_column("month"), "month");
    }

    #[test]
    fn test_with_normalized_columns() {
        let table = sample_table().with_normalized_columns();
        assert_eq!(
            table.columns(),
            &["start_time", "trip_duration", "month", "day_of_week"]
        );
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_render_window() {
        let table = sample_table().with_normalized_columns();
        let rendered = table.render(&table.records()[..2]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("start_time"));
        assert!(lines[0].contains("day_of_week"));
        assert!(lines[1].starts_with("0  2017-01-02 09:30:00"));
        assert!(lines[1].ends_with("Monday"));
        assert!(lines[2].ends_with("Tuesday"));
    }

    #[test]
    fn test_render_empty_window() {
        let table = sample_table();
        assert_eq!(table.render(&[]), "");
    }
}
