use std::collections::HashMap;

use chrono::NaiveDate;

use super::forecast_series::TimeSeriesPoint;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_index(abbr: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == abbr).map(|i| i as u32)
}

fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Sort key of a `"Mon-YYYY"` period label.
///
/// Labels that are not two `-` separated parts with a numeric year sort
/// first (Unix epoch). An unrecognised month abbreviation counts as January.
pub fn period_key(label: &str) -> NaiveDate {
    let parts: Vec<&str> = label.split('-').collect();
    let [month, year] = parts.as_slice() else {
        return epoch();
    };
    let Ok(year) = year.trim().parse::<i32>() else {
        return epoch();
    };
    let month0 = month_index(month.trim()).unwrap_or(0);
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or_else(epoch)
}

/// Stable ascending sort by `period_key`
pub fn sort_periods(labels: &mut [String]) {
    labels.sort_by_key(|label| period_key(label));
}

pub fn sorted_periods<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = labels.into_iter().map(Into::into).collect();
    sort_periods(&mut out);
    out
}

/// Period → value map as a chronologically ordered series.
///
/// Labels with the same key keep alphabetical order so the result does not
/// depend on map iteration order.
pub fn chronological_series(values: &HashMap<String, f64>) -> Vec<TimeSeriesPoint> {
    let mut labels: Vec<&String> = values.keys().collect();
    labels.sort();
    labels.sort_by_key(|label| period_key(label));
    labels
        .into_iter()
        .map(|label| TimeSeriesPoint::new(label.clone(), values[label]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_month_order() {
        let sorted = sorted_periods(["Mar-2024", "Jan-2024", "Feb-2024"]);
        assert_eq!(sorted, vec!["Jan-2024", "Feb-2024", "Mar-2024"]);
    }

    #[test]
    fn test_year_boundary() {
        let sorted = sorted_periods(["Jan-2024", "Dec-2023", "Nov-2023"]);
        assert_eq!(sorted, vec!["Nov-2023", "Dec-2023", "Jan-2024"]);
    }

    #[test]
    fn test_keys() {
        assert_eq!(period_key("Jan-2024"), date(2024, 1));
        assert_eq!(period_key("Dec-2023"), date(2023, 12));
        assert_eq!(period_key("Foo-2024"), date(2024, 1));
        assert_eq!(period_key("2024"), epoch());
        assert_eq!(period_key("Jan-20-24"), epoch());
        assert_eq!(period_key("Jan-xx"), epoch());
        assert_eq!(period_key(""), epoch());
    }

    #[test]
    fn test_malformed_sorts_first_and_is_stable() {
        let sorted = sorted_periods(["Feb-2024", "weird", "Jan-2024", "also weird"]);
        assert_eq!(sorted, vec!["weird", "also weird", "Jan-2024", "Feb-2024"]);
    }

    #[test]
    fn test_idempotent() {
        let once = sorted_periods(["Jun-2023", "Feb-2024", "bad", "Jan-2023", "Foo-2023"]);
        let twice = sorted_periods(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_chronological_series() {
        let values = HashMap::from([
            ("Mar-2024".to_string(), 3.0),
            ("Jan-2024".to_string(), 1.0),
            ("Feb-2024".to_string(), 2.0),
        ]);
        let series = chronological_series(&values);
        let labels: Vec<&str> = series.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(labels, vec!["Jan-2024", "Feb-2024", "Mar-2024"]);
        assert_eq!(series[2].value, 3.0);
    }
}
