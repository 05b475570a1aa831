//! Number formatting for tables, cards and chart axes

/// How a metric value is rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// US dollars with 2 decimals
    Money,
    Integer,
    Number { decimals: u8 },
    Percent { decimals: u8 },
}

/// Formats a number with a thousands separator (comma) and the given decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// `$1,234.50`, negative values as `-$1,234.50`
pub fn format_money(value: f64) -> String {
    let formatted = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

/// Short axis label: `950`, `1.2K`, `3.4M`
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_number_with_decimals(value, 0)
    }
}

pub fn format_value(value: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format_money(value),
        ValueFormat::Integer => format_number_int(value),
        ValueFormat::Number { decimals } => format_number_with_decimals(value, decimals),
        ValueFormat::Percent { decimals } => format_percent(value, decimals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1234567.89), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1,234");
        assert_eq!(format_number_with_decimals(f64::NAN, 2), "-");
    }

    #[test]
    fn test_percent_and_compact() {
        assert_eq!(format_percent(12.5, 1), "12.5%");
        assert_eq!(format_value(33.333, ValueFormat::Percent { decimals: 1 }), "33.3%");
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1250.0), "1.2K");
        assert_eq!(format_compact(3_400_000.0), "3.4M");
    }
}
