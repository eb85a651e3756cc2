//! Number and percentage formatting for reports.

/// Formats a number with comma separators for thousands.
///
/// # Examples
///
/// ```
/// use rejected_record_tools::utils::format::format_number;
///
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats a 0.0 to 1.0 ratio as a percentage with two decimals.
///
/// ```
/// use rejected_record_tools::utils::format::format_percent;
///
/// assert_eq!(format_percent(0.6), "60.00 %");
/// ```
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2} %", ratio * 100.0)
}
