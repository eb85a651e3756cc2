// format_number inserts thousands separators (e.g., 1234567 -> "1,234,567")

use rejected_record_tools::utils::format::{format_number, format_percent};

#[test]
fn test_format_number_small() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(42), "42");
    assert_eq!(format_number(999), "999");
}

#[test]
fn test_format_number_thousands() {
    assert_eq!(format_number(1_000), "1,000");
    assert_eq!(format_number(50_000), "50,000");
    assert_eq!(format_number(999_999), "999,999");
}

#[test]
fn test_format_number_millions() {
    assert_eq!(format_number(1_000_000), "1,000,000");
    assert_eq!(format_number(12_345_678), "12,345,678");
}

#[test]
fn test_format_percent_two_decimals() {
    assert_eq!(format_percent(0.6), "60.00 %");
    assert_eq!(format_percent(0.5), "50.00 %");
    assert_eq!(format_percent(0.0), "0.00 %");
}
