//! Rejection line recognition.
//!
//! A rejected record line written by the data load looks like:
//!
//! ```text
//! \\ Member Ac.0170100 Not Found In Database
//! ```
//!
//! followed by the original record text. The member name is whatever sits
//! between the two fixed markers.

/// Marker a rejection line starts with. Note the trailing space.
pub const REJECT_PREFIX: &str = r"\\ Member ";

/// Marker that closes the member name. Note the leading space.
pub const REJECT_SUFFIX: &str = " Not Found In Database";

/// Extracts the member name from a rejection line.
///
/// Returns `None` when the line does not start with [`REJECT_PREFIX`] or when
/// no [`REJECT_SUFFIX`] follows it. A prefix immediately followed by the suffix
/// yields `Some("")`, which callers count like any other member.
///
/// # Examples
///
/// ```
/// use rejected_record_tools::reject::match_member;
///
/// let line = r"\\ Member January Not Found In Database	Actual	100";
/// assert_eq!(match_member(line), Some("January"));
/// assert_eq!(match_member("OK/INFO - 1003037 - Data Load Updated"), None);
/// ```
pub fn match_member(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(REJECT_PREFIX)?;
    let end = rest.find(REJECT_SUFFIX)?;
    Some(&rest[..end])
}

/// Returns true when `line` is a rejection line.
pub fn is_rejection(line: &str) -> bool {
    match_member(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_member() {
        let line = r"\\ Member Ac.0170100 Not Found In Database";
        assert_eq!(match_member(line), Some("Ac.0170100"));
    }

    #[test]
    fn test_trailing_record_text_is_ignored() {
        let line = r#"\\ Member FY13 Not Found In Database	"Budget" "Working" 42.5"#;
        assert_eq!(match_member(line), Some("FY13"));
    }

    #[test]
    fn test_member_with_spaces() {
        let line = r"\\ Member Total Operating Expense Not Found In Database";
        assert_eq!(match_member(line), Some("Total Operating Expense"));
    }

    #[test]
    fn test_missing_suffix_is_not_a_match() {
        assert_eq!(match_member(r"\\ Member Ac.0170100"), None);
        assert_eq!(match_member(r"\\ Member Ac.0170100 Not Found"), None);
    }

    #[test]
    fn test_prefix_must_start_the_line() {
        let line = r"  \\ Member Ac.0170100 Not Found In Database";
        assert_eq!(match_member(line), None);
        assert_eq!(match_member("Member Ac.0170100 Not Found In Database"), None);
        assert_eq!(match_member(r"\ Member Ac.0170100 Not Found In Database"), None);
    }

    #[test]
    fn test_empty_member() {
        let line = r"\\ Member  Not Found In Database";
        assert_eq!(match_member(line), Some(""));
    }

    #[test]
    fn test_first_suffix_wins() {
        let line = r"\\ Member A Not Found In Database B Not Found In Database";
        assert_eq!(match_member(line), Some("A"));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(match_member(""), None);
        assert!(!is_rejection(""));
    }

    #[test]
    fn test_is_rejection() {
        assert!(is_rejection(r"\\ Member X Not Found In Database"));
        assert!(!is_rejection(r"\\ Member X"));
    }
}
