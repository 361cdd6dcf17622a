use dtfmt::{FormatError, Formatter};

const MOCK_DATE: &str = "2020-06-12T12:01:24.125+02:00";

#[test]
fn test_empty_pattern_is_rejected() {
    let fmt = Formatter::new();
    let err = fmt.format("", MOCK_DATE).unwrap_err();
    assert_eq!(err, FormatError::EmptyFormat);
    assert_eq!(err.to_string(), "format pattern must be a non-empty string");
}

#[test]
fn test_unparseable_date_is_rejected() {
    let fmt = Formatter::new();
    let err = fmt.format("YY", "yesterday-ish").unwrap_err();
    assert!(matches!(err, FormatError::InvalidDate { .. }));
    assert!(err.to_string().contains("ISO-8601"));
}

#[test]
fn test_error_kinds_are_distinct() {
    let fmt = Formatter::new();
    assert_ne!(
        fmt.format("", MOCK_DATE).unwrap_err(),
        fmt.format("YY", "garbage").unwrap_err()
    );
}

#[test]
fn test_unknown_tokens_do_not_error() {
    // Unknown characters degrade to literals rather than erroring
    let fmt = Formatter::new();
    assert_eq!(fmt.format("??", MOCK_DATE).unwrap(), "??");
}

#[test]
fn test_unknown_locale_does_not_error() {
    let fmt = Formatter::new();
    assert!(fmt.format_with("MMMM", MOCK_DATE, "zz").is_ok());
}
