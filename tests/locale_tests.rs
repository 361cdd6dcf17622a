use dtfmt::{Formatter, Locale, LocaleRef, LocaleSpec};

const MOCK_DATE: &str = "2020-06-12T12:01:24.125+02:00";

#[test]
fn test_resolve_locale_falsy_is_default() {
    let fmt = Formatter::new();
    assert_eq!(fmt.resolve_locale(LocaleSpec::Default), LocaleRef::Code("en"));
    assert_eq!(fmt.resolve_locale(LocaleSpec::Code("")), LocaleRef::Code("en"));
}

#[test]
fn test_resolve_locale_passes_codes_through() {
    let fmt = Formatter::new();
    // Codes pass through unchanged whether or not they are registered;
    // the table lookup happens lazily
    for code in ["en", "pl", "fr", "ru", "uk", "tt"] {
        assert_eq!(fmt.resolve_locale(LocaleSpec::Code(code)), LocaleRef::Code(code));
    }
}

#[test]
fn test_resolve_locale_inline_table_identity() {
    let fmt = Formatter::new();
    let custom = Locale::en();
    match fmt.resolve_locale(LocaleSpec::Inline(&custom)) {
        LocaleRef::Table(table) => assert!(std::ptr::eq(table, &custom)),
        LocaleRef::Code(code) => panic!("inline locale resolved to code {code:?}"),
    }
}

#[test]
fn test_unregistered_code_falls_back_to_en() {
    let fmt = Formatter::new();
    assert_eq!(fmt.format_with("MMMM", MOCK_DATE, "xx").unwrap(), "June");
}

#[test]
fn test_builtin_locales() {
    let fmt = Formatter::new();
    assert_eq!(fmt.format_with("MMMM", MOCK_DATE, "pl").unwrap(), "czerwiec");
    assert_eq!(fmt.format_with("DDD", MOCK_DATE, "pl").unwrap(), "piątek");
    assert_eq!(fmt.format_with("MMMM", MOCK_DATE, "fr").unwrap(), "juin");
    assert_eq!(fmt.format_with("DD", MOCK_DATE, "fr").unwrap(), "ven.");
}

#[test]
fn test_register_locale() {
    let mut fmt = Formatter::new();
    let mut pirate = Locale::en();
    pirate.month_names_full[5] = "Junargh";
    fmt.register_locale("pirate", pirate);

    assert_eq!(
        fmt.format_with("MMMM YYYY", MOCK_DATE, "pirate").unwrap(),
        "Junargh 2020"
    );
}

#[test]
fn test_register_locale_overwrites() {
    let mut fmt = Formatter::new();
    let mut shouting = Locale::en();
    shouting.month_names_full[5] = "JUNE";
    fmt.register_locale("en", shouting);

    assert_eq!(fmt.format("MMMM", MOCK_DATE).unwrap(), "JUNE");
}

#[test]
fn test_set_locale_changes_default() {
    let mut fmt = Formatter::new();
    fmt.set_locale("pl");
    assert_eq!(fmt.format("MMMM", MOCK_DATE).unwrap(), "czerwiec");
    assert_eq!(fmt.resolve_locale(LocaleSpec::Default), LocaleRef::Code("pl"));

    // Empty code resets to en
    fmt.set_locale("");
    assert_eq!(fmt.format("MMMM", MOCK_DATE).unwrap(), "June");
}

#[test]
fn test_inline_locale_bypasses_registry() {
    let fmt = Formatter::new();
    let mut custom = Locale::en();
    custom.meridiem_upper = ["ANTE", "POST"];
    assert_eq!(fmt.format_with("A", MOCK_DATE, &custom).unwrap(), "POST");
}
