//! Locale data and resolution types.

mod builtin;

pub use builtin::Locale;

/// The locale code used when a call names none.
pub const DEFAULT_LOCALE: &str = "en";

/// How a format call names its locale.
#[derive(Debug, Clone, Copy, Default)]
pub enum LocaleSpec<'a> {
    /// Use the formatter's default locale code.
    #[default]
    Default,
    /// A registered locale code; an empty code means the default.
    Code(&'a str),
    /// A caller-supplied table, used directly without any registry lookup.
    Inline(&'a Locale),
}

impl<'a> From<&'a str> for LocaleSpec<'a> {
    fn from(code: &'a str) -> Self {
        LocaleSpec::Code(code)
    }
}

impl<'a> From<&'a Locale> for LocaleSpec<'a> {
    fn from(locale: &'a Locale) -> Self {
        LocaleSpec::Inline(locale)
    }
}

/// Outcome of locale resolution.
///
/// A `Code` is dereferenced lazily: the table lookup happens only when a
/// resolver needs it, falling back to the `en` entry for codes that were
/// never registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocaleRef<'a> {
    Code(&'a str),
    Table(&'a Locale),
}
