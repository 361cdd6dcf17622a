//! The formatting engine.

pub(crate) mod resolvers;

use std::collections::HashMap;

use crate::cache::PatternCache;
use crate::calendar::CalendarTime;
use crate::error::FormatError;
use crate::locale::{Locale, LocaleRef, LocaleSpec, DEFAULT_LOCALE};
use crate::registry::TokenRegistry;
use crate::value::DateLike;

/// One segment of a tokenized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    /// A registered token identifier, resolved per call.
    Token(String),
    /// Characters matched by no token, passed through unchanged.
    Literal(String),
}

/// A date/time formatter: owns the token registry, preset table, locale
/// table, and default locale code.
///
/// One instance is constructed at startup, configured, and then shared by
/// reference with every call site. Registration methods take `&mut self`,
/// so the borrow checker serializes configuration against in-flight
/// `format` calls; `format` itself takes `&self` and is safe to call from
/// many threads at once.
///
/// ```
/// use dtfmt::Formatter;
///
/// let fmt = Formatter::new();
/// let date = "2020-06-12T12:01:24.125+02:00";
/// assert_eq!(fmt.format("YYYY-MM-dd", date).unwrap(), "2020-06-12");
/// assert_eq!(fmt.format("ISODateTime", date).unwrap(), "2020-06-12T12:01:24");
/// assert_eq!(fmt.format("h:mm a", date).unwrap(), "12:01 pm");
/// ```
pub struct Formatter {
    registry: TokenRegistry,
    locales: HashMap<String, Locale>,
    default_locale: String,
    cache: PatternCache,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// A formatter with the built-in token set, the ISO presets, and the
    /// built-in locales (`en` default, `pl`, `fr`).
    pub fn new() -> Self {
        let mut locales = HashMap::new();
        locales.insert("en".to_string(), Locale::en());
        locales.insert("pl".to_string(), Locale::pl());
        locales.insert("fr".to_string(), Locale::fr());

        Formatter {
            registry: TokenRegistry::builtin(),
            locales,
            default_locale: DEFAULT_LOCALE.to_string(),
            cache: PatternCache::new(),
        }
    }

    /// Formats `date` with the given pattern or preset name, using the
    /// default locale.
    pub fn format<'a>(
        &self,
        pattern: &str,
        date: impl Into<DateLike<'a>>,
    ) -> Result<String, FormatError> {
        self.format_with(pattern, date, LocaleSpec::Default)
    }

    /// Formats `date` with the given pattern or preset name and an explicit
    /// locale choice.
    ///
    /// If `pattern` exactly matches a preset name it is replaced by the
    /// preset's expansion first (one level, presets do not nest). The
    /// pattern is then scanned left to right, longest registered token
    /// first; characters matched by no token pass through unchanged.
    pub fn format_with<'a, 'b>(
        &self,
        pattern: &str,
        date: impl Into<DateLike<'a>>,
        locale: impl Into<LocaleSpec<'b>>,
    ) -> Result<String, FormatError> {
        if pattern.is_empty() {
            return Err(FormatError::EmptyFormat);
        }
        let time = date.into().into_calendar_time()?;
        let locale = self.locale_table(self.resolve_locale(locale.into()));

        let expanded = self.registry.preset(pattern).unwrap_or(pattern);
        let pieces = self.cache.get_or_tokenize(expanded, &self.registry);

        let mut out = String::with_capacity(expanded.len());
        for piece in &pieces {
            match piece {
                Piece::Token(identifier) => match self.registry.resolver(identifier) {
                    Some(resolver) => out.push_str(&resolver(&time, locale)),
                    // Identifier vanished between tokenization and render;
                    // registrations never remove, so keep it literal.
                    None => out.push_str(identifier),
                },
                Piece::Literal(text) => out.push_str(text),
            }
        }
        Ok(out)
    }

    /// Sets the default locale code used when a call names none.
    /// An empty code resets to `"en"`.
    pub fn set_locale(&mut self, code: &str) {
        self.default_locale = if code.is_empty() {
            DEFAULT_LOCALE.to_string()
        } else {
            code.to_string()
        };
    }

    /// Adds or replaces a locale entry.
    pub fn register_locale(&mut self, code: impl Into<String>, locale: Locale) {
        self.locales.insert(code.into(), locale);
    }

    /// Adds a token, or replaces the resolver of an existing identifier.
    /// Last writer wins; no error on overwrite.
    pub fn register_token<F>(&mut self, identifier: impl Into<String>, resolver: F)
    where
        F: Fn(&CalendarTime, &Locale) -> String + Send + Sync + 'static,
    {
        self.registry.register_token(identifier, resolver);
        // A new identifier can change how cached patterns split.
        self.cache.clear();
    }

    /// Adds or replaces a named preset expanding to the given pattern.
    pub fn register_preset(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.registry.register_preset(name, pattern);
    }

    /// Registered token identifiers, in registration order, including
    /// custom registrations.
    pub fn list_formatters(&self) -> Vec<String> {
        self.registry.identifiers().map(String::from).collect()
    }

    /// Resolves the locale choice for one call.
    ///
    /// An inline table is returned as-is; an empty or absent code resolves
    /// to the default locale code; any other code passes through unchanged,
    /// to be dereferenced lazily by [`Formatter::locale_table`].
    pub fn resolve_locale<'a>(&'a self, spec: LocaleSpec<'a>) -> LocaleRef<'a> {
        match spec {
            LocaleSpec::Inline(table) => LocaleRef::Table(table),
            LocaleSpec::Default | LocaleSpec::Code("") => LocaleRef::Code(&self.default_locale),
            LocaleSpec::Code(code) => LocaleRef::Code(code),
        }
    }

    /// Dereferences a resolved locale. Codes with no registered entry fall
    /// back to the `en` table; there is no locale error condition.
    pub fn locale_table<'a>(&'a self, locale: LocaleRef<'a>) -> &'a Locale {
        match locale {
            LocaleRef::Table(table) => table,
            LocaleRef::Code(code) => self
                .locales
                .get(code)
                .unwrap_or_else(|| &self.locales[DEFAULT_LOCALE]),
        }
    }
}

/// Splits a pattern into tokens and literal runs.
///
/// At each position the longest registered identifier wins; unmatched
/// characters accumulate into literal runs.
pub(crate) fn tokenize(pattern: &str, registry: &TokenRegistry) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(identifier) = registry.longest_match(rest) {
            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            rest = &rest[identifier.len()..];
            pieces.push(Piece::Token(identifier.to_string()));
        } else {
            let ch = rest.chars().next().unwrap();
            literal.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    pieces
}
