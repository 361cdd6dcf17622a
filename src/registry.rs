//! Token and preset registry.
//!
//! Tokens are kept in registration order; pattern scanning asks for the
//! longest identifier matching at the current position, so a one-letter
//! token is never chosen where a longer one fits (`YYYY` over `YY`).
//! Presets map a name to a fixed pattern and are expanded only by an exact
//! whole-pattern match, which keeps names like `ISODate` from colliding
//! with the single-letter tokens they contain.

use std::collections::HashMap;
use std::sync::Arc;

use crate::calendar::CalendarTime;
use crate::formatter::resolvers;
use crate::locale::Locale;

/// A token's value resolver: a pure function of the calendar time and the
/// effective locale table.
pub type Resolver = Arc<dyn Fn(&CalendarTime, &Locale) -> String + Send + Sync>;

struct TokenEntry {
    identifier: String,
    resolver: Resolver,
}

/// Registered tokens and named presets.
pub(crate) struct TokenRegistry {
    tokens: Vec<TokenEntry>,
    presets: HashMap<String, String>,
}

impl TokenRegistry {
    /// Registry with the full built-in token set and the ISO presets.
    pub(crate) fn builtin() -> Self {
        let mut registry = TokenRegistry {
            tokens: Vec::new(),
            presets: HashMap::new(),
        };

        registry.register_token("YYYY", resolvers::year4);
        registry.register_token("YY", resolvers::year2);
        registry.register_token("MMMM", resolvers::month_full);
        registry.register_token("MMM", resolvers::month_abbr);
        registry.register_token("MM", resolvers::month2);
        registry.register_token("M", resolvers::month);
        registry.register_token("DDD", resolvers::weekday_full);
        registry.register_token("DD", resolvers::weekday_abbr);
        registry.register_token("D", resolvers::weekday_letter);
        registry.register_token("dd", resolvers::day2);
        registry.register_token("d", resolvers::day);
        registry.register_token("HH", resolvers::hour24_2);
        registry.register_token("H", resolvers::hour24);
        registry.register_token("hh", resolvers::hour12_2);
        registry.register_token("h", resolvers::hour12);
        registry.register_token("mm", resolvers::minute2);
        registry.register_token("m", resolvers::minute);
        registry.register_token("ss", resolvers::second2);
        registry.register_token("s", resolvers::second);
        registry.register_token("ff", resolvers::milliseconds);
        registry.register_token("f", resolvers::milliseconds);
        registry.register_token("A", resolvers::meridiem_upper);
        registry.register_token("a", resolvers::meridiem_lower);
        registry.register_token("ZZ", resolvers::offset_plain);
        registry.register_token("Z", resolvers::offset_colon);

        registry.register_preset("ISODate", "YYYY-MM-dd");
        registry.register_preset("ISOTime", "hh:mm:ss");
        registry.register_preset("ISODateTime", "YYYY-MM-ddThh:mm:ss");
        registry.register_preset("ISODateTimeTZ", "YYYY-MM-ddThh:mm:ssZZ");

        registry
    }

    /// Adds a token, or replaces the resolver of an existing identifier.
    /// Last writer wins; the identifier keeps its original position.
    pub(crate) fn register_token<F>(&mut self, identifier: impl Into<String>, resolver: F)
    where
        F: Fn(&CalendarTime, &Locale) -> String + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let resolver: Resolver = Arc::new(resolver);
        match self
            .tokens
            .iter_mut()
            .find(|entry| entry.identifier == identifier)
        {
            Some(entry) => entry.resolver = resolver,
            None => self.tokens.push(TokenEntry {
                identifier,
                resolver,
            }),
        }
    }

    /// Adds or replaces a named preset.
    pub(crate) fn register_preset(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.presets.insert(name.into(), pattern.into());
    }

    /// Expansion pattern for a preset name, if registered.
    pub(crate) fn preset(&self, name: &str) -> Option<&str> {
        self.presets.get(name).map(String::as_str)
    }

    /// The longest registered identifier that `input` starts with.
    pub(crate) fn longest_match<'a>(&'a self, input: &str) -> Option<&'a str> {
        let mut best: Option<&str> = None;
        for entry in &self.tokens {
            if input.starts_with(entry.identifier.as_str()) {
                match best {
                    Some(found) if found.len() >= entry.identifier.len() => {}
                    _ => best = Some(&entry.identifier),
                }
            }
        }
        best
    }

    /// Resolver for an exact identifier.
    pub(crate) fn resolver(&self, identifier: &str) -> Option<&Resolver> {
        self.tokens
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| &entry.resolver)
    }

    /// Registered token identifiers, in registration order.
    pub(crate) fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|entry| entry.identifier.as_str())
    }
}
