//! dtfmt - locale-aware date and time formatting with a compact token grammar
//!
//! This crate renders dates and times from format patterns built out of
//! tokens such as `YYYY`, `MM`, `DDD`, `hh`, `a`, and `ZZ`, with named
//! presets (`ISODate`, `ISODateTime`, ...), pluggable locales, and runtime
//! registration of custom tokens and presets. Characters matched by no
//! token pass through unchanged, so arbitrary literal text can be embedded
//! in a pattern.
//!
//! ```
//! use dtfmt::Formatter;
//!
//! let mut fmt = Formatter::new();
//! let date = "2020-06-12T12:01:24.125+02:00";
//!
//! assert_eq!(fmt.format("DDD, MMMM d", date).unwrap(), "Friday, June 12");
//! assert_eq!(fmt.format("ISODate", date).unwrap(), "2020-06-12");
//!
//! fmt.register_token("Q", |t, _| (1 + (t.month() - 1) / 3).to_string());
//! assert_eq!(fmt.format("YYYY Q", date).unwrap(), "2020 2");
//! ```

pub mod error;
pub mod value;

mod cache;
mod calendar;
mod formatter;
mod locale;
mod registry;

pub use calendar::CalendarTime;
pub use error::FormatError;
pub use formatter::Formatter;
pub use locale::{Locale, LocaleRef, LocaleSpec, DEFAULT_LOCALE};
pub use registry::Resolver;
pub use value::DateLike;
