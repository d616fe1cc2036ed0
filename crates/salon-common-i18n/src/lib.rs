// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the salon landing page.
//!
//! The page ships in exactly two locales: Arabic (`ar`, right-to-left, the
//! default) and English (`en`, left-to-right). Each locale has a flat
//! key/value catalog embedded at build time from `locales/<code>.toml`.
//!
//! # String Naming Convention
//!
//! Keys use a hierarchical dot-notation that mirrors the page sections:
//!
//! - `nav.` for the navigation bar
//! - `hero.`, `about.`, `services.`, `gallery.`, `contact.` for page sections
//! - `footer.` for the footer
//! - `page.title` for the document title
//!
//! A key missing from a locale is not an error: lookups return `None` and the
//! caller keeps whatever text it already shows.
//!
//! # Example
//!
//! ```
//! use salon_common_i18n::{t, Direction, Locale};
//!
//! assert_eq!(t(Locale::En, "nav.home"), Some("Home"));
//! assert_eq!(Locale::Ar.direction(), Direction::Rtl);
//! assert_eq!(Locale::Ar.other(), Locale::En);
//! assert_eq!(t(Locale::En, "no.such.key"), None);
//! ```

mod catalog;
mod error;
mod locale;
mod resolve;

pub use catalog::{embedded, t, Catalog, TITLE_KEY};
pub use error::I18nError;
pub use locale::{available_locales, is_rtl, is_supported, Direction, Locale, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
