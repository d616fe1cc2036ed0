// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-locale key/value catalogs.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::error::I18nError;
use crate::locale::Locale;

/// Root-level key holding the document title.
pub const TITLE_KEY: &str = "page.title";

const AR_SOURCE: &str = include_str!("../locales/ar.toml");
const EN_SOURCE: &str = include_str!("../locales/en.toml");

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
	match Catalog::from_sources(&[(Locale::Ar, AR_SOURCE), (Locale::En, EN_SOURCE)]) {
		Ok(catalog) => catalog,
		Err(e) => {
			error!(error = %e, "embedded catalog is malformed, translations disabled");
			Catalog::new()
		}
	}
});

/// The catalogs compiled into the binary.
pub fn embedded() -> &'static Catalog {
	&EMBEDDED
}

/// Look up `key` in the embedded catalog for `locale`.
pub fn t(locale: Locale, key: &str) -> Option<&'static str> {
	embedded().lookup(locale, key)
}

/// Translation dictionaries for every supported locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	entries: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse one flat TOML document per locale.
	pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, I18nError> {
		let mut catalog = Self::new();
		for (locale, source) in sources {
			let entries: BTreeMap<String, String> =
				toml::from_str(source).map_err(|e| I18nError::CatalogParse {
					locale: locale.code(),
					source: e,
				})?;
			debug!(locale = %locale, keys = entries.len(), "loaded catalog");
			catalog.entries.insert(*locale, entries);
		}
		Ok(catalog)
	}

	/// Add or replace one entry.
	pub fn with_entry(mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(locale, key, value);
		self
	}

	pub fn insert(&mut self, locale: Locale, key: impl Into<String>, value: impl Into<String>) {
		self.entries
			.entry(locale)
			.or_default()
			.insert(key.into(), value.into());
	}

	pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
		self.entries
			.get(&locale)
			.and_then(|entries| entries.get(key))
			.map(String::as_str)
	}

	pub fn contains(&self, locale: Locale, key: &str) -> bool {
		self.lookup(locale, key).is_some()
	}

	pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
		self.entries
			.get(&locale)
			.into_iter()
			.flat_map(|entries| entries.keys().map(String::as_str))
	}

	pub fn len(&self, locale: Locale) -> usize {
		self.entries.get(&locale).map_or(0, BTreeMap::len)
	}

	pub fn is_empty(&self) -> bool {
		self.entries.values().all(BTreeMap::is_empty)
	}

	/// Keys present in some locale but absent from another, as
	/// `(locale missing the key, key)` pairs.
	pub fn missing_keys(&self) -> Vec<(Locale, String)> {
		let all: BTreeSet<&str> = Locale::ALL.iter().flat_map(|l| self.keys(*l)).collect();
		let mut missing = Vec::new();
		for locale in Locale::ALL {
			for key in &all {
				if !self.contains(locale, key) {
					missing.push((locale, (*key).to_string()));
				}
			}
		}
		missing
	}
}
