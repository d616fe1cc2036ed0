// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales and their metadata.

use std::fmt;
use std::str::FromStr;

use crate::error::I18nError;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
	#[default]
	Ltr,
	Rtl,
}

impl Direction {
	/// Value for the HTML `dir` attribute.
	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	pub fn is_rtl(&self) -> bool {
		matches!(self, Direction::Rtl)
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One of the two display languages of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
	Ar,
	En,
}

/// Static metadata describing a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	pub locale: Locale,
	pub code: &'static str,
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
	/// Label a language toggle shows to offer switching *to* this locale.
	pub toggle_label: &'static str,
}

pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		locale: Locale::Ar,
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
		toggle_label: "عربي",
	},
	LocaleInfo {
		locale: Locale::En,
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
		toggle_label: "EN",
	},
];

pub const DEFAULT_LOCALE: Locale = Locale::Ar;

impl Locale {
	pub const ALL: [Locale; 2] = [Locale::Ar, Locale::En];

	pub fn info(self) -> &'static LocaleInfo {
		match self {
			Locale::Ar => &LOCALES[0],
			Locale::En => &LOCALES[1],
		}
	}

	pub fn code(self) -> &'static str {
		self.info().code
	}

	pub fn direction(self) -> Direction {
		self.info().direction
	}

	/// The locale a toggle switches to from this one.
	pub fn other(self) -> Locale {
		match self {
			Locale::Ar => Locale::En,
			Locale::En => Locale::Ar,
		}
	}

	/// Parse a language tag. Only the primary subtag is considered, so
	/// `ar-EG` and `EN_us` are accepted.
	pub fn from_code(code: &str) -> Option<Locale> {
		let primary = code.split(['-', '_']).next().unwrap_or_default();
		LOCALES
			.iter()
			.find(|info| info.code.eq_ignore_ascii_case(primary))
			.map(|info| info.locale)
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::from_code(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
	}
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}

pub fn is_supported(code: &str) -> bool {
	Locale::from_code(code).is_some()
}

pub fn is_rtl(code: &str) -> bool {
	Locale::from_code(code).is_some_and(|locale| locale.direction().is_rtl())
}
