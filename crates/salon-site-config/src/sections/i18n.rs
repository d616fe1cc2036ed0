// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.

use salon_common_i18n::{resolve_locale, Locale};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let default_locale = match self.default_locale {
			Some(code) => Some(
				Locale::from_code(&code)
					.ok_or_else(|| ConfigError::invalid("i18n.default_locale", format!("unsupported locale '{code}'")))?,
			),
			None => None,
		};
		Ok(I18nConfig { default_locale })
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18nConfig {
	/// Explicitly configured starting locale.
	pub default_locale: Option<Locale>,
}

impl I18nConfig {
	/// Starting locale: the configured one, else the document's `lang`,
	/// else Arabic.
	pub fn initial_locale(&self, document_lang: Option<&str>) -> Locale {
		resolve_locale(self.default_locale.map(Locale::code), document_lang)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_arabic() {
		assert_eq!(I18nConfig::default().initial_locale(None), Locale::Ar);
		assert_eq!(I18nConfigLayer::default().finalize().unwrap(), I18nConfig::default());
	}

	#[test]
	fn test_document_lang_used_when_unconfigured() {
		assert_eq!(I18nConfig::default().initial_locale(Some("en-US")), Locale::En);
		let config = I18nConfig {
			default_locale: Some(Locale::Ar),
		};
		assert_eq!(config.initial_locale(Some("en")), Locale::Ar);
	}

	#[test]
	fn test_finalize_parses_locale() {
		let layer = I18nConfigLayer {
			default_locale: Some("en".to_string()),
		};
		assert_eq!(layer.finalize().unwrap().default_locale, Some(Locale::En));
	}

	#[test]
	fn test_finalize_rejects_unknown_locale() {
		let layer = I18nConfigLayer {
			default_locale: Some("fr".to_string()),
		};
		let err = layer.finalize().unwrap_err();
		assert!(err.to_string().contains("i18n.default_locale"));
	}
}
