// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
	#[error("unsupported locale: {0}")]
	UnknownLocale(String),

	#[error("failed to parse catalog for locale {locale}: {source}")]
	CatalogParse {
		locale: &'static str,
		#[source]
		source: toml::de::Error,
	},
}
