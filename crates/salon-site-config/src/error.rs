// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	/// TOML parsing error
	#[error("TOML parse error in {source_name}: {source}")]
	TomlParse {
		source_name: String,
		#[source]
		source: toml::de::Error,
	},

	/// Invalid value
	#[error("Invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },

	/// Validation error
	#[error("Validation error: {0}")]
	Validation(String),
}

impl ConfigError {
	pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
		ConfigError::InvalidValue {
			field: field.to_string(),
			message: message.into(),
		}
	}
}
