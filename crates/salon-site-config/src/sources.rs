// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults and TOML documents.

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::SiteConfigLayer;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	Bundled = 20,
	Page = 30,
}

/// Trait for configuration sources.
pub trait ConfigSource {
	fn name(&self) -> &str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SiteConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(SiteConfigLayer::default())
	}
}

/// A TOML document already in memory, such as one bundled with the binary
/// or read from a `<script type="application/toml">` element.
pub struct TomlSource {
	name: String,
	content: String,
	precedence: Precedence,
}

impl TomlSource {
	pub fn new(name: impl Into<String>, content: impl Into<String>, precedence: Precedence) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
			precedence,
		}
	}

	/// Configuration embedded in the page itself.
	pub fn page(content: impl Into<String>) -> Self {
		Self::new("page", content, Precedence::Page)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &str {
		&self.name
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<SiteConfigLayer, ConfigError> {
		if self.content.trim().is_empty() {
			debug!(source = %self.name, "config document empty, skipping");
			return Ok(SiteConfigLayer::default());
		}

		let layer: SiteConfigLayer =
			toml::from_str(&self.content).map_err(|e| ConfigError::TomlParse {
				source_name: self.name.clone(),
				source: e,
			})?;

		trace!(source = %self.name, "parsed config layer from TOML");
		Ok(layer)
	}
}
