// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the salon page behaviours.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, bundled TOML,
//!   TOML embedded in the page)
//! - Type-safe configuration with validation
//!
//! # Usage
//!
//! ```
//! use salon_site_config::load_config_from_toml;
//!
//! let config = load_config_from_toml("[scroll]\nanchor_offset_px = 90\n").unwrap();
//! assert_eq!(config.scroll.anchor_offset_px, 90.0);
//! assert_eq!(config.scroll.back_to_top_threshold_px, 500.0);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::SiteConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved page configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
	pub i18n: I18nConfig,
	pub navigation: NavigationConfig,
	pub scroll: ScrollConfig,
	pub gallery: GalleryConfig,
	pub reveal: RevealConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from `sources`, lowest precedence first.
pub fn load_config(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<SiteConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = SiteConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Load defaults overlaid with one TOML document from the page.
pub fn load_config_from_toml(content: &str) -> Result<SiteConfig, ConfigError> {
	load_config(vec![Box::new(DefaultsSource), Box::new(TomlSource::page(content))])
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: SiteConfigLayer) -> Result<SiteConfig, ConfigError> {
	let i18n = layer.i18n.unwrap_or_default().finalize()?;
	let navigation = layer.navigation.unwrap_or_default().finalize()?;
	let scroll = layer.scroll.unwrap_or_default().finalize()?;
	let gallery = layer.gallery.unwrap_or_default().finalize()?;
	let reveal = layer.reveal.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&scroll)?;

	info!(
		default_locale = ?i18n.default_locale,
		gallery_images = gallery.images.len(),
		lazy_images = reveal.lazy_images,
		"site configuration loaded"
	);

	Ok(SiteConfig {
		i18n,
		navigation,
		scroll,
		gallery,
		reveal,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(scroll: &ScrollConfig) -> Result<(), ConfigError> {
	if scroll.back_to_top_threshold_px < scroll.scrolled_threshold_px {
		return Err(ConfigError::Validation(format!(
			"scroll.back_to_top_threshold_px ({}) must not be below scroll.scrolled_threshold_px ({})",
			scroll.back_to_top_threshold_px, scroll.scrolled_threshold_px
		)));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use salon_common_i18n::Locale;

	#[test]
	fn test_defaults_only() {
		let config = load_config(vec![Box::new(DefaultsSource)]).unwrap();
		assert_eq!(config, SiteConfig::default());
	}

	#[test]
	fn test_page_overrides_bundled_regardless_of_order() {
		let config = load_config(vec![
			Box::new(TomlSource::page("[i18n]\ndefault_locale = \"en\"\n")),
			Box::new(TomlSource::new(
				"bundled",
				"[i18n]\ndefault_locale = \"ar\"\n[scroll]\nanchor_offset_px = 80\n",
				Precedence::Bundled,
			)),
			Box::new(DefaultsSource),
		])
		.unwrap();
		assert_eq!(config.i18n.default_locale, Some(Locale::En));
		assert_eq!(config.scroll.anchor_offset_px, 80.0);
	}

	#[test]
	fn test_cross_field_validation() {
		let err = load_config_from_toml("[scroll]\nscrolled_threshold_px = 600\n").unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn test_full_document() {
		let config = load_config_from_toml(
			r#"
[i18n]
default_locale = "en"

[navigation]
close_delay_ms = 250
mobile_breakpoint_px = 900

[scroll]
scrolled_threshold_px = 80
back_to_top_threshold_px = 400
anchor_offset_px = 90
menu_close_settle_ms = 300

[gallery]
item_gap_px = 24
fallback_step_ratio = 0.5
images = [{ src = "a.jpg", alt = "A" }]

[reveal]
threshold = 0.2
root_margin_bottom_px = -80
lazy_images = false

[logging]
filter = "salon=debug"
"#,
		)
		.unwrap();
		assert_eq!(config.navigation.close_delay_ms, 250);
		assert_eq!(config.navigation.mobile_breakpoint_px, 900.0);
		assert_eq!(config.scroll.menu_close_settle_ms, 300);
		assert_eq!(config.gallery.images.len(), 1);
		assert_eq!(config.reveal.root_margin_bottom_px, -80);
		assert!(!config.reveal.lazy_images);
		assert_eq!(config.logging.filter, "salon=debug");
	}

	proptest! {
		/// Later layers win field by field.
		#[test]
		fn later_layer_wins(first in 0u64..5000, second in 0u64..5000) {
			let config = load_config(vec![
				Box::new(DefaultsSource),
				Box::new(TomlSource::new(
					"bundled",
					format!("[navigation]\nclose_delay_ms = {first}\n"),
					Precedence::Bundled,
				)),
				Box::new(TomlSource::page(format!("[navigation]\nclose_delay_ms = {second}\n"))),
			]).unwrap();
			prop_assert_eq!(config.navigation.close_delay_ms, second);
		}
	}
}
