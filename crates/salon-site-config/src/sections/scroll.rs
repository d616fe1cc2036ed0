// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scroll behaviour configuration section.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfigLayer {
	pub scrolled_threshold_px: Option<f64>,
	pub back_to_top_threshold_px: Option<f64>,
	pub anchor_offset_px: Option<f64>,
	pub menu_close_settle_ms: Option<u64>,
}

impl ScrollConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.scrolled_threshold_px.is_some() {
			self.scrolled_threshold_px = other.scrolled_threshold_px;
		}
		if other.back_to_top_threshold_px.is_some() {
			self.back_to_top_threshold_px = other.back_to_top_threshold_px;
		}
		if other.anchor_offset_px.is_some() {
			self.anchor_offset_px = other.anchor_offset_px;
		}
		if other.menu_close_settle_ms.is_some() {
			self.menu_close_settle_ms = other.menu_close_settle_ms;
		}
	}

	pub fn finalize(self) -> Result<ScrollConfig, ConfigError> {
		let defaults = ScrollConfig::default();
		let config = ScrollConfig {
			scrolled_threshold_px: self.scrolled_threshold_px.unwrap_or(defaults.scrolled_threshold_px),
			back_to_top_threshold_px: self
				.back_to_top_threshold_px
				.unwrap_or(defaults.back_to_top_threshold_px),
			anchor_offset_px: self.anchor_offset_px.unwrap_or(defaults.anchor_offset_px),
			menu_close_settle_ms: self.menu_close_settle_ms.unwrap_or(defaults.menu_close_settle_ms),
		};

		for (field, value) in [
			("scroll.scrolled_threshold_px", config.scrolled_threshold_px),
			("scroll.back_to_top_threshold_px", config.back_to_top_threshold_px),
			("scroll.anchor_offset_px", config.anchor_offset_px),
		] {
			if !value.is_finite() || value < 0.0 {
				return Err(ConfigError::invalid(field, "must be a non-negative number"));
			}
		}

		Ok(config)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
	/// Navbar gets `scrolled` past this offset.
	pub scrolled_threshold_px: f64,
	/// Scroll-to-top button shows past this offset.
	pub back_to_top_threshold_px: f64,
	/// Height of the fixed navbar subtracted from anchor targets.
	pub anchor_offset_px: f64,
	/// Wait after closing the menu before measuring anchor targets.
	pub menu_close_settle_ms: u64,
}

impl ScrollConfig {
	pub fn menu_close_settle(&self) -> Duration {
		Duration::from_millis(self.menu_close_settle_ms)
	}
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			scrolled_threshold_px: 50.0,
			back_to_top_threshold_px: 500.0,
			anchor_offset_px: 70.0,
			menu_close_settle_ms: 350,
		}
	}
}
