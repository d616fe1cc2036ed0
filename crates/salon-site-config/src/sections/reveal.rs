// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reveal animation and lazy image configuration section.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RevealConfigLayer {
	pub threshold: Option<f64>,
	pub root_margin_bottom_px: Option<i32>,
	pub lazy_images: Option<bool>,
}

impl RevealConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.threshold.is_some() {
			self.threshold = other.threshold;
		}
		if other.root_margin_bottom_px.is_some() {
			self.root_margin_bottom_px = other.root_margin_bottom_px;
		}
		if other.lazy_images.is_some() {
			self.lazy_images = other.lazy_images;
		}
	}

	pub fn finalize(self) -> Result<RevealConfig, ConfigError> {
		let defaults = RevealConfig::default();
		let threshold = self.threshold.unwrap_or(defaults.threshold);
		if !(0.0..=1.0).contains(&threshold) {
			return Err(ConfigError::invalid("reveal.threshold", "must be within [0, 1]"));
		}
		Ok(RevealConfig {
			threshold,
			root_margin_bottom_px: self.root_margin_bottom_px.unwrap_or(defaults.root_margin_bottom_px),
			lazy_images: self.lazy_images.unwrap_or(defaults.lazy_images),
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
	pub threshold: f64,
	pub root_margin_bottom_px: i32,
	/// Swap `data-src` into `src` when images approach the viewport.
	pub lazy_images: bool,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin_bottom_px: -50,
			lazy_images: true,
		}
	}
}
