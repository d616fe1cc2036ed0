// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gallery configuration section.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One image of the single-image viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImageConfig {
	pub src: String,
	pub alt: String,
	/// Catalog key for a localized alt text; `alt` is used when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alt_key: Option<String>,
}

impl GalleryImageConfig {
	pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			alt: alt.into(),
			alt_key: None,
		}
	}

	pub fn alt_key(mut self, key: impl Into<String>) -> Self {
		self.alt_key = Some(key.into());
		self
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfigLayer {
	pub item_gap_px: Option<f64>,
	pub fallback_step_ratio: Option<f64>,
	pub images: Option<Vec<GalleryImageConfig>>,
}

impl GalleryConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.item_gap_px.is_some() {
			self.item_gap_px = other.item_gap_px;
		}
		if other.fallback_step_ratio.is_some() {
			self.fallback_step_ratio = other.fallback_step_ratio;
		}
		if other.images.is_some() {
			self.images = other.images;
		}
	}

	pub fn finalize(self) -> Result<GalleryConfig, ConfigError> {
		let defaults = GalleryConfig::default();
		let fallback_step_ratio = self.fallback_step_ratio.unwrap_or(defaults.fallback_step_ratio);
		if !(fallback_step_ratio > 0.0 && fallback_step_ratio <= 1.0) {
			return Err(ConfigError::invalid(
				"gallery.fallback_step_ratio",
				"must be within (0, 1]",
			));
		}
		let item_gap_px = self.item_gap_px.unwrap_or(defaults.item_gap_px);
		if !item_gap_px.is_finite() || item_gap_px < 0.0 {
			return Err(ConfigError::invalid("gallery.item_gap_px", "must be a non-negative number"));
		}
		let images = self.images.unwrap_or(defaults.images);
		if let Some(i) = images.iter().position(|img| img.src.trim().is_empty()) {
			return Err(ConfigError::invalid(
				&format!("gallery.images[{i}].src"),
				"must not be empty",
			));
		}
		Ok(GalleryConfig {
			item_gap_px,
			fallback_step_ratio,
			images,
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
	/// Gap between strip items, added to the measured item width.
	pub item_gap_px: f64,
	/// Strip step as a fraction of the container width when items
	/// cannot be measured.
	pub fallback_step_ratio: f64,
	/// Images of the single-image viewer, in display order.
	pub images: Vec<GalleryImageConfig>,
}

impl Default for GalleryConfig {
	fn default() -> Self {
		Self {
			item_gap_px: 16.0,
			fallback_step_ratio: 0.8,
			images: (1..=5)
				.map(|n| {
					GalleryImageConfig::new(format!("images/gallery-{n}.jpg"), format!("Gallery image {n}"))
						.alt_key(format!("gallery.item{n}.alt"))
				})
				.collect(),
		}
	}
}
