// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation menu configuration section.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfigLayer {
	pub close_delay_ms: Option<u64>,
	pub mobile_breakpoint_px: Option<f64>,
}

impl NavigationConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.close_delay_ms.is_some() {
			self.close_delay_ms = other.close_delay_ms;
		}
		if other.mobile_breakpoint_px.is_some() {
			self.mobile_breakpoint_px = other.mobile_breakpoint_px;
		}
	}

	pub fn finalize(self) -> Result<NavigationConfig, ConfigError> {
		let defaults = NavigationConfig::default();
		let mobile_breakpoint_px = self.mobile_breakpoint_px.unwrap_or(defaults.mobile_breakpoint_px);
		if !mobile_breakpoint_px.is_finite() || mobile_breakpoint_px < 0.0 {
			return Err(ConfigError::invalid(
				"navigation.mobile_breakpoint_px",
				"must be a non-negative number",
			));
		}
		Ok(NavigationConfig {
			close_delay_ms: self.close_delay_ms.unwrap_or(defaults.close_delay_ms),
			mobile_breakpoint_px,
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
	/// Delay between a menu link click and the menu closing.
	pub close_delay_ms: u64,
	/// Menu links only auto-close the menu at or below this viewport width.
	pub mobile_breakpoint_px: f64,
}

impl NavigationConfig {
	pub fn close_delay(&self) -> Duration {
		Duration::from_millis(self.close_delay_ms)
	}
}

impl Default for NavigationConfig {
	fn default() -> Self {
		Self {
			close_delay_ms: 300,
			mobile_breakpoint_px: 968.0,
		}
	}
}
