// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub filter: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.filter.is_some() {
			self.filter = other.filter;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			filter: self.filter.unwrap_or_else(|| "info".to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// `tracing_subscriber::EnvFilter` directive string.
	pub filter: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
		}
	}
}
