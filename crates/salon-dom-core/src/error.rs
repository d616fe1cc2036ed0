// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComponentError {
	/// An element the controller cannot work without is absent. The page
	/// treats this as "feature disabled", not as a failure.
	#[error("required element missing: {0}")]
	MissingElement(String),
}

/// Failures raised by a document backend. They never cross the [`Document`]
/// boundary; backends log and drop them.
///
/// [`Document`]: crate::Document
#[derive(Debug, Error)]
pub enum DomError {
	#[error("no global window")]
	NoWindow,

	#[error("no document on window")]
	NoDocument,

	#[error("javascript error: {0}")]
	Js(String),
}
