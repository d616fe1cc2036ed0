// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

/// Opaque handle to an element owned by a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// The small selector vocabulary the page needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
	/// `tag`
	Tag(String),
	/// `.class`
	Class(String),
	/// `[attr]`, optionally restricted to a tag: `img[data-src]`
	Attr { tag: Option<String>, name: String },
	/// `a[href^="#"]`
	AttrPrefix {
		tag: Option<String>,
		name: String,
		prefix: String,
	},
}

impl Selector {
	pub fn tag(tag: impl Into<String>) -> Self {
		Selector::Tag(tag.into())
	}

	pub fn class(class: impl Into<String>) -> Self {
		Selector::Class(class.into())
	}

	pub fn attr(name: impl Into<String>) -> Self {
		Selector::Attr {
			tag: None,
			name: name.into(),
		}
	}

	pub fn tag_attr(tag: impl Into<String>, name: impl Into<String>) -> Self {
		Selector::Attr {
			tag: Some(tag.into()),
			name: name.into(),
		}
	}

	pub fn attr_prefix(tag: impl Into<String>, name: impl Into<String>, prefix: impl Into<String>) -> Self {
		Selector::AttrPrefix {
			tag: Some(tag.into()),
			name: name.into(),
			prefix: prefix.into(),
		}
	}

	/// Check an element described by its tag, classes and attribute lookup.
	pub fn matches<'a>(
		&self,
		tag: &str,
		classes: impl IntoIterator<Item = &'a str>,
		attribute: impl Fn(&str) -> Option<&'a str>,
	) -> bool {
		let tag_ok = |want: &Option<String>| want.as_deref().map_or(true, |t| t.eq_ignore_ascii_case(tag));
		match self {
			Selector::Tag(want) => want.eq_ignore_ascii_case(tag),
			Selector::Class(want) => classes.into_iter().any(|c| c == want),
			Selector::Attr { tag: want, name } => tag_ok(want) && attribute(name).is_some(),
			Selector::AttrPrefix {
				tag: want,
				name,
				prefix,
			} => tag_ok(want) && attribute(name).is_some_and(|v| v.starts_with(prefix.as_str())),
		}
	}

	/// CSS form, for backends with a native selector engine.
	pub fn to_css(&self) -> String {
		match self {
			Selector::Tag(tag) => tag.clone(),
			Selector::Class(class) => format!(".{class}"),
			Selector::Attr { tag, name } => format!("{}[{name}]", tag.as_deref().unwrap_or("")),
			Selector::AttrPrefix { tag, name, prefix } => {
				format!("{}[{name}^=\"{}\"]", tag.as_deref().unwrap_or(""), prefix.replace('"', "\\\""))
			}
		}
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_css())
	}
}
