// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use salon_common_i18n::Direction;

use crate::node::{NodeId, Selector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
	#[default]
	Smooth,
	Instant,
}

impl ScrollBehavior {
	pub fn as_str(&self) -> &'static str {
		match self {
			ScrollBehavior::Smooth => "smooth",
			ScrollBehavior::Instant => "instant",
		}
	}
}

/// Viewport intersection options for [`Document::observe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
	/// Fraction of the element that must be visible, in `[0, 1]`.
	pub threshold: f64,
	/// Bottom root margin in CSS pixels. Negative values fire the
	/// observer before the element reaches the bottom edge.
	pub root_margin_bottom_px: i32,
}

impl Default for ObserveOptions {
	fn default() -> Self {
		Self {
			threshold: 0.0,
			root_margin_bottom_px: 0,
		}
	}
}

impl ObserveOptions {
	/// `rootMargin` string in the order the browser expects.
	pub fn root_margin(&self) -> String {
		format!("0px 0px {}px 0px", self.root_margin_bottom_px)
	}
}

/// The slice of the DOM the page controllers depend on.
///
/// Every method is infallible. Lookups return `Option`, and mutations on a
/// node the backend does not know are silent no-ops. A backend that hits a
/// runtime failure logs it and carries on.
pub trait Document {
	fn element_by_id(&self, id: &str) -> Option<NodeId>;

	/// All matching elements in document order.
	fn query_all(&self, selector: &Selector) -> Vec<NodeId>;

	/// Matching descendants of `root` in document order.
	fn query_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId>;

	fn children(&self, node: NodeId) -> Vec<NodeId>;

	/// Create an element and append it as the last child of `parent`.
	fn append_element(&mut self, parent: NodeId, tag: &str) -> Option<NodeId>;

	fn add_class(&mut self, node: NodeId, class: &str);

	fn remove_class(&mut self, node: NodeId, class: &str);

	fn has_class(&self, node: NodeId, class: &str) -> bool;

	fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

	fn remove_attribute(&mut self, node: NodeId, name: &str);

	fn text(&self, node: NodeId) -> String;

	fn set_text(&mut self, node: NodeId, text: &str);

	/// `<html lang>`
	fn set_lang(&mut self, lang: &str);

	/// `<html dir>`
	fn set_direction(&mut self, direction: Direction);

	fn title(&self) -> String;

	fn set_title(&mut self, title: &str);

	/// Lock or unlock page scrolling (`body` overflow).
	fn set_scroll_locked(&mut self, locked: bool);

	/// Vertical scroll offset of the window in CSS pixels.
	fn scroll_y(&self) -> f64;

	fn viewport_width(&self) -> f64;

	/// Top edge of `node` relative to the document, not the viewport.
	fn offset_top(&self, node: NodeId) -> Option<f64>;

	/// Rendered width of `node` including padding and border.
	fn width(&self, node: NodeId) -> Option<f64>;

	/// Inner width of `node` excluding scrollbars.
	fn client_width(&self, node: NodeId) -> Option<f64>;

	fn scroll_window_to(&mut self, top: f64, behavior: ScrollBehavior);

	/// Scroll a scroll container horizontally by `left` pixels.
	fn scroll_element_by(&mut self, node: NodeId, left: f64, behavior: ScrollBehavior);

	/// Start reporting viewport intersection changes for `node`.
	fn observe(&mut self, node: NodeId, options: &ObserveOptions);

	fn unobserve(&mut self, node: NodeId);

	fn query_first(&self, selector: &Selector) -> Option<NodeId> {
		self.query_all(selector).into_iter().next()
	}

	fn first_within(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
		self.query_within(root, selector).into_iter().next()
	}

	/// Add or remove `class` depending on `on`.
	fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
		if on {
			self.add_class(node, class);
		} else {
			self.remove_class(node, class);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_root_margin_format() {
		let options = ObserveOptions {
			threshold: 0.1,
			root_margin_bottom_px: -50,
		};
		assert_eq!(options.root_margin(), "0px 0px -50px 0px");
		assert_eq!(ObserveOptions::default().root_margin(), "0px 0px 0px 0px");
	}

	#[test]
	fn test_scroll_behavior_default_is_smooth() {
		assert_eq!(ScrollBehavior::default(), ScrollBehavior::Smooth);
		assert_eq!(ScrollBehavior::Instant.as_str(), "instant");
	}
}
