// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use salon_dom_core::{Direction, Document, NodeId, ObserveOptions, ScrollBehavior, Selector};

#[derive(Debug, Clone, Default)]
struct Element {
	tag: String,
	classes: Vec<String>,
	attributes: BTreeMap<String, String>,
	text: String,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	offset_top: f64,
	width: Option<f64>,
	client_width: Option<f64>,
	scroll_left: f64,
}

/// A scroll request recorded by [`FakeDocument`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCall {
	Window { top: f64, behavior: ScrollBehavior },
	Element {
		node: NodeId,
		left: f64,
		behavior: ScrollBehavior,
	},
}

/// An in-memory [`Document`] with just enough layout to drive the page
/// controllers: per-element top offsets and widths, a window scroll offset
/// and a viewport width. Scroll requests apply instantly and are logged.
#[derive(Debug, Clone)]
pub struct FakeDocument {
	nodes: Vec<Element>,
	lang: String,
	direction: Option<Direction>,
	title: String,
	scroll_locked: bool,
	scroll_lock_log: Vec<bool>,
	scroll_y: f64,
	viewport_width: f64,
	observed: BTreeMap<NodeId, ObserveOptions>,
	scroll_log: Vec<ScrollCall>,
}

impl Default for FakeDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl FakeDocument {
	/// A document with an `html` root and an empty `body`.
	pub fn new() -> Self {
		let mut doc = Self {
			nodes: vec![Element {
				tag: "html".to_string(),
				..Default::default()
			}],
			lang: String::new(),
			direction: None,
			title: String::new(),
			scroll_locked: false,
			scroll_lock_log: Vec::new(),
			scroll_y: 0.0,
			viewport_width: 1280.0,
			observed: BTreeMap::new(),
			scroll_log: Vec::new(),
		};
		doc.push(NodeId(0), "body");
		doc
	}

	pub fn root(&self) -> NodeId {
		NodeId(0)
	}

	pub fn body(&self) -> NodeId {
		NodeId(1)
	}

	/// Start building a child element of `parent`.
	pub fn element(&mut self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
		let node = self.push(parent, tag);
		ElementBuilder { doc: self, node }
	}

	pub fn lang(&self) -> &str {
		&self.lang
	}

	pub fn direction(&self) -> Option<Direction> {
		self.direction
	}

	pub fn is_scroll_locked(&self) -> bool {
		self.scroll_locked
	}

	/// Every lock/unlock write, in order.
	pub fn scroll_lock_log(&self) -> &[bool] {
		&self.scroll_lock_log
	}

	pub fn set_scroll_y(&mut self, y: f64) {
		self.scroll_y = y;
	}

	pub fn set_viewport_width(&mut self, width: f64) {
		self.viewport_width = width;
	}

	pub fn set_offset_top(&mut self, node: NodeId, top: f64) {
		if let Some(el) = self.get_mut(node) {
			el.offset_top = top;
		}
	}

	pub fn set_width(&mut self, node: NodeId, width: Option<f64>) {
		if let Some(el) = self.get_mut(node) {
			el.width = width;
		}
	}

	pub fn scroll_left(&self, node: NodeId) -> f64 {
		self.get(node).map_or(0.0, |el| el.scroll_left)
	}

	pub fn is_observed(&self, node: NodeId) -> bool {
		self.observed.contains_key(&node)
	}

	pub fn observe_options(&self, node: NodeId) -> Option<ObserveOptions> {
		self.observed.get(&node).copied()
	}

	pub fn observed_count(&self) -> usize {
		self.observed.len()
	}

	pub fn scroll_log(&self) -> &[ScrollCall] {
		&self.scroll_log
	}

	pub fn tag(&self, node: NodeId) -> Option<&str> {
		self.get(node).map(|el| el.tag.as_str())
	}

	/// Look up by id, panicking when absent. Test convenience.
	pub fn id(&self, id: &str) -> NodeId {
		self.element_by_id(id)
			.unwrap_or_else(|| panic!("no element with id {id:?}"))
	}

	/// Text of the element with `id`, panicking when absent.
	pub fn text_of(&self, id: &str) -> String {
		self.text(self.id(id))
	}

	fn push(&mut self, parent: NodeId, tag: &str) -> NodeId {
		let node = NodeId(self.nodes.len() as u32);
		self.nodes.push(Element {
			tag: tag.to_ascii_lowercase(),
			parent: Some(parent),
			..Default::default()
		});
		if let Some(p) = self.get_mut(parent) {
			p.children.push(node);
		}
		node
	}

	fn get(&self, node: NodeId) -> Option<&Element> {
		self.nodes.get(node.0 as usize)
	}

	fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
		self.nodes.get_mut(node.0 as usize)
	}

	fn matches(&self, node: NodeId, selector: &Selector) -> bool {
		self.get(node).is_some_and(|el| {
			selector.matches(
				&el.tag,
				el.classes.iter().map(String::as_str),
				|name| el.attributes.get(name).map(String::as_str),
			)
		})
	}

	/// Descendants of `root` in document order, `root` excluded.
	fn descendants(&self, root: NodeId) -> Vec<NodeId> {
		let mut out = Vec::new();
		let mut stack: Vec<NodeId> = self
			.get(root)
			.map(|el| el.children.iter().rev().copied().collect())
			.unwrap_or_default();
		while let Some(node) = stack.pop() {
			out.push(node);
			if let Some(el) = self.get(node) {
				stack.extend(el.children.iter().rev().copied());
			}
		}
		out
	}
}

impl Document for FakeDocument {
	fn element_by_id(&self, id: &str) -> Option<NodeId> {
		std::iter::once(self.root())
			.chain(self.descendants(self.root()))
			.find(|node| self.attribute(*node, "id").as_deref() == Some(id))
	}

	fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
		std::iter::once(self.root())
			.chain(self.descendants(self.root()))
			.filter(|node| self.matches(*node, selector))
			.collect()
	}

	fn query_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
		self.descendants(root)
			.into_iter()
			.filter(|node| self.matches(*node, selector))
			.collect()
	}

	fn children(&self, node: NodeId) -> Vec<NodeId> {
		self.get(node).map(|el| el.children.clone()).unwrap_or_default()
	}

	fn append_element(&mut self, parent: NodeId, tag: &str) -> Option<NodeId> {
		self.get(parent)?;
		Some(self.push(parent, tag))
	}

	fn add_class(&mut self, node: NodeId, class: &str) {
		if let Some(el) = self.get_mut(node) {
			if !el.classes.iter().any(|c| c == class) {
				el.classes.push(class.to_string());
			}
		}
	}

	fn remove_class(&mut self, node: NodeId, class: &str) {
		if let Some(el) = self.get_mut(node) {
			el.classes.retain(|c| c != class);
		}
	}

	fn has_class(&self, node: NodeId, class: &str) -> bool {
		self.get(node).is_some_and(|el| el.classes.iter().any(|c| c == class))
	}

	fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
		if name == "class" {
			return self.get(node).map(|el| el.classes.join(" "));
		}
		self.get(node).and_then(|el| el.attributes.get(name).cloned())
	}

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
		if let Some(el) = self.get_mut(node) {
			if name == "class" {
				el.classes = value.split_whitespace().map(str::to_string).collect();
			} else {
				el.attributes.insert(name.to_string(), value.to_string());
			}
		}
	}

	fn remove_attribute(&mut self, node: NodeId, name: &str) {
		if let Some(el) = self.get_mut(node) {
			el.attributes.remove(name);
		}
	}

	fn text(&self, node: NodeId) -> String {
		let Some(el) = self.get(node) else {
			return String::new();
		};
		let mut text = el.text.clone();
		for child in &el.children {
			text.push_str(&self.text(*child));
		}
		text
	}

	fn set_text(&mut self, node: NodeId, text: &str) {
		let Some(el) = self.get_mut(node) else {
			return;
		};
		el.text = text.to_string();
		let children = std::mem::take(&mut el.children);
		for child in children {
			if let Some(c) = self.get_mut(child) {
				c.parent = None;
			}
		}
	}

	fn set_lang(&mut self, lang: &str) {
		self.lang = lang.to_string();
	}

	fn set_direction(&mut self, direction: Direction) {
		self.direction = Some(direction);
	}

	fn title(&self) -> String {
		self.title.clone()
	}

	fn set_title(&mut self, title: &str) {
		self.title = title.to_string();
	}

	fn set_scroll_locked(&mut self, locked: bool) {
		self.scroll_locked = locked;
		self.scroll_lock_log.push(locked);
	}

	fn scroll_y(&self) -> f64 {
		self.scroll_y
	}

	fn viewport_width(&self) -> f64 {
		self.viewport_width
	}

	fn offset_top(&self, node: NodeId) -> Option<f64> {
		self.get(node).map(|el| el.offset_top)
	}

	fn width(&self, node: NodeId) -> Option<f64> {
		self.get(node).and_then(|el| el.width)
	}

	fn client_width(&self, node: NodeId) -> Option<f64> {
		self.get(node).and_then(|el| el.client_width)
	}

	fn scroll_window_to(&mut self, top: f64, behavior: ScrollBehavior) {
		self.scroll_y = top;
		self.scroll_log.push(ScrollCall::Window { top, behavior });
	}

	fn scroll_element_by(&mut self, node: NodeId, left: f64, behavior: ScrollBehavior) {
		if let Some(el) = self.get_mut(node) {
			el.scroll_left += left;
			self.scroll_log.push(ScrollCall::Element { node, left, behavior });
		}
	}

	fn observe(&mut self, node: NodeId, options: &ObserveOptions) {
		if self.get(node).is_some() {
			self.observed.insert(node, *options);
		}
	}

	fn unobserve(&mut self, node: NodeId) {
		self.observed.remove(&node);
	}
}

/// Fluent construction of one element of a [`FakeDocument`].
pub struct ElementBuilder<'a> {
	doc: &'a mut FakeDocument,
	node: NodeId,
}

impl ElementBuilder<'_> {
	pub fn id(self, id: &str) -> Self {
		self.attr("id", id)
	}

	pub fn class(self, class: &str) -> Self {
		self.doc.add_class(self.node, class);
		self
	}

	pub fn attr(self, name: &str, value: &str) -> Self {
		self.doc.set_attribute(self.node, name, value);
		self
	}

	pub fn text(self, text: &str) -> Self {
		if let Some(el) = self.doc.get_mut(self.node) {
			el.text = text.to_string();
		}
		self
	}

	pub fn offset_top(self, top: f64) -> Self {
		self.doc.set_offset_top(self.node, top);
		self
	}

	pub fn width(self, width: f64) -> Self {
		self.doc.set_width(self.node, Some(width));
		self
	}

	pub fn client_width(self, width: f64) -> Self {
		if let Some(el) = self.doc.get_mut(self.node) {
			el.client_width = Some(width);
		}
		self
	}

	pub fn build(self) -> NodeId {
		self.node
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> FakeDocument {
		let mut doc = FakeDocument::new();
		let body = doc.body();
		let nav = doc.element(body, "nav").id("navbar").build();
		doc.element(nav, "a").attr("href", "#home").text("Home").build();
		doc.element(nav, "a").attr("href", "tel:123").build();
		doc.element(body, "section").id("home").attr("data-animate", "").offset_top(400.0).build();
		doc
	}

	#[test]
	fn test_element_by_id() {
		let doc = sample();
		assert_eq!(doc.tag(doc.id("navbar")), Some("nav"));
		assert_eq!(doc.element_by_id("missing"), None);
	}

	#[test]
	fn test_query_all_in_document_order() {
		let doc = sample();
		let links = doc.query_all(&Selector::tag("a"));
		assert_eq!(links.len(), 2);
		assert_eq!(doc.attribute(links[0], "href").as_deref(), Some("#home"));
		let anchors = doc.query_all(&Selector::attr_prefix("a", "href", "#"));
		assert_eq!(anchors, vec![links[0]]);
	}

	#[test]
	fn test_query_within_excludes_root() {
		let doc = sample();
		let nav = doc.id("navbar");
		assert!(doc.query_within(nav, &Selector::tag("nav")).is_empty());
		assert_eq!(doc.query_within(nav, &Selector::tag("a")).len(), 2);
	}

	#[test]
	fn test_classes_are_a_set() {
		let mut doc = sample();
		let nav = doc.id("navbar");
		doc.add_class(nav, "scrolled");
		doc.add_class(nav, "scrolled");
		assert_eq!(doc.attribute(nav, "class").as_deref(), Some("scrolled"));
		doc.set_class(nav, "scrolled", false);
		assert!(!doc.has_class(nav, "scrolled"));
	}

	#[test]
	fn test_set_text_replaces_children() {
		let mut doc = sample();
		let nav = doc.id("navbar");
		assert_eq!(doc.text(nav), "Home");
		doc.set_text(nav, "Menu");
		assert_eq!(doc.text(nav), "Menu");
		assert!(doc.children(nav).is_empty());
	}

	#[test]
	fn test_unknown_node_is_noop() {
		let mut doc = sample();
		let ghost = NodeId(999);
		doc.add_class(ghost, "x");
		doc.set_text(ghost, "x");
		doc.observe(ghost, &ObserveOptions::default());
		assert!(!doc.has_class(ghost, "x"));
		assert_eq!(doc.text(ghost), "");
		assert!(!doc.is_observed(ghost));
		assert_eq!(doc.append_element(ghost, "div"), None);
	}

	#[test]
	fn test_scroll_is_logged() {
		let mut doc = sample();
		doc.scroll_window_to(330.0, ScrollBehavior::Smooth);
		assert_eq!(doc.scroll_y(), 330.0);
		assert_eq!(
			doc.scroll_log(),
			&[ScrollCall::Window {
				top: 330.0,
				behavior: ScrollBehavior::Smooth
			}]
		);
	}
}
