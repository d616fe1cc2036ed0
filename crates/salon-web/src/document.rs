// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! [`Document`] over the live browser DOM.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Object};
use salon_dom_core::{
	Direction, Document, DomError, IntersectionEntry, NodeId, ObserveOptions, ScrollBehavior, Selector,
};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
	Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollToOptions,
	Window,
};

/// Receives intersection entries from the browser's observers.
pub type IntersectionSink = Rc<dyn Fn(Vec<IntersectionEntry>)>;

/// Maps DOM elements to stable [`NodeId`]s.
#[derive(Debug, Default)]
struct NodeArena {
	elements: Vec<Element>,
}

impl NodeArena {
	fn intern(&mut self, element: Element) -> NodeId {
		if let Some(index) = self
			.elements
			.iter()
			.position(|known| Object::is(known.as_ref(), element.as_ref()))
		{
			return NodeId(index as u32);
		}
		self.elements.push(element);
		NodeId((self.elements.len() - 1) as u32)
	}

	fn get(&self, node: NodeId) -> Option<Element> {
		self.elements.get(node.0 as usize).cloned()
	}
}

struct Observer {
	options: ObserveOptions,
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

pub struct BrowserDocument {
	window: Window,
	document: web_sys::Document,
	arena: Rc<RefCell<NodeArena>>,
	observers: Vec<Observer>,
	sink: Option<IntersectionSink>,
}

fn js_error(error: JsValue) -> DomError {
	DomError::Js(error.as_string().unwrap_or_else(|| format!("{error:?}")))
}

/// Log and drop a failed DOM call.
fn ok_or_log<T>(op: &str, result: Result<T, JsValue>) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(e) => {
			debug!(op, error = %js_error(e), "dom call failed");
			None
		}
	}
}

impl BrowserDocument {
	pub fn new() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self {
			window,
			document,
			arena: Rc::new(RefCell::new(NodeArena::default())),
			observers: Vec::new(),
			sink: None,
		})
	}

	pub fn set_intersection_sink(&mut self, sink: IntersectionSink) {
		self.sink = Some(sink);
	}

	pub fn window(&self) -> &Window {
		&self.window
	}

	pub fn raw(&self) -> &web_sys::Document {
		&self.document
	}

	pub fn element(&self, node: NodeId) -> Option<Element> {
		self.arena.borrow().get(node)
	}

	/// The `lang` attribute the page was served with.
	pub fn document_lang(&self) -> Option<String> {
		self.document
			.document_element()
			.and_then(|root| root.get_attribute("lang"))
	}

	/// Text of `#id`, if present.
	pub fn text_by_id(&self, id: &str) -> Option<String> {
		self.document.get_element_by_id(id).and_then(|el| el.text_content())
	}

	fn intern(&self, element: Element) -> NodeId {
		self.arena.borrow_mut().intern(element)
	}

	fn collect(&self, list: Result<web_sys::NodeList, JsValue>) -> Vec<NodeId> {
		let Some(list) = ok_or_log("querySelectorAll", list) else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|i| list.get(i))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.map(|element| self.intern(element))
			.collect()
	}

	fn observer_for(&mut self, options: &ObserveOptions) -> Option<&IntersectionObserver> {
		if let Some(index) = self.observers.iter().position(|o| o.options == *options) {
			return Some(&self.observers[index].observer);
		}
		let Some(sink) = self.sink.clone() else {
			debug!("no intersection sink, visibility disabled");
			return None;
		};

		let arena = Rc::clone(&self.arena);
		let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
			move |entries: Array, _observer: IntersectionObserver| {
				let batch: Vec<IntersectionEntry> = entries
					.iter()
					.filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
					.map(|entry| IntersectionEntry {
						target: arena.borrow_mut().intern(entry.target()),
						is_intersecting: entry.is_intersecting(),
					})
					.collect();
				if !batch.is_empty() {
					sink(batch);
				}
			},
		);

		let init = IntersectionObserverInit::new();
		init.set_threshold(&JsValue::from_f64(options.threshold));
		init.set_root_margin(&options.root_margin());
		let observer = ok_or_log(
			"new IntersectionObserver",
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
		)?;
		debug!(threshold = options.threshold, margin = %options.root_margin(), "intersection observer created");
		self.observers.push(Observer {
			options: *options,
			observer,
			_callback: callback,
		});
		self.observers.last().map(|o| &o.observer)
	}

	/// Disconnect every observer.
	pub fn disconnect(&mut self) {
		for observer in self.observers.drain(..) {
			observer.observer.disconnect();
		}
	}
}

impl Document for BrowserDocument {
	fn element_by_id(&self, id: &str) -> Option<NodeId> {
		self.document.get_element_by_id(id).map(|el| self.intern(el))
	}

	fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
		self.collect(self.document.query_selector_all(&selector.to_css()))
	}

	fn query_within(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
		let Some(root) = self.element(root) else {
			return Vec::new();
		};
		self.collect(root.query_selector_all(&selector.to_css()))
	}

	fn children(&self, node: NodeId) -> Vec<NodeId> {
		let Some(element) = self.element(node) else {
			return Vec::new();
		};
		let children = element.children();
		(0..children.length())
			.filter_map(|i| children.item(i))
			.map(|child| self.intern(child))
			.collect()
	}

	fn append_element(&mut self, parent: NodeId, tag: &str) -> Option<NodeId> {
		let parent = self.element(parent)?;
		let child = ok_or_log("createElement", self.document.create_element(tag))?;
		ok_or_log("appendChild", parent.append_child(&child))?;
		Some(self.intern(child))
	}

	fn add_class(&mut self, node: NodeId, class: &str) {
		if let Some(el) = self.element(node) {
			ok_or_log("classList.add", el.class_list().add_1(class));
		}
	}

	fn remove_class(&mut self, node: NodeId, class: &str) {
		if let Some(el) = self.element(node) {
			ok_or_log("classList.remove", el.class_list().remove_1(class));
		}
	}

	fn has_class(&self, node: NodeId, class: &str) -> bool {
		self.element(node).is_some_and(|el| el.class_list().contains(class))
	}

	fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
		self.element(node).and_then(|el| el.get_attribute(name))
	}

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
		if let Some(el) = self.element(node) {
			ok_or_log("setAttribute", el.set_attribute(name, value));
		}
	}

	fn remove_attribute(&mut self, node: NodeId, name: &str) {
		if let Some(el) = self.element(node) {
			ok_or_log("removeAttribute", el.remove_attribute(name));
		}
	}

	fn text(&self, node: NodeId) -> String {
		self.element(node)
			.and_then(|el| el.text_content())
			.unwrap_or_default()
	}

	fn set_text(&mut self, node: NodeId, text: &str) {
		if let Some(el) = self.element(node) {
			el.set_text_content(Some(text));
		}
	}

	fn set_lang(&mut self, lang: &str) {
		if let Some(root) = self.document.document_element() {
			ok_or_log("set lang", root.set_attribute("lang", lang));
		}
	}

	fn set_direction(&mut self, direction: Direction) {
		if let Some(root) = self.document.document_element() {
			ok_or_log("set dir", root.set_attribute("dir", direction.as_str()));
		}
	}

	fn title(&self) -> String {
		self.document.title()
	}

	fn set_title(&mut self, title: &str) {
		self.document.set_title(title);
	}

	fn set_scroll_locked(&mut self, locked: bool) {
		let Some(body) = self.document.body() else {
			return;
		};
		let style = body.style();
		if locked {
			ok_or_log("lock scroll", style.set_property("overflow", "hidden"));
		} else {
			ok_or_log("unlock scroll", style.remove_property("overflow"));
		}
	}

	fn scroll_y(&self) -> f64 {
		ok_or_log("scrollY", self.window.scroll_y()).unwrap_or(0.0)
	}

	fn viewport_width(&self) -> f64 {
		ok_or_log("innerWidth", self.window.inner_width())
			.and_then(|width| width.as_f64())
			.unwrap_or(0.0)
	}

	fn offset_top(&self, node: NodeId) -> Option<f64> {
		let rect = self.element(node)?.get_bounding_client_rect();
		Some(document_top(rect.top(), self.scroll_y()))
	}

	fn width(&self, node: NodeId) -> Option<f64> {
		self.element(node).map(|el| el.get_bounding_client_rect().width())
	}

	fn client_width(&self, node: NodeId) -> Option<f64> {
		self.element(node).map(|el| f64::from(el.client_width()))
	}

	fn scroll_window_to(&mut self, top: f64, behavior: ScrollBehavior) {
		let options = ScrollToOptions::new();
		options.set_top(top);
		options.set_behavior(web_behavior(behavior));
		self.window.scroll_to_with_scroll_to_options(&options);
	}

	fn scroll_element_by(&mut self, node: NodeId, left: f64, behavior: ScrollBehavior) {
		let Some(el) = self.element(node) else {
			return;
		};
		let options = ScrollToOptions::new();
		options.set_left(left);
		options.set_behavior(web_behavior(behavior));
		el.scroll_by_with_scroll_to_options(&options);
	}

	fn observe(&mut self, node: NodeId, options: &ObserveOptions) {
		let Some(el) = self.element(node) else {
			return;
		};
		if let Some(observer) = self.observer_for(options) {
			observer.observe(&el);
		}
	}

	fn unobserve(&mut self, node: NodeId) {
		let Some(el) = self.element(node) else {
			return;
		};
		for observer in &self.observers {
			observer.observer.unobserve(&el);
		}
	}
}

/// Document-relative top edge from a viewport-relative one. `offsetTop`
/// is relative to the nearest positioned ancestor, so it is not used.
fn document_top(viewport_top: f64, scroll_y: f64) -> f64 {
	viewport_top + scroll_y
}

fn web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
	match behavior {
		ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
		ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
	}
}
