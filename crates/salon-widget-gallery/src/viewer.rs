// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use salon_common_i18n::{Catalog, Locale};
use salon_dom_component::{Context, Controller};
use salon_dom_core::{Action, ComponentError, Event, EventOutcome, NodeId};
use salon_site_config::GalleryImageConfig;
use tracing::{debug, trace};

pub const VIEWER_ID: &str = "gallery-viewer";

const ACTIVE: &str = "active";
const DOT_CLASS: &str = "gallery-dot";

/// Current position in a fixed-length, wrapping image list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewerState {
	len: usize,
	current: usize,
}

impl ViewerState {
	pub fn new(len: usize) -> Self {
		Self { len, current: 0 }
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn current(&self) -> usize {
		self.current
	}

	/// Map any integer onto `[0, len)`. `None` for an empty list.
	pub fn normalize(&self, index: i64) -> Option<usize> {
		if self.len == 0 {
			return None;
		}
		let len = self.len as i64;
		Some(index.rem_euclid(len) as usize)
	}

	pub fn show(&mut self, index: i64) -> Option<usize> {
		let index = self.normalize(index)?;
		self.current = index;
		Some(index)
	}

	pub fn next(&mut self) -> Option<usize> {
		self.show(self.current as i64 + 1)
	}

	pub fn prev(&mut self) -> Option<usize> {
		self.show(self.current as i64 - 1)
	}
}

#[derive(Debug, Clone)]
struct ViewerNodes {
	image: NodeId,
	prev: Option<NodeId>,
	next: Option<NodeId>,
	dots: Vec<NodeId>,
}

#[derive(Debug)]
pub struct GalleryViewer {
	images: Vec<GalleryImageConfig>,
	catalog: Arc<Catalog>,
	locale: Locale,
	state: ViewerState,
	nodes: Option<ViewerNodes>,
}

impl GalleryViewer {
	pub fn new(images: Vec<GalleryImageConfig>, catalog: Arc<Catalog>, locale: Locale) -> Self {
		let state = ViewerState::new(images.len());
		Self {
			images,
			catalog,
			locale,
			state,
			nodes: None,
		}
	}

	pub fn current(&self) -> usize {
		self.state.current()
	}

	/// Alt text of `image` in the active locale.
	fn alt_text<'a>(&'a self, image: &'a GalleryImageConfig) -> &'a str {
		image
			.alt_key
			.as_deref()
			.and_then(|key| self.catalog.lookup(self.locale, key))
			.unwrap_or(&image.alt)
	}

	pub fn show(&mut self, index: i64, ctx: &mut Context<'_>) {
		if self.nodes.is_none() {
			return;
		}
		if self.state.show(index).is_some() {
			self.render(ctx);
		}
	}

	pub fn next(&mut self, ctx: &mut Context<'_>) {
		self.show(self.state.current() as i64 + 1, ctx);
	}

	pub fn prev(&mut self, ctx: &mut Context<'_>) {
		self.show(self.state.current() as i64 - 1, ctx);
	}

	fn render(&self, ctx: &mut Context<'_>) {
		let Some(nodes) = &self.nodes else {
			return;
		};
		let current = self.state.current();
		let Some(image) = self.images.get(current) else {
			return;
		};
		ctx.doc.set_attribute(nodes.image, "src", &image.src);
		ctx.doc.set_attribute(nodes.image, "alt", self.alt_text(image));
		for (i, dot) in nodes.dots.iter().enumerate() {
			let active = i == current;
			ctx.doc.set_class(*dot, ACTIVE, active);
			if active {
				ctx.doc.set_attribute(*dot, "aria-current", "true");
			} else {
				ctx.doc.remove_attribute(*dot, "aria-current");
			}
		}
		trace!(index = current, src = %image.src, "gallery image shown");
	}

	fn ensure_dots(&self, container: NodeId, ctx: &mut Context<'_>) -> Vec<NodeId> {
		let existing = ctx.doc.children(container);
		if !existing.is_empty() {
			return existing;
		}
		let mut dots = Vec::with_capacity(self.images.len());
		for i in 0..self.images.len() {
			let Some(dot) = ctx.doc.append_element(container, "button") else {
				break;
			};
			ctx.doc.add_class(dot, DOT_CLASS);
			ctx.doc.set_attribute(dot, "type", "button");
			ctx.doc.set_attribute(dot, "aria-label", &(i + 1).to_string());
			dots.push(dot);
		}
		dots
	}
}

impl Controller for GalleryViewer {
	fn id(&self) -> &str {
		VIEWER_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		let image = ctx
			.doc
			.element_by_id("galleryImage")
			.ok_or_else(|| ComponentError::MissingElement("#galleryImage".to_string()))?;
		if self.state.is_empty() {
			return Err(ComponentError::MissingElement("gallery images".to_string()));
		}

		let prev = ctx.doc.element_by_id("galleryViewerPrev");
		let next = ctx.doc.element_by_id("galleryViewerNext");
		let dots = match ctx.doc.element_by_id("galleryDots") {
			Some(container) => self.ensure_dots(container, ctx),
			None => Vec::new(),
		};

		for button in [prev, next].into_iter().flatten() {
			ctx.listen_click(button);
		}
		for dot in &dots {
			ctx.listen_click(*dot);
		}

		debug!(images = self.images.len(), dots = dots.len(), "gallery viewer ready");
		self.nodes = Some(ViewerNodes {
			image,
			prev,
			next,
			dots,
		});
		self.state = ViewerState::new(self.images.len());
		self.render(ctx);
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		let Event::Click { target } = event else {
			return EventOutcome::Ignored;
		};
		let Some(nodes) = &self.nodes else {
			return EventOutcome::Ignored;
		};
		let target = Some(*target);
		let (prev, next) = (nodes.prev, nodes.next);
		let dot = nodes.dots.iter().position(|dot| Some(*dot) == target);
		if target == prev {
			self.prev(ctx);
		} else if target == next {
			self.next(ctx);
		} else if let Some(index) = dot {
			self.show(index as i64, ctx);
		} else {
			return EventOutcome::Ignored;
		}
		EventOutcome::Handled
	}

	fn update(&mut self, action: &Action, ctx: &mut Context<'_>) {
		if let Action::LocaleChanged(locale) = action {
			self.locale = *locale;
			self.render(ctx);
		}
	}

	fn unmount(&mut self, _ctx: &mut Context<'_>) {
		self.nodes = None;
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use salon_dom_core::{Document, Selector};
	use salon_dom_testing::{salon_page, step_sequence_strategy, FakeDocument, Harness};
	use salon_site_config::GalleryConfig;

	use super::*;

	fn images() -> Vec<GalleryImageConfig> {
		GalleryConfig::default().images
	}

	fn viewer(locale: Locale) -> GalleryViewer {
		GalleryViewer::new(images(), Arc::new(salon_common_i18n::embedded().clone()), locale)
	}

	fn harness() -> Harness {
		Harness::new(salon_page()).with_controller(viewer(Locale::Ar)).mount()
	}

	fn src(doc: &FakeDocument) -> String {
		doc.attribute(doc.id("galleryImage"), "src").unwrap_or_default()
	}

	fn active_dots(doc: &FakeDocument) -> Vec<usize> {
		doc.children(doc.id("galleryDots"))
			.into_iter()
			.enumerate()
			.filter(|(_, dot)| doc.has_class(*dot, ACTIVE))
			.map(|(i, _)| i)
			.collect()
	}

	#[test]
	fn test_state_wraps_both_ways() {
		let mut state = ViewerState::new(5);
		assert_eq!(state.prev(), Some(4));
		assert_eq!(state.next(), Some(0));
		assert_eq!(state.show(7), Some(2));
		assert_eq!(state.show(-1), Some(4));
		assert_eq!(state.show(-11), Some(4));
	}

	#[test]
	fn test_empty_state_is_noop() {
		let mut state = ViewerState::new(0);
		assert_eq!(state.next(), None);
		assert_eq!(state.show(3), None);
		assert_eq!(state.current(), 0);
	}

	#[test]
	fn test_mount_creates_dots_and_shows_first() {
		let h = harness();
		let dots = h.doc.children(h.doc.id("galleryDots"));
		assert_eq!(dots.len(), 5);
		assert!(dots.iter().all(|d| h.doc.has_class(*d, DOT_CLASS)));
		assert_eq!(src(&h.doc), "images/gallery-1.jpg");
		assert_eq!(active_dots(&h.doc), vec![0]);
		assert_eq!(h.doc.attribute(dots[0], "aria-current").as_deref(), Some("true"));
	}

	#[test]
	fn test_existing_dots_are_reused() {
		let mut doc = salon_page();
		let container = doc.id("galleryDots");
		for _ in 0..5 {
			doc.element(container, "span").build();
		}
		let h = Harness::new(doc).with_controller(viewer(Locale::Ar)).mount();
		let dots = h.doc.children(h.doc.id("galleryDots"));
		assert_eq!(dots.len(), 5);
		assert_eq!(h.doc.tag(dots[0]), Some("span"));
		assert_eq!(active_dots(&h.doc), vec![0]);
	}

	#[test]
	fn test_prev_from_first_wraps_to_last() {
		let mut h = harness();
		h.click_id("galleryViewerPrev");
		assert_eq!(src(&h.doc), "images/gallery-5.jpg");
		assert_eq!(active_dots(&h.doc), vec![4]);
		h.click_id("galleryViewerNext");
		assert_eq!(src(&h.doc), "images/gallery-1.jpg");
	}

	#[test]
	fn test_dot_click_jumps() {
		let mut h = harness();
		let dots = h.doc.children(h.doc.id("galleryDots"));
		h.click(dots[3]);
		assert_eq!(src(&h.doc), "images/gallery-4.jpg");
		assert_eq!(active_dots(&h.doc), vec![3]);
		assert_eq!(h.doc.attribute(dots[0], "aria-current"), None);
	}

	#[test]
	fn test_alt_follows_locale() {
		let mut h = harness();
		let image = h.doc.id("galleryImage");
		let ar = salon_common_i18n::t(Locale::Ar, "gallery.item1.alt").unwrap();
		let en = salon_common_i18n::t(Locale::En, "gallery.item1.alt").unwrap();
		assert_eq!(h.doc.attribute(image, "alt").as_deref(), Some(ar));

		h.broadcast(Action::LocaleChanged(Locale::En));
		assert_eq!(h.doc.attribute(image, "alt").as_deref(), Some(en));
	}

	#[test]
	fn test_plain_alt_without_key() {
		let images = vec![GalleryImageConfig::new("a.jpg", "first")];
		let h = Harness::new(salon_page())
			.with_controller(GalleryViewer::new(images, Arc::new(Catalog::new()), Locale::En))
			.mount();
		assert_eq!(h.doc.attribute(h.doc.id("galleryImage"), "alt").as_deref(), Some("first"));
	}

	#[test]
	fn test_no_images_disables_viewer() {
		let h = Harness::new(salon_page())
			.with_controller(GalleryViewer::new(Vec::new(), Arc::new(Catalog::new()), Locale::Ar))
			.mount();
		assert!(!h.host.is_mounted(VIEWER_ID));
		assert!(h.doc.children(h.doc.id("galleryDots")).is_empty());
		assert_eq!(src(&h.doc), "");
	}

	#[test]
	fn test_missing_image_disables_viewer() {
		let mut doc = FakeDocument::new();
		let body = doc.body();
		doc.element(body, "button").id("galleryViewerNext").build();
		let h = Harness::new(doc).with_controller(viewer(Locale::Ar)).mount();
		assert!(!h.host.is_mounted(VIEWER_ID));
		assert!(h.doc.query_all(&Selector::class(DOT_CLASS)).is_empty());
	}

	proptest! {
		#[test]
		fn prop_show_is_total(len in 1usize..12, index in any::<i64>()) {
			let mut state = ViewerState::new(len);
			let shown = state.show(index).unwrap();
			prop_assert!(shown < len);
			prop_assert_eq!(shown as i64, ((index % len as i64) + len as i64) % len as i64);
		}

		#[test]
		fn prop_clicks_track_counter(steps in step_sequence_strategy(30)) {
			let mut h = harness();
			let mut expected: i64 = 0;
			for forward in steps {
				if forward {
					h.click_id("galleryViewerNext");
					expected += 1;
				} else {
					h.click_id("galleryViewerPrev");
					expected -= 1;
				}
				let index = expected.rem_euclid(5) as usize;
				prop_assert_eq!(active_dots(&h.doc), vec![index]);
				prop_assert_eq!(src(&h.doc), format!("images/gallery-{}.jpg", index + 1));
			}
		}
	}
}
