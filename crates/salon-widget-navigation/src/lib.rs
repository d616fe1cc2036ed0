// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Slide-out navigation menu.
//!
//! The menu is driven by `#menuToggle`, dims the page with `#navOverlay` and
//! locks body scrolling while open. Links inside `#navMenu` close the menu
//! after a short delay on narrow viewports.

use salon_dom_component::{Context, Controller};
use salon_dom_core::{Action, ComponentError, Event, EventOutcome, Interaction, Key, NodeId, Selector};
use salon_site_config::NavigationConfig;
use tracing::{debug, trace};

pub const CONTROLLER_ID: &str = "navigation";

const ACTIVE: &str = "active";

/// Open/closed flag of the menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
	open: bool,
}

impl MenuState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Returns whether the state changed.
	pub fn open(&mut self) -> bool {
		!std::mem::replace(&mut self.open, true)
	}

	/// Returns whether the state changed.
	pub fn close(&mut self) -> bool {
		std::mem::replace(&mut self.open, false)
	}

	pub fn toggle(&mut self) {
		self.open = !self.open;
	}
}

#[derive(Debug, Clone)]
struct NavNodes {
	toggle: NodeId,
	menu: NodeId,
	overlay: Option<NodeId>,
	links: Vec<NodeId>,
}

#[derive(Debug)]
pub struct NavigationController {
	config: NavigationConfig,
	state: MenuState,
	nodes: Option<NavNodes>,
}

impl NavigationController {
	pub fn new(config: NavigationConfig) -> Self {
		Self {
			config,
			state: MenuState::new(),
			nodes: None,
		}
	}

	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	pub fn open(&mut self, ctx: &mut Context<'_>) {
		if self.state.open() {
			debug!("menu opened");
			self.render(ctx);
		}
	}

	pub fn close(&mut self, ctx: &mut Context<'_>) {
		if self.state.close() {
			debug!("menu closed");
			self.render(ctx);
		}
	}

	pub fn toggle(&mut self, ctx: &mut Context<'_>) {
		if self.state.is_open() {
			self.close(ctx);
		} else {
			self.open(ctx);
		}
	}

	fn render(&self, ctx: &mut Context<'_>) {
		let Some(nodes) = &self.nodes else {
			return;
		};
		let open = self.state.is_open();
		ctx.doc.set_class(nodes.menu, ACTIVE, open);
		ctx.doc.set_class(nodes.toggle, ACTIVE, open);
		if let Some(overlay) = nodes.overlay {
			ctx.doc.set_class(overlay, ACTIVE, open);
		}
		ctx.doc
			.set_attribute(nodes.toggle, "aria-expanded", if open { "true" } else { "false" });
		ctx.doc.set_scroll_locked(open);
	}

	fn on_link_click(&mut self, ctx: &mut Context<'_>) -> EventOutcome {
		let width = ctx.doc.viewport_width();
		if self.state.is_open() && width <= self.config.mobile_breakpoint_px {
			let token = ctx.set_timeout(self.config.close_delay());
			trace!(%token, width, "menu close scheduled");
		}
		EventOutcome::Handled
	}
}

impl Default for NavigationController {
	fn default() -> Self {
		Self::new(NavigationConfig::default())
	}
}

impl Controller for NavigationController {
	fn id(&self) -> &str {
		CONTROLLER_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		let toggle = ctx
			.doc
			.element_by_id("menuToggle")
			.ok_or_else(|| ComponentError::MissingElement("#menuToggle".to_string()))?;
		let menu = ctx
			.doc
			.element_by_id("navMenu")
			.ok_or_else(|| ComponentError::MissingElement("#navMenu".to_string()))?;
		let overlay = ctx.doc.element_by_id("navOverlay");
		if overlay.is_none() {
			debug!("#navOverlay missing, overlay close disabled");
		}
		let links = ctx.doc.query_within(menu, &Selector::tag("a"));

		ctx.listen_click(toggle);
		if let Some(overlay) = overlay {
			ctx.listen_click(overlay);
		}
		for link in &links {
			ctx.listen_click(*link);
		}
		ctx.listen(Interaction::KeyDown);

		self.nodes = Some(NavNodes {
			toggle,
			menu,
			overlay,
			links,
		});
		self.state = MenuState::new();
		self.render(ctx);
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		let Some(nodes) = &self.nodes else {
			return EventOutcome::Ignored;
		};
		match event {
			Event::Click { target } if *target == nodes.toggle => {
				self.toggle(ctx);
				EventOutcome::Handled
			}
			Event::Click { target } if Some(*target) == nodes.overlay => {
				self.close(ctx);
				EventOutcome::Handled
			}
			Event::Click { target } if nodes.links.contains(target) => self.on_link_click(ctx),
			Event::KeyDown(Key::Escape) if self.state.is_open() => {
				self.close(ctx);
				EventOutcome::Handled
			}
			// Only link clicks schedule timers.
			Event::Timer(_) => {
				self.close(ctx);
				EventOutcome::Handled
			}
			_ => EventOutcome::Ignored,
		}
	}

	fn update(&mut self, action: &Action, ctx: &mut Context<'_>) {
		if let Action::CloseMenu = action {
			self.close(ctx);
		}
	}

	fn unmount(&mut self, ctx: &mut Context<'_>) {
		self.close(ctx);
		self.nodes = None;
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use proptest::prelude::*;
	use salon_dom_component::Scheduler;
	use salon_dom_core::Document;
	use salon_dom_testing::{key_strategy, salon_page, FakeDocument, Harness};

	use super::*;

	fn harness() -> Harness {
		Harness::new(salon_page())
			.with_controller(NavigationController::default())
			.mount()
	}

	fn is_open(doc: &FakeDocument) -> bool {
		doc.has_class(doc.id("navMenu"), ACTIVE)
	}

	fn assert_consistent(doc: &FakeDocument) {
		let open = is_open(doc);
		assert_eq!(doc.has_class(doc.id("navOverlay"), ACTIVE), open);
		assert_eq!(doc.has_class(doc.id("menuToggle"), ACTIVE), open);
		assert_eq!(doc.is_scroll_locked(), open);
		assert_eq!(
			doc.attribute(doc.id("menuToggle"), "aria-expanded").as_deref(),
			Some(if open { "true" } else { "false" })
		);
	}

	fn first_link(doc: &FakeDocument) -> NodeId {
		doc.query_within(doc.id("navMenu"), &Selector::tag("a"))[0]
	}

	#[test]
	fn test_menu_state_transitions() {
		let mut state = MenuState::new();
		assert!(state.open());
		assert!(!state.open());
		assert!(state.is_open());
		assert!(state.close());
		assert!(!state.close());
		state.toggle();
		assert!(state.is_open());
	}

	#[test]
	fn test_toggle_opens_and_closes() {
		let mut h = harness();
		h.click_id("menuToggle");
		assert!(is_open(&h.doc));
		assert_consistent(&h.doc);
		h.click_id("menuToggle");
		assert!(!is_open(&h.doc));
		assert_consistent(&h.doc);
	}

	#[test]
	fn test_overlay_closes() {
		let mut h = harness();
		h.click_id("menuToggle");
		h.click_id("navOverlay");
		assert!(!is_open(&h.doc));
		assert_consistent(&h.doc);
	}

	#[test]
	fn test_escape_closes_only_when_open() {
		let mut h = harness();
		assert_eq!(h.press_key(Key::Escape), EventOutcome::Ignored);
		h.click_id("menuToggle");
		assert_eq!(h.press_key(Key::Escape), EventOutcome::Handled);
		assert!(!is_open(&h.doc));
		assert_eq!(h.press_key(Key::Enter), EventOutcome::Ignored);
	}

	#[test]
	fn test_link_click_closes_after_delay_on_mobile() {
		let mut h = harness();
		h.resize(600.0);
		h.click_id("menuToggle");
		let link = first_link(&h.doc);
		h.click(link);
		assert!(is_open(&h.doc));
		assert_eq!(h.pending_timers(), 1);
		h.advance(Duration::from_millis(299));
		assert!(is_open(&h.doc));
		h.advance(Duration::from_millis(1));
		assert!(!is_open(&h.doc));
		assert_consistent(&h.doc);
	}

	#[test]
	fn test_link_click_on_desktop_keeps_menu() {
		let mut h = harness();
		h.resize(1280.0);
		h.click_id("menuToggle");
		let link = first_link(&h.doc);
		h.click(link);
		assert_eq!(h.pending_timers(), 0);
		assert!(is_open(&h.doc));
	}

	#[test]
	fn test_breakpoint_is_inclusive() {
		let mut h = harness();
		h.resize(968.0);
		h.click_id("menuToggle");
		let link = first_link(&h.doc);
		h.click(link);
		assert_eq!(h.pending_timers(), 1);
	}

	#[test]
	fn test_close_timer_after_manual_close_is_noop() {
		let mut h = harness();
		h.resize(600.0);
		h.click_id("menuToggle");
		let link = first_link(&h.doc);
		h.click(link);
		h.press_key(Key::Escape);
		h.advance(Duration::from_millis(300));
		assert!(!is_open(&h.doc));
		assert_consistent(&h.doc);
	}

	#[test]
	fn test_missing_toggle_disables_controller() {
		let mut doc = FakeDocument::new();
		let body = doc.body();
		doc.element(body, "ul").id("navMenu").build();
		let h = Harness::new(doc)
			.with_controller(NavigationController::default())
			.mount();
		assert!(!h.host.is_mounted(CONTROLLER_ID));
		assert!(h.host.interactions().is_empty());
	}

	#[test]
	fn test_missing_overlay_keeps_menu_working() {
		let mut doc = FakeDocument::new();
		let body = doc.body();
		doc.element(body, "button").id("menuToggle").build();
		doc.element(body, "ul").id("navMenu").build();
		let mut h = Harness::new(doc)
			.with_controller(NavigationController::default())
			.mount();
		h.click_id("menuToggle");
		assert!(is_open(&h.doc));
		assert!(h.doc.is_scroll_locked());
	}

	#[test]
	fn test_repeated_close_is_idempotent() {
		let mut h = harness();
		h.click_id("menuToggle");
		h.press_key(Key::Escape);
		h.press_key(Key::Escape);
		assert!(!is_open(&h.doc));
		assert_consistent(&h.doc);
	}

	#[test]
	fn test_repeated_open_locks_once() {
		let mut doc = salon_page();
		let mut scheduler = Scheduler::new();
		let mut nav = NavigationController::default();
		{
			let mut ctx = Context::new(&mut doc, CONTROLLER_ID, &mut scheduler);
			nav.mount(&mut ctx).unwrap();
			nav.open(&mut ctx);
			nav.open(&mut ctx);
		}
		assert!(nav.is_open());
		assert!(doc.is_scroll_locked());
		assert_eq!(doc.scroll_lock_log(), &[false, true]);
		assert_consistent(&doc);

		{
			let mut ctx = Context::new(&mut doc, CONTROLLER_ID, &mut scheduler);
			nav.close(&mut ctx);
		}
		assert!(!nav.is_open());
		assert!(!doc.is_scroll_locked());
		assert_eq!(doc.scroll_lock_log(), &[false, true, false]);
		assert_consistent(&doc);
	}

	#[test]
	fn test_unmount_releases_scroll_lock() {
		let mut h = harness();
		h.click_id("menuToggle");
		h.unmount();
		assert!(!h.doc.is_scroll_locked());
		assert!(!is_open(&h.doc));
	}

	proptest! {
		#[test]
		fn prop_styling_tracks_state(steps in proptest::collection::vec(prop_oneof![
			Just(None),
			key_strategy().prop_map(Some),
		], 0..30)) {
			let mut h = harness();
			for step in steps {
				match step {
					None => { h.click_id("menuToggle"); }
					Some(key) => { h.press_key(key); }
				}
				assert_consistent(&h.doc);
			}
		}
	}
}
