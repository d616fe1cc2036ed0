// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Window scroll behaviours: the navbar `scrolled` state, the back-to-top
//! button and smooth scrolling to in-page anchors.

use salon_dom_component::{Context, Controller};
use salon_dom_core::{
	Action, ComponentError, Event, EventOutcome, FrameThrottle, Interaction, NodeId, ScrollBehavior, Selector,
	TimerToken,
};
use salon_site_config::ScrollConfig;
use tracing::{debug, trace};

pub const CONTROLLER_ID: &str = "scroll";

const SCROLLED: &str = "scrolled";
const ACTIVE: &str = "active";

/// Window position for an anchor target, below the fixed navbar.
pub fn anchor_position(target_top: f64, anchor_offset_px: f64) -> f64 {
	(target_top - anchor_offset_px).max(0.0)
}

/// The element id an in-page `href` points at, if any.
///
/// `"#"` alone means "top of page" and is left to the browser.
pub fn anchor_id(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug)]
pub struct ScrollController {
	config: ScrollConfig,
	throttle: FrameThrottle,
	navbar: Option<NodeId>,
	scroll_top: Option<NodeId>,
	menu: Option<NodeId>,
	anchors: Vec<NodeId>,
	deferred: Vec<(TimerToken, NodeId)>,
}

impl ScrollController {
	pub fn new(config: ScrollConfig) -> Self {
		Self {
			config,
			throttle: FrameThrottle::new(),
			navbar: None,
			scroll_top: None,
			menu: None,
			anchors: Vec::new(),
			deferred: Vec::new(),
		}
	}

	pub fn handle_scroll(&self, ctx: &mut Context<'_>) {
		let y = ctx.doc.scroll_y();
		if let Some(navbar) = self.navbar {
			ctx.doc.set_class(navbar, SCROLLED, y > self.config.scrolled_threshold_px);
		}
		if let Some(button) = self.scroll_top {
			ctx.doc.set_class(button, ACTIVE, y > self.config.back_to_top_threshold_px);
		}
		trace!(y, "scroll state updated");
	}

	pub fn scroll_to_top(&self, ctx: &mut Context<'_>) {
		ctx.doc.scroll_window_to(0.0, ScrollBehavior::Smooth);
	}

	/// Handle a click on an in-page link. Returns `Ignored` when the browser
	/// should follow the link itself.
	pub fn scroll_to_anchor(&mut self, href: &str, ctx: &mut Context<'_>) -> EventOutcome {
		let Some(target) = anchor_id(href).and_then(|id| ctx.doc.element_by_id(id)) else {
			trace!(href, "anchor has no target");
			return EventOutcome::Ignored;
		};

		// The latest anchor click wins over any scroll still waiting on the menu.
		self.deferred.clear();
		let menu_open = self.menu.is_some_and(|menu| ctx.doc.has_class(menu, ACTIVE));
		if menu_open {
			ctx.emit(Action::CloseMenu);
			let token = ctx.set_timeout(self.config.menu_close_settle());
			self.deferred.push((token, target));
			debug!(href, %token, "anchor scroll deferred until menu closes");
		} else {
			self.scroll_to_node(target, ctx);
		}
		EventOutcome::PreventDefault
	}

	fn scroll_to_node(&self, target: NodeId, ctx: &mut Context<'_>) {
		let Some(top) = ctx.doc.offset_top(target) else {
			return;
		};
		ctx.doc
			.scroll_window_to(anchor_position(top, self.config.anchor_offset_px), ScrollBehavior::Smooth);
	}
}

impl Default for ScrollController {
	fn default() -> Self {
		Self::new(ScrollConfig::default())
	}
}

impl Controller for ScrollController {
	fn id(&self) -> &str {
		CONTROLLER_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		self.navbar = ctx.doc.element_by_id("navbar");
		self.scroll_top = ctx.doc.element_by_id("scrollTop");
		self.menu = ctx.doc.element_by_id("navMenu");
		self.anchors = ctx.doc.query_all(&Selector::attr_prefix("a", "href", "#"));

		if self.navbar.is_none() && self.scroll_top.is_none() && self.anchors.is_empty() {
			return Err(ComponentError::MissingElement(
				"#navbar, #scrollTop or in-page links".to_string(),
			));
		}

		if self.navbar.is_some() || self.scroll_top.is_some() {
			ctx.listen(Interaction::Scroll);
		}
		if let Some(button) = self.scroll_top {
			ctx.listen_click(button);
		}
		for anchor in &self.anchors {
			ctx.listen_click(*anchor);
		}

		self.throttle = FrameThrottle::new();
		self.deferred.clear();
		self.handle_scroll(ctx);
		debug!(anchors = self.anchors.len(), "scroll controller ready");
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		match event {
			Event::Scroll => {
				if self.throttle.request() {
					ctx.request_frame();
				}
				EventOutcome::Handled
			}
			Event::AnimationFrame => {
				self.throttle.complete();
				self.handle_scroll(ctx);
				EventOutcome::Handled
			}
			Event::Click { target } if Some(*target) == self.scroll_top => {
				self.scroll_to_top(ctx);
				EventOutcome::Handled
			}
			Event::Click { target } if self.anchors.contains(target) => {
				let href = ctx.doc.attribute(*target, "href").unwrap_or_default();
				self.scroll_to_anchor(&href, ctx)
			}
			Event::Timer(token) => {
				let Some(index) = self.deferred.iter().position(|(t, _)| t == token) else {
					return EventOutcome::Ignored;
				};
				let (_, target) = self.deferred.remove(index);
				self.scroll_to_node(target, ctx);
				EventOutcome::Handled
			}
			_ => EventOutcome::Ignored,
		}
	}

	fn unmount(&mut self, _ctx: &mut Context<'_>) {
		self.anchors.clear();
		self.deferred.clear();
		self.throttle = FrameThrottle::new();
	}
}
