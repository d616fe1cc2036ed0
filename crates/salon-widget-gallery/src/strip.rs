// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use salon_dom_component::{Context, Controller};
use salon_dom_core::{ComponentError, Event, EventOutcome, Interaction, NodeId, ScrollBehavior, Selector};
use salon_site_config::GalleryConfig;
use tracing::{debug, trace};

pub const STRIP_ID: &str = "gallery-strip";

/// Horizontal distance of one strip step.
///
/// Uses the measured item width plus the gap, or a fraction of the visible
/// container width when the item cannot be measured.
pub fn strip_step(item_width: Option<f64>, container_width: f64, gap: f64, fallback_ratio: f64) -> f64 {
	match item_width {
		Some(width) if width > 0.0 => width + gap,
		_ => container_width * fallback_ratio,
	}
}

#[derive(Debug)]
pub struct GalleryStrip {
	item_gap_px: f64,
	fallback_step_ratio: f64,
	container: Option<NodeId>,
	first_item: Option<NodeId>,
	prev: Option<NodeId>,
	next: Option<NodeId>,
	step: f64,
}

impl GalleryStrip {
	pub fn new(config: &GalleryConfig) -> Self {
		Self {
			item_gap_px: config.item_gap_px,
			fallback_step_ratio: config.fallback_step_ratio,
			container: None,
			first_item: None,
			prev: None,
			next: None,
			step: 0.0,
		}
	}

	pub fn step(&self) -> f64 {
		self.step
	}

	pub fn measure(&mut self, ctx: &mut Context<'_>) {
		let Some(container) = self.container else {
			return;
		};
		let item_width = self.first_item.and_then(|item| ctx.doc.width(item));
		let container_width = ctx.doc.client_width(container).unwrap_or(0.0);
		self.step = strip_step(item_width, container_width, self.item_gap_px, self.fallback_step_ratio);
		trace!(step = self.step, "strip step measured");
	}

	/// Scroll by `direction` steps; negative goes back.
	pub fn scroll(&mut self, direction: i32, ctx: &mut Context<'_>) {
		let Some(container) = self.container else {
			return;
		};
		if self.step <= 0.0 {
			self.measure(ctx);
		}
		ctx.doc
			.scroll_element_by(container, f64::from(direction) * self.step, ScrollBehavior::Smooth);
	}
}

impl Default for GalleryStrip {
	fn default() -> Self {
		Self::new(&GalleryConfig::default())
	}
}

impl Controller for GalleryStrip {
	fn id(&self) -> &str {
		STRIP_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		let container = ctx
			.doc
			.query_first(&Selector::class("gallery-container"))
			.ok_or_else(|| ComponentError::MissingElement(".gallery-container".to_string()))?;
		let track = ctx
			.doc
			.element_by_id("galleryTrack")
			.ok_or_else(|| ComponentError::MissingElement("#galleryTrack".to_string()))?;
		let first_item = ctx
			.doc
			.children(track)
			.first()
			.copied()
			.ok_or_else(|| ComponentError::MissingElement("#galleryTrack items".to_string()))?;

		self.container = Some(container);
		self.first_item = Some(first_item);
		self.prev = ctx.doc.query_first(&Selector::class("gallery-prev"));
		self.next = ctx.doc.query_first(&Selector::class("gallery-next"));
		for button in [self.prev, self.next].into_iter().flatten() {
			ctx.listen_click(button);
		}
		ctx.listen(Interaction::Resize);

		self.measure(ctx);
		debug!(step = self.step, "gallery strip ready");
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		match event {
			Event::Click { target } if Some(*target) == self.prev => {
				self.scroll(-1, ctx);
				EventOutcome::Handled
			}
			Event::Click { target } if Some(*target) == self.next => {
				self.scroll(1, ctx);
				EventOutcome::Handled
			}
			Event::Resize => {
				self.measure(ctx);
				EventOutcome::Handled
			}
			_ => EventOutcome::Ignored,
		}
	}
}
