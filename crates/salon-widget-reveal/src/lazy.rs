// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use salon_dom_component::{Context, Controller};
use salon_dom_core::{ComponentError, Event, EventOutcome, ObserveOptions, Selector};
use tracing::{debug, trace};

use crate::ArmedSet;

pub const LAZY_ID: &str = "lazy-images";

const DATA_SRC: &str = "data-src";

/// Swaps `data-src` into `src` the first time an image becomes visible.
#[derive(Debug, Default)]
pub struct LazyImageController {
	armed: ArmedSet,
}

impl LazyImageController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pending(&self) -> usize {
		self.armed.len()
	}
}

impl Controller for LazyImageController {
	fn id(&self) -> &str {
		LAZY_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		let images = ctx.doc.query_all(&Selector::tag_attr("img", DATA_SRC));
		if images.is_empty() {
			return Err(ComponentError::MissingElement("img[data-src]".to_string()));
		}
		self.armed.clear();
		let options = ObserveOptions::default();
		for image in images {
			ctx.observe(image, &options);
			self.armed.arm(image);
		}
		debug!(images = self.armed.len(), "lazy images armed");
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		let Event::Intersection(entry) = event else {
			return EventOutcome::Ignored;
		};
		if !self.armed.fire(entry) {
			return EventOutcome::Ignored;
		}
		let image = entry.target;
		if let Some(src) = ctx.doc.attribute(image, DATA_SRC) {
			ctx.doc.set_attribute(image, "src", &src);
			ctx.doc.remove_attribute(image, DATA_SRC);
			trace!(%src, "lazy image loaded");
		}
		ctx.unobserve(image);
		EventOutcome::Handled
	}

	fn unmount(&mut self, _ctx: &mut Context<'_>) {
		self.armed.clear();
	}
}
