// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-shot visibility triggers.
//!
//! Both controllers keep an armed set of observed elements. The first
//! intersecting entry for an element fires its effect, disarms it and stops
//! observing it. Elements are never re-armed.

mod lazy;

use std::collections::BTreeSet;

use salon_dom_component::{Context, Controller};
use salon_dom_core::{ComponentError, Event, EventOutcome, IntersectionEntry, NodeId, ObserveOptions, Selector};
use salon_site_config::RevealConfig;
use tracing::{debug, trace};

pub use lazy::{LazyImageController, LAZY_ID};

pub const REVEAL_ID: &str = "reveal";

pub const ANIMATE_ATTR: &str = "data-animate";
pub const ANIMATED_CLASS: &str = "animated";

/// Elements still waiting for their first intersection.
#[derive(Debug, Default, Clone)]
pub struct ArmedSet {
	nodes: BTreeSet<NodeId>,
}

impl ArmedSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn arm(&mut self, node: NodeId) {
		self.nodes.insert(node);
	}

	/// Disarm `entry.target` if this entry is its first intersection.
	pub fn fire(&mut self, entry: &IntersectionEntry) -> bool {
		entry.is_intersecting && self.nodes.remove(&entry.target)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn clear(&mut self) {
		self.nodes.clear();
	}
}

#[derive(Debug)]
pub struct RevealController {
	options: ObserveOptions,
	armed: ArmedSet,
}

impl RevealController {
	pub fn new(config: &RevealConfig) -> Self {
		Self {
			options: ObserveOptions {
				threshold: config.threshold,
				root_margin_bottom_px: config.root_margin_bottom_px,
			},
			armed: ArmedSet::new(),
		}
	}

	pub fn pending(&self) -> usize {
		self.armed.len()
	}
}

impl Default for RevealController {
	fn default() -> Self {
		Self::new(&RevealConfig::default())
	}
}

impl Controller for RevealController {
	fn id(&self) -> &str {
		REVEAL_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		let targets = ctx.doc.query_all(&Selector::attr(ANIMATE_ATTR));
		if targets.is_empty() {
			return Err(ComponentError::MissingElement(format!("[{ANIMATE_ATTR}]")));
		}
		self.armed.clear();
		for node in targets {
			ctx.observe(node, &self.options);
			self.armed.arm(node);
		}
		debug!(armed = self.armed.len(), margin = %self.options.root_margin(), "reveal armed");
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		let Event::Intersection(entry) = event else {
			return EventOutcome::Ignored;
		};
		if !self.armed.fire(entry) {
			return EventOutcome::Ignored;
		}
		ctx.doc.add_class(entry.target, ANIMATED_CLASS);
		ctx.unobserve(entry.target);
		trace!(node = %entry.target, remaining = self.armed.len(), "revealed");
		EventOutcome::Handled
	}

	fn unmount(&mut self, _ctx: &mut Context<'_>) {
		self.armed.clear();
	}
}
