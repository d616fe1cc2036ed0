// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use salon_dom_component::{Controller, Host};
use salon_dom_core::{Action, Event, EventOutcome, IntersectionEntry, Key, NodeId, Task};

use crate::fake::FakeDocument;

/// Drives a [`Host`] against a [`FakeDocument`] with a virtual clock.
///
/// Animation frames and timeouts requested by controllers are queued and
/// only run when the test asks for them, so every step is deterministic.
pub struct Harness {
	pub doc: FakeDocument,
	pub host: Host,
	now: Duration,
	frames: Vec<Task>,
	timers: Vec<(Duration, Task)>,
}

impl Harness {
	pub fn new(doc: FakeDocument) -> Self {
		Self::with_host(doc, Host::new())
	}

	pub fn with_host(doc: FakeDocument, host: Host) -> Self {
		Self {
			doc,
			host,
			now: Duration::ZERO,
			frames: Vec::new(),
			timers: Vec::new(),
		}
	}

	pub fn with_controller(mut self, controller: impl Controller + 'static) -> Self {
		self.host.add(Box::new(controller));
		self
	}

	pub fn mount(mut self) -> Self {
		self.host.mount(&mut self.doc);
		self.collect_tasks();
		self
	}

	pub fn unmount(&mut self) {
		self.host.unmount(&mut self.doc);
		self.frames.clear();
		self.timers.clear();
	}

	pub fn now(&self) -> Duration {
		self.now
	}

	pub fn dispatch(&mut self, event: Event) -> EventOutcome {
		let outcome = self.host.dispatch(&mut self.doc, &event);
		self.collect_tasks();
		outcome
	}

	pub fn broadcast(&mut self, action: Action) {
		self.host.broadcast(&mut self.doc, action);
		self.collect_tasks();
	}

	pub fn click(&mut self, node: NodeId) -> EventOutcome {
		self.dispatch(Event::Click { target: node })
	}

	pub fn click_id(&mut self, id: &str) -> EventOutcome {
		let node = self.doc.id(id);
		self.click(node)
	}

	pub fn press_key(&mut self, key: Key) -> EventOutcome {
		self.dispatch(Event::KeyDown(key))
	}

	/// Move the window and fire one scroll event. Frames are not run.
	pub fn scroll_to(&mut self, y: f64) -> EventOutcome {
		self.doc.set_scroll_y(y);
		self.dispatch(Event::Scroll)
	}

	/// Scroll and run the frame the scroll requested.
	pub fn scroll_and_settle(&mut self, y: f64) {
		self.scroll_to(y);
		self.run_frames();
	}

	pub fn resize(&mut self, viewport_width: f64) -> EventOutcome {
		self.doc.set_viewport_width(viewport_width);
		self.dispatch(Event::Resize)
	}

	/// Report `node` as entering the viewport. Like a real observer, only
	/// observed nodes are reported.
	pub fn enter_viewport(&mut self, node: NodeId) -> EventOutcome {
		self.intersection(node, true)
	}

	pub fn leave_viewport(&mut self, node: NodeId) -> EventOutcome {
		self.intersection(node, false)
	}

	fn intersection(&mut self, node: NodeId, is_intersecting: bool) -> EventOutcome {
		if !self.doc.is_observed(node) {
			return EventOutcome::Ignored;
		}
		self.dispatch(Event::Intersection(IntersectionEntry {
			target: node,
			is_intersecting,
		}))
	}

	/// Run all pending animation frames. Frames requested while running
	/// wait for the next call. Returns how many frames ran.
	pub fn run_frames(&mut self) -> usize {
		let frames = std::mem::take(&mut self.frames);
		for task in &frames {
			self.host.run_task(&mut self.doc, task);
			self.collect_tasks();
		}
		frames.len()
	}

	/// Advance the virtual clock, firing due timeouts in deadline order.
	pub fn advance(&mut self, by: Duration) {
		let deadline = self.now + by;
		loop {
			let next = self
				.timers
				.iter()
				.enumerate()
				.filter(|(_, (due, _))| *due <= deadline)
				.min_by_key(|(_, (due, _))| *due)
				.map(|(i, _)| i);
			let Some(index) = next else {
				break;
			};
			let (due, task) = self.timers.remove(index);
			self.now = due;
			self.host.run_task(&mut self.doc, &task);
			self.collect_tasks();
		}
		self.now = deadline;
	}

	pub fn advance_ms(&mut self, ms: u64) {
		self.advance(Duration::from_millis(ms));
	}

	pub fn pending_frames(&self) -> usize {
		self.frames.len()
	}

	pub fn pending_timers(&self) -> usize {
		self.timers.len()
	}

	/// Dispatch `events` one by one and check the document after each.
	pub fn assert_state_sequence<T, F>(&mut self, events: &[Event], mut extract_state: F, expected: &[T])
	where
		T: PartialEq + std::fmt::Debug,
		F: FnMut(&FakeDocument) -> T,
	{
		assert_eq!(
			events.len(),
			expected.len(),
			"events and expected states must have the same length"
		);

		for (i, (event, expected_state)) in events.iter().zip(expected.iter()).enumerate() {
			self.dispatch(event.clone());
			let actual_state = extract_state(&self.doc);
			assert_eq!(
				&actual_state, expected_state,
				"state mismatch at step {}: expected {:?}, got {:?}",
				i, expected_state, actual_state
			);
		}
	}

	fn collect_tasks(&mut self) {
		for task in self.host.take_tasks() {
			match task {
				Task::AnimationFrame { .. } => self.frames.push(task),
				Task::Timeout { delay, .. } => self.timers.push((self.now + delay, task)),
			}
		}
	}
}
