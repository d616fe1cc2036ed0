// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::action::TimerToken;
use crate::node::NodeId;

/// Keyboard keys the page reacts to. Everything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
	Escape,
	Enter,
	ArrowLeft,
	ArrowRight,
	Other(String),
}

impl Key {
	/// Map a DOM `KeyboardEvent.key` value.
	pub fn from_dom(key: &str) -> Self {
		match key {
			"Escape" | "Esc" => Key::Escape,
			"Enter" => Key::Enter,
			"ArrowLeft" | "Left" => Key::ArrowLeft,
			"ArrowRight" | "Right" => Key::ArrowRight,
			other => Key::Other(other.to_string()),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
	pub target: NodeId,
	pub is_intersecting: bool,
}

/// Events delivered to controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	/// Click on an element the controller registered.
	Click { target: NodeId },
	/// Document-level keydown.
	KeyDown(Key),
	/// Window scroll.
	Scroll,
	/// Window resize.
	Resize,
	/// An animation frame the controller requested.
	AnimationFrame,
	/// A timeout the controller requested has elapsed.
	Timer(TimerToken),
	/// Visibility change of an observed element.
	Intersection(IntersectionEntry),
}

impl Event {
	/// The interaction a subscriber must have registered to receive this
	/// event. Frames and timers go straight to the controller that asked.
	pub fn interaction(&self) -> Option<Interaction> {
		match self {
			Event::Click { target } => Some(Interaction::Click(*target)),
			Event::KeyDown(_) => Some(Interaction::KeyDown),
			Event::Scroll => Some(Interaction::Scroll),
			Event::Resize => Some(Interaction::Resize),
			Event::Intersection(entry) => Some(Interaction::Visibility(entry.target)),
			Event::AnimationFrame | Event::Timer(_) => None,
		}
	}
}

/// A named interaction source a controller can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Interaction {
	Click(NodeId),
	KeyDown,
	Scroll,
	Resize,
	Visibility(NodeId),
}

/// Outcome of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EventOutcome {
	/// Event was not handled.
	#[default]
	Ignored,
	/// Event was handled; the browser default still applies.
	Handled,
	/// Event was handled and the browser default must be suppressed.
	PreventDefault,
}

impl EventOutcome {
	/// Combine the outcomes of several subscribers, keeping the strongest.
	pub fn merge(self, other: EventOutcome) -> EventOutcome {
		self.max(other)
	}

	pub fn prevents_default(&self) -> bool {
		matches!(self, EventOutcome::PreventDefault)
	}
}
