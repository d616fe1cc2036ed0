// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::time::Duration;

use salon_common_i18n::Locale;

/// Type alias for controller identifiers.
pub type ControllerId = String;

/// Messages controllers emit for each other. The page delivers every action
/// to every mounted controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Close the navigation menu now.
	CloseMenu,
	/// The active locale switched.
	LocaleChanged(Locale),
}

/// Handle identifying one requested timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "timer-{}", self.0)
	}
}

/// Deferred work a controller asks the backend to run. Tasks are fire-once
/// and cannot be cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
	/// Deliver [`Event::AnimationFrame`](crate::Event::AnimationFrame) to `owner`
	/// on the next frame.
	AnimationFrame { owner: ControllerId },
	/// Deliver [`Event::Timer`](crate::Event::Timer) to `owner` after `delay`.
	Timeout {
		owner: ControllerId,
		delay: Duration,
		token: TimerToken,
	},
}

impl Task {
	pub fn owner(&self) -> &str {
		match self {
			Task::AnimationFrame { owner } | Task::Timeout { owner, .. } => owner,
		}
	}
}
