// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Pending-flag gate limiting work to once per animation frame.
///
/// A caller asks [`request`](Self::request) on every raw event and only
/// schedules a frame when it returns `true`. The frame callback calls
/// [`complete`](Self::complete) before doing the work.
#[derive(Debug, Default, Clone)]
pub struct FrameThrottle {
	pending: bool,
}

impl FrameThrottle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if no frame is pending and one should be scheduled.
	pub fn request(&mut self) -> bool {
		if self.pending {
			false
		} else {
			self.pending = true;
			true
		}
	}

	/// Clear the pending flag. Returns whether a frame was pending.
	pub fn complete(&mut self) -> bool {
		std::mem::replace(&mut self.pending, false)
	}

	pub fn is_pending(&self) -> bool {
		self.pending
	}
}
