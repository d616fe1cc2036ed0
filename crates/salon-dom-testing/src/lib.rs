// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Test support for salon page controllers: an in-memory document, the
//! landing page markup, and a harness with a virtual clock.

mod fake;
mod fixture;
mod harness;

pub use fake::{ElementBuilder, FakeDocument, ScrollCall};
pub use fixture::{salon_page, SECTIONS, STRIP_CONTAINER_WIDTH, STRIP_ITEMS, STRIP_ITEM_WIDTH};
pub use harness::Harness;

#[cfg(feature = "proptest")]
pub mod strategies {
	use proptest::prelude::*;
	use salon_dom_core::Key;

	pub fn key_strategy() -> impl Strategy<Value = Key> {
		prop_oneof![
			Just(Key::Escape),
			Just(Key::Enter),
			Just(Key::ArrowLeft),
			Just(Key::ArrowRight),
			proptest::char::range('a', 'z').prop_map(|c| Key::Other(c.to_string())),
		]
	}

	/// Window scroll offsets, including the region around common thresholds.
	pub fn scroll_offset_strategy() -> impl Strategy<Value = f64> {
		prop_oneof![
			0.0f64..100.0,
			400.0f64..600.0,
			0.0f64..5000.0,
		]
	}

	pub fn scroll_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
		proptest::collection::vec(scroll_offset_strategy(), 0..=max_len)
	}

	/// Signed gallery steps: `true` for next, `false` for previous.
	pub fn step_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
		proptest::collection::vec(any::<bool>(), 0..=max_len)
	}
}

#[cfg(feature = "proptest")]
pub use strategies::{key_strategy, scroll_offset_strategy, scroll_sequence_strategy, step_sequence_strategy};
