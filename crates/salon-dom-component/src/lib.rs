// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Controller trait and the host that drives a set of controllers.

mod context;
mod host;

use salon_dom_core::{Action, ComponentError, Event, EventOutcome};

pub use context::{Context, Scheduler};
pub use host::Host;
pub use salon_dom_core::{Direction, Locale};

/// Core trait for page controllers.
///
/// A controller binds to its elements in [`mount`](Controller::mount),
/// registering the interactions it wants, then reacts to events and to
/// actions emitted by other controllers.
pub trait Controller {
	fn id(&self) -> &str;

	/// Called once at start-up. Returning
	/// [`ComponentError::MissingElement`] disables the controller quietly.
	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError>;

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome;

	fn update(&mut self, _action: &Action, _ctx: &mut Context<'_>) {}

	/// Called on teardown, after the page dropped this controller's
	/// subscriptions.
	fn unmount(&mut self, _ctx: &mut Context<'_>) {}
}
