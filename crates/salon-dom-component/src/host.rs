// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::{debug, trace, warn};

use salon_dom_core::{Action, Document, Event, EventOutcome, Interaction, Task};

use crate::context::{Context, Scheduler};
use crate::Controller;

/// Upper bound on action cascades handled after one event.
const MAX_ACTION_ROUNDS: usize = 8;

/// Owns a set of controllers and routes events, tasks and actions to them.
#[derive(Default)]
pub struct Host {
	controllers: Vec<Box<dyn Controller>>,
	mounted: Vec<bool>,
	scheduler: Scheduler,
}

impl Host {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, controller: impl Controller + 'static) -> Self {
		self.add(Box::new(controller));
		self
	}

	pub fn add(&mut self, controller: Box<dyn Controller>) {
		self.controllers.push(controller);
		self.mounted.push(false);
	}

	/// Mount every controller. A controller that fails to mount is left
	/// out; the others keep working.
	pub fn mount(&mut self, doc: &mut dyn Document) {
		for (controller, mounted) in self.controllers.iter_mut().zip(self.mounted.iter_mut()) {
			if *mounted {
				continue;
			}
			let id = controller.id().to_string();
			let mut ctx = Context::new(&mut *doc, &id, &mut self.scheduler);
			match controller.mount(&mut ctx) {
				Ok(()) => {
					debug!(controller = %id, "controller mounted");
					*mounted = true;
				}
				Err(e) => {
					debug!(controller = %id, reason = %e, "controller disabled");
					for interaction in self.scheduler.registry.unregister_owner(&id) {
						if let Interaction::Visibility(node) = interaction {
							doc.unobserve(node);
						}
					}
				}
			}
		}
		self.flush_actions(doc);
	}

	/// Deliver `event` to every controller subscribed to its interaction.
	pub fn dispatch(&mut self, doc: &mut dyn Document, event: &Event) -> EventOutcome {
		let Some(interaction) = event.interaction() else {
			trace!(?event, "frame and timer events go through run_task");
			return EventOutcome::Ignored;
		};

		let mut outcome = EventOutcome::Ignored;
		for owner in self.scheduler.registry.subscribers(&interaction) {
			outcome = outcome.merge(self.deliver(doc, &owner, event));
		}
		self.flush_actions(doc);
		outcome
	}

	/// Run a task the backend scheduled earlier.
	pub fn run_task(&mut self, doc: &mut dyn Document, task: &Task) {
		let event = match task {
			Task::AnimationFrame { .. } => Event::AnimationFrame,
			Task::Timeout { token, .. } => Event::Timer(*token),
		};
		self.deliver(doc, task.owner(), &event);
		self.flush_actions(doc);
	}

	/// Deliver `action` to every mounted controller, as if a controller had
	/// emitted it.
	pub fn broadcast(&mut self, doc: &mut dyn Document, action: Action) {
		self.scheduler.push_action(action);
		self.flush_actions(doc);
	}

	pub fn take_tasks(&mut self) -> Vec<Task> {
		self.scheduler.take_tasks()
	}

	/// Interactions the backend must wire up.
	pub fn interactions(&self) -> Vec<Interaction> {
		self.scheduler.registry().interactions()
	}

	pub fn is_mounted(&self, id: &str) -> bool {
		self.position(id).is_some_and(|i| self.mounted[i])
	}

	pub fn controller_ids(&self) -> Vec<&str> {
		self.controllers.iter().map(|c| c.id()).collect()
	}

	/// Drop every subscription and stop observing, then let each
	/// controller clean up.
	pub fn unmount(&mut self, doc: &mut dyn Document) {
		for (controller, mounted) in self.controllers.iter_mut().zip(self.mounted.iter_mut()) {
			if !*mounted {
				continue;
			}
			let id = controller.id().to_string();
			for interaction in self.scheduler.registry.unregister_owner(&id) {
				if let Interaction::Visibility(node) = interaction {
					doc.unobserve(node);
				}
			}
			let mut ctx = Context::new(&mut *doc, &id, &mut self.scheduler);
			controller.unmount(&mut ctx);
			*mounted = false;
			debug!(controller = %id, "controller unmounted");
		}
		self.scheduler.take_actions();
		self.scheduler.take_tasks();
	}

	fn position(&self, id: &str) -> Option<usize> {
		self.controllers.iter().position(|c| c.id() == id)
	}

	fn deliver(&mut self, doc: &mut dyn Document, owner: &str, event: &Event) -> EventOutcome {
		let Some(index) = self.position(owner) else {
			return EventOutcome::Ignored;
		};
		if !self.mounted[index] {
			return EventOutcome::Ignored;
		}
		let controller = &mut self.controllers[index];
		let mut ctx = Context::new(doc, owner, &mut self.scheduler);
		controller.handle_event(event, &mut ctx)
	}

	fn flush_actions(&mut self, doc: &mut dyn Document) {
		for _ in 0..MAX_ACTION_ROUNDS {
			let actions = self.scheduler.take_actions();
			if actions.is_empty() {
				return;
			}
			for action in &actions {
				trace!(?action, "delivering action");
				for (controller, mounted) in self.controllers.iter_mut().zip(self.mounted.iter()) {
					if !*mounted {
						continue;
					}
					let id = controller.id().to_string();
					let mut ctx = Context::new(&mut *doc, &id, &mut self.scheduler);
					controller.update(action, &mut ctx);
				}
			}
		}
		if self.scheduler.has_pending_actions() {
			warn!("action cascade did not settle, dropping remaining actions");
			self.scheduler.take_actions();
		}
	}
}

impl std::fmt::Debug for Host {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Host")
			.field("controllers", &self.controller_ids())
			.field("mounted", &self.mounted)
			.finish()
	}
}
