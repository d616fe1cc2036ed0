// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use tracing::trace;

use salon_dom_core::{Action, Document, Interaction, ListenerRegistry, NodeId, ObserveOptions, Task, TimerToken};

/// Page-wide bookkeeping shared by all controllers: subscriptions, pending
/// tasks and emitted actions.
#[derive(Debug, Default)]
pub struct Scheduler {
	pub(crate) registry: ListenerRegistry,
	tasks: Vec<Task>,
	actions: Vec<Action>,
	next_token: u64,
}

impl Scheduler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn registry(&self) -> &ListenerRegistry {
		&self.registry
	}

	pub fn take_tasks(&mut self) -> Vec<Task> {
		std::mem::take(&mut self.tasks)
	}

	pub fn take_actions(&mut self) -> Vec<Action> {
		std::mem::take(&mut self.actions)
	}

	pub(crate) fn push_action(&mut self, action: Action) {
		self.actions.push(action);
	}

	pub fn has_pending_actions(&self) -> bool {
		!self.actions.is_empty()
	}
}

/// Everything a controller may touch while mounting or handling an event.
pub struct Context<'a> {
	pub doc: &'a mut dyn Document,
	owner: &'a str,
	scheduler: &'a mut Scheduler,
}

impl<'a> Context<'a> {
	pub fn new(doc: &'a mut dyn Document, owner: &'a str, scheduler: &'a mut Scheduler) -> Self {
		Self { doc, owner, scheduler }
	}

	pub fn owner(&self) -> &str {
		self.owner
	}

	pub fn listen(&mut self, interaction: Interaction) {
		self.scheduler.registry.register(self.owner, interaction);
	}

	pub fn listen_click(&mut self, node: NodeId) {
		self.listen(Interaction::Click(node));
	}

	pub fn stop_listening(&mut self, interaction: &Interaction) {
		self.scheduler.registry.unregister(self.owner, interaction);
	}

	/// Register for visibility changes of `node` and start observing it.
	pub fn observe(&mut self, node: NodeId, options: &ObserveOptions) {
		self.listen(Interaction::Visibility(node));
		self.doc.observe(node, options);
	}

	/// Stop observing `node` for good.
	pub fn unobserve(&mut self, node: NodeId) {
		self.stop_listening(&Interaction::Visibility(node));
		self.doc.unobserve(node);
	}

	pub fn request_frame(&mut self) {
		trace!(owner = self.owner, "animation frame requested");
		self.scheduler.tasks.push(Task::AnimationFrame {
			owner: self.owner.to_string(),
		});
	}

	pub fn set_timeout(&mut self, delay: Duration) -> TimerToken {
		self.scheduler.next_token += 1;
		let token = TimerToken(self.scheduler.next_token);
		trace!(owner = self.owner, %token, delay_ms = delay.as_millis() as u64, "timeout requested");
		self.scheduler.tasks.push(Task::Timeout {
			owner: self.owner.to_string(),
			delay,
			token,
		});
		token
	}

	pub fn emit(&mut self, action: Action) {
		self.scheduler.actions.push(action);
	}
}
