// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::action::ControllerId;
use crate::event::Interaction;

/// Which controller listens to which interaction.
#[derive(Debug, Default, Clone)]
pub struct ListenerRegistry {
	listeners: Vec<(Interaction, ControllerId)>,
}

impl ListenerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Subscribe `owner`. Registering the same pair twice is a no-op.
	pub fn register(&mut self, owner: &str, interaction: Interaction) {
		if !self.is_registered(owner, &interaction) {
			self.listeners.push((interaction, owner.to_string()));
		}
	}

	pub fn unregister(&mut self, owner: &str, interaction: &Interaction) {
		self.listeners.retain(|(i, o)| !(i == interaction && o == owner));
	}

	/// Drop every subscription of `owner`, returning what was removed.
	pub fn unregister_owner(&mut self, owner: &str) -> Vec<Interaction> {
		let mut removed = Vec::new();
		self.listeners.retain(|(interaction, o)| {
			if o == owner {
				removed.push(*interaction);
				false
			} else {
				true
			}
		});
		removed
	}

	pub fn is_registered(&self, owner: &str, interaction: &Interaction) -> bool {
		self.listeners.iter().any(|(i, o)| i == interaction && o == owner)
	}

	/// Subscribers of `interaction` in registration order.
	pub fn subscribers(&self, interaction: &Interaction) -> Vec<ControllerId> {
		self.listeners
			.iter()
			.filter(|(i, _)| i == interaction)
			.map(|(_, o)| o.clone())
			.collect()
	}

	/// Distinct interactions with at least one subscriber, sorted.
	pub fn interactions(&self) -> Vec<Interaction> {
		let mut interactions: Vec<_> = self.listeners.iter().map(|(i, _)| *i).collect();
		interactions.sort();
		interactions.dedup();
		interactions
	}

	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}
}
