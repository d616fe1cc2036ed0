// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Glue between browser events and the [`Page`].
//!
//! The page is synchronous; this module turns its [`Task`]s into animation
//! frames and timeouts and turns DOM events back into page [`Event`]s.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use salon_dom_core::{Event, EventOutcome, Interaction, Key, Task};
use salon_page::Page;
use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::document::BrowserDocument;

struct State {
	page: Page,
	doc: BrowserDocument,
}

pub struct App {
	state: RefCell<State>,
	listeners: RefCell<Vec<EventListener>>,
	frame: RefCell<Option<AnimationFrame>>,
	pending_frames: RefCell<Vec<Task>>,
}

impl App {
	/// Mount `page` on `doc` and start listening for browser events.
	pub fn start(page: Page, doc: BrowserDocument) -> Rc<Self> {
		let app = Rc::new(Self {
			state: RefCell::new(State { page, doc }),
			listeners: RefCell::new(Vec::new()),
			frame: RefCell::new(None),
			pending_frames: RefCell::new(Vec::new()),
		});

		let weak = Rc::downgrade(&app);
		app.state.borrow_mut().doc.set_intersection_sink(Rc::new(move |entries| {
			let Some(app) = weak.upgrade() else {
				return;
			};
			for entry in entries {
				app.dispatch(Event::Intersection(entry));
			}
		}));

		let tasks = {
			let mut state = app.state.borrow_mut();
			let State { page, doc } = &mut *state;
			page.mount(doc);
			page.take_tasks()
		};
		app.install_listeners();
		app.schedule(tasks);
		app
	}

	pub fn dispatch(self: &Rc<Self>, event: Event) -> EventOutcome {
		let (outcome, tasks) = {
			let Ok(mut state) = self.state.try_borrow_mut() else {
				debug!(?event, "page busy, event dropped");
				return EventOutcome::Ignored;
			};
			let State { page, doc } = &mut *state;
			let outcome = page.dispatch(doc, &event);
			(outcome, page.take_tasks())
		};
		self.schedule(tasks);
		outcome
	}

	fn run_task(self: &Rc<Self>, task: &Task) {
		let tasks = {
			let Ok(mut state) = self.state.try_borrow_mut() else {
				debug!(owner = task.owner(), "page busy, task dropped");
				return;
			};
			let State { page, doc } = &mut *state;
			page.run_task(doc, task);
			page.take_tasks()
		};
		self.schedule(tasks);
	}

	fn schedule(self: &Rc<Self>, tasks: Vec<Task>) {
		for task in tasks {
			match task {
				Task::AnimationFrame { .. } => {
					self.pending_frames.borrow_mut().push(task);
					self.request_frame();
				}
				Task::Timeout { delay, .. } => {
					let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
					let weak = Rc::downgrade(self);
					trace!(owner = task.owner(), millis, "timeout scheduled");
					Timeout::new(millis, move || {
						if let Some(app) = weak.upgrade() {
							app.run_task(&task);
						}
					})
					.forget();
				}
			}
		}
	}

	fn request_frame(self: &Rc<Self>) {
		if self.frame.borrow().is_some() {
			return;
		}
		let weak = Rc::downgrade(self);
		let handle = request_animation_frame(move |_| {
			let Some(app) = weak.upgrade() else {
				return;
			};
			app.frame.borrow_mut().take();
			let frames = std::mem::take(&mut *app.pending_frames.borrow_mut());
			for task in &frames {
				app.run_task(task);
			}
		});
		*self.frame.borrow_mut() = Some(handle);
	}

	fn install_listeners(self: &Rc<Self>) {
		let state = self.state.borrow();
		let window = state.doc.window().clone();
		let document = state.doc.raw().clone();
		let mut listeners = Vec::new();

		for interaction in state.page.interactions() {
			let weak = Rc::downgrade(self);
			let listener = match interaction {
				Interaction::Click(node) => {
					let Some(element) = state.doc.element(node) else {
						continue;
					};
					EventListener::new_with_options(
						&element,
						"click",
						EventListenerOptions::enable_prevent_default(),
						move |event| {
							let outcome = with_app(&weak, |app| app.dispatch(Event::Click { target: node }));
							if outcome.prevents_default() {
								event.prevent_default();
							}
						},
					)
				}
				Interaction::KeyDown => EventListener::new(&document, "keydown", move |event| {
					let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
						return;
					};
					let key = Key::from_dom(&event.key());
					with_app(&weak, |app| app.dispatch(Event::KeyDown(key)));
				}),
				Interaction::Scroll => EventListener::new(&window, "scroll", move |_| {
					with_app(&weak, |app| app.dispatch(Event::Scroll));
				}),
				Interaction::Resize => EventListener::new(&window, "resize", move |_| {
					with_app(&weak, |app| app.dispatch(Event::Resize));
				}),
				Interaction::Visibility(_) => continue,
			};
			listeners.push(listener);
		}

		debug!(listeners = listeners.len(), "browser listeners installed");
		*self.listeners.borrow_mut() = listeners;
	}

	/// Remove every listener and unmount the page.
	pub fn shutdown(&self) {
		self.listeners.borrow_mut().clear();
		self.frame.borrow_mut().take();
		self.pending_frames.borrow_mut().clear();
		if let Ok(mut state) = self.state.try_borrow_mut() {
			let State { page, doc } = &mut *state;
			page.unmount(doc);
			doc.disconnect();
		}
	}
}

fn with_app(weak: &Weak<App>, f: impl FnOnce(&Rc<App>) -> EventOutcome) -> EventOutcome {
	weak.upgrade().map_or(EventOutcome::Ignored, |app| f(&app))
}
