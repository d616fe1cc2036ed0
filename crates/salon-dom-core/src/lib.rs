// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types shared by every page controller.
//!
//! The page behaviour never touches a browser API directly. Controllers talk
//! to a [`Document`], receive [`Event`]s for the [`Interaction`]s they
//! registered, and ask for deferred work through [`Task`]s. A backend (the
//! browser, or an in-memory fake in tests) owns the real event loop.

mod action;
mod document;
mod error;
mod event;
mod node;
mod registry;
mod throttle;

pub use action::{Action, ControllerId, Task, TimerToken};
pub use document::{Document, ObserveOptions, ScrollBehavior};
pub use error::{ComponentError, DomError};
pub use event::{Event, EventOutcome, Interaction, IntersectionEntry, Key};
pub use node::{NodeId, Selector};
pub use registry::ListenerRegistry;
pub use throttle::FrameThrottle;

pub use salon_common_i18n::{Direction, Locale};

/// Result type alias using ComponentError as the default error type.
pub type Result<T, E = ComponentError> = std::result::Result<T, E>;
