// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Browser entry point.
//!
//! On load the module reads the optional
//! `<script type="application/toml" id="site-config">` block, installs
//! console logging, and mounts the page controllers on the live DOM.

pub mod document;
pub mod logging;
pub mod runtime;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use salon_dom_core::DomError;
use salon_page::{try_resolve_config, Page};
use salon_site_config::{LoggingConfig, SiteConfig};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

pub use document::BrowserDocument;
pub use runtime::App;

/// Id of the script element holding the page configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

thread_local! {
	static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Boot the page once the DOM is parsed. Failures are logged; the static
/// page keeps working.
#[wasm_bindgen(start)]
pub fn start() {
	let Some(document) = web_sys::window().and_then(|window| window.document()) else {
		boot_or_log();
		return;
	};
	if must_wait_for_dom(&document.ready_state()) {
		EventListener::once(&document, "DOMContentLoaded", |_| boot_or_log()).forget();
	} else {
		boot_or_log();
	}
}

/// `document.readyState` is `"loading"` until parsing finishes; the
/// controllers' elements may not exist yet.
fn must_wait_for_dom(ready_state: &str) -> bool {
	ready_state == "loading"
}

fn boot_or_log() {
	if let Err(e) = boot() {
		error!(error = %e, "salon page behaviours unavailable");
	}
}

fn boot() -> Result<(), DomError> {
	let doc = BrowserDocument::new()?;

	let loaded = try_resolve_config(doc.text_by_id(CONFIG_ELEMENT_ID).as_deref());
	let filter = match &loaded {
		Ok(config) => config.logging.filter.clone(),
		Err(_) => LoggingConfig::default().filter,
	};
	logging::init(&filter);
	let config = loaded.unwrap_or_else(|e| {
		warn!(error = %e, "invalid page configuration, using defaults");
		SiteConfig::default()
	});

	let page = Page::new(config, doc.document_lang().as_deref());
	let app = App::start(page, doc);
	APP.with(|slot| {
		if let Some(previous) = slot.borrow_mut().replace(app) {
			previous.shutdown();
		}
	});
	info!("salon page started");
	Ok(())
}

/// Tear the page behaviours down, removing every listener and observer.
#[wasm_bindgen]
pub fn stop() {
	APP.with(|slot| {
		if let Some(app) = slot.borrow_mut().take() {
			app.shutdown();
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_boot_waits_only_while_loading() {
		assert!(must_wait_for_dom("loading"));
		assert!(!must_wait_for_dom("interactive"));
		assert!(!must_wait_for_dom("complete"));
	}
}
