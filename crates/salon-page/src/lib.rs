// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The salon landing page runtime.
//!
//! [`Page`] builds every controller from a [`SiteConfig`], mounts them on a
//! [`Document`] and routes events to them. The backend feeds it DOM events
//! and runs the [`Task`]s it hands back.

use std::sync::Arc;

use salon_common_i18n::{Catalog, Locale};
use salon_dom_component::Host;
use salon_dom_core::{Document, Event, EventOutcome, Interaction, Task};
use salon_site_config::{load_config_from_toml, ConfigError, SiteConfig};
use salon_widget_gallery::{GalleryStrip, GalleryViewer};
use salon_widget_navigation::NavigationController;
use salon_widget_reveal::{LazyImageController, RevealController};
use salon_widget_scroll::ScrollController;
use salon_widget_translation::TranslationController;
use tracing::{debug, info, warn};

pub use salon_site_config as config;

/// Load the page configuration from the optional embedded TOML document.
///
/// A missing or blank document yields the defaults.
pub fn try_resolve_config(page_toml: Option<&str>) -> Result<SiteConfig, ConfigError> {
	match page_toml.filter(|c| !c.trim().is_empty()) {
		Some(content) => load_config_from_toml(content),
		None => {
			debug!("no page configuration, using defaults");
			Ok(SiteConfig::default())
		}
	}
}

/// Like [`try_resolve_config`], but invalid configuration is logged and
/// replaced by the defaults.
pub fn resolve_config(page_toml: Option<&str>) -> SiteConfig {
	try_resolve_config(page_toml).unwrap_or_else(|e| {
		warn!(error = %e, "invalid page configuration, using defaults");
		SiteConfig::default()
	})
}

#[derive(Debug)]
pub struct Page {
	host: Host,
	config: SiteConfig,
	locale: Locale,
}

impl Page {
	/// Build the page with the catalogs compiled into the binary.
	///
	/// `document_lang` is the `lang` attribute the page was served with. It
	/// picks the starting locale when the configuration names none.
	pub fn new(config: SiteConfig, document_lang: Option<&str>) -> Self {
		Self::with_catalog(config, Arc::new(salon_common_i18n::embedded().clone()), document_lang)
	}

	pub fn with_catalog(config: SiteConfig, catalog: Arc<Catalog>, document_lang: Option<&str>) -> Self {
		let locale = config.i18n.initial_locale(document_lang);

		let mut host = Host::new()
			.with(NavigationController::new(config.navigation.clone()))
			.with(TranslationController::new(Arc::clone(&catalog), locale))
			.with(ScrollController::new(config.scroll.clone()))
			.with(GalleryStrip::new(&config.gallery))
			.with(GalleryViewer::new(config.gallery.images.clone(), catalog, locale))
			.with(RevealController::new(&config.reveal));
		if config.reveal.lazy_images {
			host.add(Box::new(LazyImageController::new()));
		}

		Self { host, config, locale }
	}

	pub fn config(&self) -> &SiteConfig {
		&self.config
	}

	/// Locale the page starts in.
	pub fn initial_locale(&self) -> Locale {
		self.locale
	}

	pub fn host(&self) -> &Host {
		&self.host
	}

	pub fn into_host(self) -> Host {
		self.host
	}

	pub fn mount(&mut self, doc: &mut dyn Document) {
		self.host.mount(doc);
		let mounted: Vec<&str> = self
			.host
			.controller_ids()
			.into_iter()
			.filter(|id| self.host.is_mounted(id))
			.collect();
		info!(locale = %self.locale, controllers = ?mounted, "page mounted");
	}

	pub fn dispatch(&mut self, doc: &mut dyn Document, event: &Event) -> EventOutcome {
		self.host.dispatch(doc, event)
	}

	pub fn run_task(&mut self, doc: &mut dyn Document, task: &Task) {
		self.host.run_task(doc, task);
	}

	pub fn take_tasks(&mut self) -> Vec<Task> {
		self.host.take_tasks()
	}

	/// Interactions the backend must listen for.
	pub fn interactions(&self) -> Vec<Interaction> {
		self.host.interactions()
	}

	/// Tear down every controller and its subscriptions.
	pub fn unmount(&mut self, doc: &mut dyn Document) {
		self.host.unmount(doc);
		debug!("page unmounted");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_config_fallbacks() {
		assert_eq!(resolve_config(None), SiteConfig::default());
		assert_eq!(resolve_config(Some("  \n")), SiteConfig::default());
		assert_eq!(resolve_config(Some("[bogus]\nx = 1\n")), SiteConfig::default());
		assert_eq!(
			resolve_config(Some("[scroll]\nscrolled_threshold_px = 600\n")),
			SiteConfig::default()
		);
		assert_eq!(resolve_config(Some("not toml [")), SiteConfig::default());
	}

	#[test]
	fn test_try_resolve_config_reports_errors() {
		assert!(try_resolve_config(None).is_ok());
		let err = try_resolve_config(Some("[i18n]\ndefault_locale = \"fr\"\n")).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { .. }));
	}

	#[test]
	fn test_resolve_config_reads_page_toml() {
		let config = resolve_config(Some("[i18n]\ndefault_locale = \"en\"\n"));
		assert_eq!(config.i18n.default_locale, Some(Locale::En));
	}

	#[test]
	fn test_controller_set_follows_config() {
		let page = Page::new(SiteConfig::default(), None);
		assert_eq!(
			page.host().controller_ids(),
			vec![
				"navigation",
				"translation",
				"scroll",
				"gallery-strip",
				"gallery-viewer",
				"reveal",
				"lazy-images"
			]
		);

		let config = resolve_config(Some("[reveal]\nlazy_images = false\n"));
		let page = Page::new(config, None);
		assert!(!page.host().controller_ids().contains(&"lazy-images"));
	}

	#[test]
	fn test_initial_locale_from_config() {
		let config = resolve_config(Some("[i18n]\ndefault_locale = \"en\"\n"));
		assert_eq!(Page::new(config, Some("ar")).initial_locale(), Locale::En);
		assert_eq!(Page::new(SiteConfig::default(), None).initial_locale(), Locale::Ar);
		assert_eq!(Page::new(SiteConfig::default(), Some("en")).initial_locale(), Locale::En);
	}
}
