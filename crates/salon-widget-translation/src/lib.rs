// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bilingual text swap.
//!
//! Every element tagged `data-i18n="key"` gets the catalog text for the
//! active locale. Keys missing from the catalog leave the element alone.
//! The controller also owns `<html lang dir>`, the document title and the
//! labels of the language toggles, which always name the *other* locale.

use std::sync::Arc;

use salon_common_i18n::{Catalog, Locale, TITLE_KEY};
use salon_dom_component::{Context, Controller};
use salon_dom_core::{Action, ComponentError, Event, EventOutcome, NodeId, Selector};
use tracing::{debug, trace};

pub const CONTROLLER_ID: &str = "translation";

pub const I18N_ATTR: &str = "data-i18n";
pub const TOGGLE_ATTR: &str = "data-lang-toggle";
pub const TOGGLE_IDS: [&str; 2] = ["langToggle", "langToggleMobile"];

/// Result of one [`TranslationController::apply_locale`] pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
	pub translated: usize,
	pub missing: usize,
}

#[derive(Debug)]
pub struct TranslationController {
	catalog: Arc<Catalog>,
	locale: Locale,
	toggles: Vec<NodeId>,
}

impl TranslationController {
	pub fn new(catalog: Arc<Catalog>, initial: Locale) -> Self {
		Self {
			catalog,
			locale: initial,
			toggles: Vec::new(),
		}
	}

	/// Controller over the catalogs compiled into the binary.
	pub fn embedded(initial: Locale) -> Self {
		Self::new(Arc::new(salon_common_i18n::embedded().clone()), initial)
	}

	pub fn locale(&self) -> Locale {
		self.locale
	}

	pub fn apply_locale(&mut self, locale: Locale, ctx: &mut Context<'_>) -> ApplyReport {
		self.locale = locale;
		let mut report = ApplyReport::default();

		for node in ctx.doc.query_all(&Selector::attr(I18N_ATTR)) {
			let Some(key) = ctx.doc.attribute(node, I18N_ATTR) else {
				continue;
			};
			match self.catalog.lookup(locale, &key) {
				Some(text) => {
					ctx.doc.set_text(node, text);
					report.translated += 1;
				}
				None => {
					trace!(%locale, key = %key, "no translation, keeping text");
					report.missing += 1;
				}
			}
		}

		ctx.doc.set_lang(locale.code());
		ctx.doc.set_direction(locale.direction());
		if let Some(title) = self.catalog.lookup(locale, TITLE_KEY) {
			ctx.doc.set_title(title);
		}

		let label = locale.other().info().toggle_label;
		for toggle in &self.toggles {
			let target = ctx.doc.first_within(*toggle, &Selector::tag("span")).unwrap_or(*toggle);
			ctx.doc.set_text(target, label);
		}

		debug!(
			%locale,
			direction = %locale.direction(),
			translated = report.translated,
			missing = report.missing,
			"locale applied"
		);
		report
	}

	pub fn toggle_locale(&mut self, ctx: &mut Context<'_>) -> Locale {
		let next = self.locale.other();
		self.apply_locale(next, ctx);
		ctx.emit(Action::LocaleChanged(next));
		next
	}

	fn find_toggles(ctx: &Context<'_>) -> Vec<NodeId> {
		let mut toggles: Vec<NodeId> = TOGGLE_IDS
			.iter()
			.filter_map(|id| ctx.doc.element_by_id(id))
			.collect();
		for node in ctx.doc.query_all(&Selector::attr(TOGGLE_ATTR)) {
			if !toggles.contains(&node) {
				toggles.push(node);
			}
		}
		toggles
	}
}

impl Controller for TranslationController {
	fn id(&self) -> &str {
		CONTROLLER_ID
	}

	fn mount(&mut self, ctx: &mut Context<'_>) -> Result<(), ComponentError> {
		self.toggles = Self::find_toggles(ctx);
		if self.toggles.is_empty() {
			debug!("no language toggles, locale is fixed");
		}
		for toggle in &self.toggles {
			ctx.listen_click(*toggle);
		}
		let locale = self.locale;
		self.apply_locale(locale, ctx);
		ctx.emit(Action::LocaleChanged(locale));
		Ok(())
	}

	fn handle_event(&mut self, event: &Event, ctx: &mut Context<'_>) -> EventOutcome {
		match event {
			Event::Click { target } if self.toggles.contains(target) => {
				self.toggle_locale(ctx);
				EventOutcome::PreventDefault
			}
			_ => EventOutcome::Ignored,
		}
	}

	fn unmount(&mut self, _ctx: &mut Context<'_>) {
		self.toggles.clear();
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use salon_common_i18n::Direction;
	use salon_dom_core::Document;
	use salon_dom_testing::{salon_page, FakeDocument, Harness};

	use super::*;

	fn page(initial: Locale) -> Harness {
		Harness::new(salon_page())
			.with_controller(TranslationController::embedded(initial))
			.mount()
	}

	fn texts(doc: &FakeDocument) -> Vec<String> {
		doc.query_all(&Selector::attr(I18N_ATTR))
			.into_iter()
			.map(|n| doc.text(n))
			.collect()
	}

	fn toggle_label(doc: &FakeDocument, id: &str) -> String {
		let toggle = doc.id(id);
		let span = doc.first_within(toggle, &Selector::tag("span")).unwrap();
		doc.text(span)
	}

	#[test]
	fn test_home_link_scenario() {
		let catalog = Catalog::new()
			.with_entry(Locale::Ar, "nav.home", "الرئيسية")
			.with_entry(Locale::En, "nav.home", "Home");
		let mut doc = FakeDocument::new();
		let body = doc.body();
		doc.element(body, "a").id("home-link").attr(I18N_ATTR, "nav.home").build();
		doc.element(body, "button").id("langToggle").build();

		let mut h = Harness::new(doc)
			.with_controller(TranslationController::new(Arc::new(catalog), Locale::Ar))
			.mount();
		assert_eq!(h.doc.text_of("home-link"), "الرئيسية");
		assert_eq!(h.doc.direction(), Some(Direction::Rtl));

		h.click_id("langToggle");
		assert_eq!(h.doc.text_of("home-link"), "Home");
		assert_eq!(h.doc.direction(), Some(Direction::Ltr));
		assert_eq!(h.doc.lang(), "en");

		h.click_id("langToggle");
		assert_eq!(h.doc.text_of("home-link"), "الرئيسية");
		assert_eq!(h.doc.direction(), Some(Direction::Rtl));
		assert_eq!(h.doc.lang(), "ar");
	}

	#[test]
	fn test_toggle_without_span_gets_label_directly() {
		let mut doc = FakeDocument::new();
		let body = doc.body();
		doc.element(body, "button").id("langToggle").text("?").build();
		let h = Harness::new(doc)
			.with_controller(TranslationController::embedded(Locale::Ar))
			.mount();
		assert_eq!(h.doc.text_of("langToggle"), "EN");
	}

	#[test]
	fn test_toggle_labels_name_other_locale() {
		let mut h = page(Locale::Ar);
		assert_eq!(toggle_label(&h.doc, "langToggle"), "EN");
		assert_eq!(toggle_label(&h.doc, "langToggleMobile"), "EN");
		h.click_id("langToggleMobile");
		assert_eq!(toggle_label(&h.doc, "langToggle"), "عربي");
		assert_eq!(toggle_label(&h.doc, "langToggleMobile"), "عربي");
	}

	#[test]
	fn test_data_attribute_toggles_share_locale() {
		let mut doc = salon_page();
		let body = doc.body();
		let extra = doc.element(body, "a").attr(TOGGLE_ATTR, "").text("x").build();
		let mut h = Harness::new(doc)
			.with_controller(TranslationController::embedded(Locale::Ar))
			.mount();
		assert_eq!(h.doc.text(extra), "EN");
		h.click(extra);
		assert_eq!(h.doc.lang(), "en");
		assert_eq!(toggle_label(&h.doc, "langToggle"), "عربي");
		assert_eq!(h.doc.text(extra), "عربي");
	}

	#[test]
	fn test_missing_key_keeps_text() {
		let mut h = page(Locale::Ar);
		let node = h
			.doc
			.query_all(&Selector::attr(I18N_ATTR))
			.into_iter()
			.find(|n| h.doc.attribute(*n, I18N_ATTR).as_deref() == Some("about.unknownKey"))
			.unwrap();
		assert_eq!(h.doc.text(node), "keep me");
		h.click_id("langToggle");
		assert_eq!(h.doc.text(node), "keep me");
	}

	#[test]
	fn test_title_follows_locale() {
		let mut h = page(Locale::Ar);
		assert_eq!(h.doc.title(), salon_common_i18n::t(Locale::Ar, TITLE_KEY).unwrap());
		h.click_id("langToggle");
		assert_eq!(h.doc.title(), salon_common_i18n::t(Locale::En, TITLE_KEY).unwrap());
	}

	#[test]
	fn test_title_untouched_without_key() {
		let catalog = Catalog::new().with_entry(Locale::En, "nav.home", "Home");
		let mut doc = FakeDocument::new();
		doc.set_title("Salon");
		let h = Harness::new(doc)
			.with_controller(TranslationController::new(Arc::new(catalog), Locale::En))
			.mount();
		assert_eq!(h.doc.title(), "Salon");
	}

	#[test]
	fn test_double_toggle_restores_everything() {
		let mut h = page(Locale::Ar);
		let before = (
			texts(&h.doc),
			h.doc.lang().to_string(),
			h.doc.direction(),
			h.doc.title(),
			toggle_label(&h.doc, "langToggle"),
		);
		h.click_id("langToggle");
		h.click_id("langToggle");
		let after = (
			texts(&h.doc),
			h.doc.lang().to_string(),
			h.doc.direction(),
			h.doc.title(),
			toggle_label(&h.doc, "langToggle"),
		);
		assert_eq!(before, after);
	}

	#[test]
	fn test_toggle_click_prevents_default() {
		let mut h = page(Locale::En);
		assert_eq!(h.click_id("langToggle"), EventOutcome::PreventDefault);
		assert_eq!(h.doc.lang(), "ar");
	}

	proptest! {
		#[test]
		fn prop_every_tagged_element_gets_catalog_text(
			initial in prop_oneof![Just(Locale::Ar), Just(Locale::En)],
			toggles in 0usize..4,
		) {
			let mut h = page(initial);
			for _ in 0..toggles {
				h.click_id("langToggle");
			}
			let locale = if toggles % 2 == 0 { initial } else { initial.other() };
			let catalog = salon_common_i18n::embedded();
			for node in h.doc.query_all(&Selector::attr(I18N_ATTR)) {
				let key = h.doc.attribute(node, I18N_ATTR).unwrap();
				if let Some(text) = catalog.lookup(locale, &key) {
					prop_assert_eq!(h.doc.text(node), text);
				}
			}
			prop_assert_eq!(h.doc.direction().map(|d| d.is_rtl()), Some(locale == Locale::Ar));
		}
	}
}
