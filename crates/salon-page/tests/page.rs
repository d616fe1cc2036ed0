// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Whole-page behaviour against the landing page fixture.

use std::time::Duration;

use proptest::prelude::*;
use salon_common_i18n::{t, Direction, Locale};
use salon_dom_core::{Document, EventOutcome, Interaction, Key, NodeId, Selector};
use salon_dom_testing::{key_strategy, salon_page, FakeDocument, Harness, ScrollCall};
use salon_page::{resolve_config, Page};
use salon_site_config::SiteConfig;

fn mounted(config: SiteConfig) -> Harness {
	let page = Page::new(config, None);
	Harness::with_host(salon_page(), page.into_host()).mount()
}

fn default_page() -> Harness {
	mounted(SiteConfig::default())
}

fn menu_open(doc: &FakeDocument) -> bool {
	doc.has_class(doc.id("navMenu"), "active")
}

fn nav_link(doc: &FakeDocument, href: &str) -> NodeId {
	doc.query_within(doc.id("navMenu"), &Selector::tag("a"))
		.into_iter()
		.find(|n| doc.attribute(*n, "href").as_deref() == Some(href))
		.unwrap()
}

fn window_scrolls(doc: &FakeDocument) -> Vec<f64> {
	doc.scroll_log()
		.iter()
		.filter_map(|call| match call {
			ScrollCall::Window { top, .. } => Some(*top),
			ScrollCall::Element { .. } => None,
		})
		.collect()
}

#[test]
fn every_controller_mounts_on_the_full_page() {
	let h = default_page();
	for id in h.host.controller_ids() {
		assert!(h.host.is_mounted(id), "{id} not mounted");
	}
	let interactions = h.host.interactions();
	assert!(interactions.contains(&Interaction::Scroll));
	assert!(interactions.contains(&Interaction::KeyDown));
	assert!(interactions.contains(&Interaction::Resize));
}

#[test]
fn page_starts_in_arabic() {
	let h = default_page();
	assert_eq!(h.doc.lang(), "ar");
	assert_eq!(h.doc.direction(), Some(Direction::Rtl));
	assert_eq!(h.doc.title(), t(Locale::Ar, "page.title").unwrap());
	let link = nav_link(&h.doc, "#home");
	assert_eq!(h.doc.text(link), t(Locale::Ar, "nav.home").unwrap());
}

#[test]
fn configured_english_start() {
	let h = mounted(resolve_config(Some("[i18n]\ndefault_locale = \"en\"\n")));
	assert_eq!(h.doc.lang(), "en");
	assert_eq!(h.doc.direction(), Some(Direction::Ltr));
	let link = nav_link(&h.doc, "#home");
	assert_eq!(h.doc.text(link), "Home");
}

#[test]
fn language_toggle_also_localizes_gallery_alt() {
	let mut h = default_page();
	let image = h.doc.id("galleryImage");
	assert_eq!(
		h.doc.attribute(image, "alt").as_deref(),
		t(Locale::Ar, "gallery.item1.alt")
	);
	h.click_id("galleryViewerNext");
	h.click_id("langToggle");
	assert_eq!(
		h.doc.attribute(image, "alt").as_deref(),
		t(Locale::En, "gallery.item2.alt")
	);
	assert_eq!(h.doc.attribute(image, "src").as_deref(), Some("images/gallery-2.jpg"));
}

#[test]
fn mobile_menu_link_closes_menu_then_scrolls() {
	let mut h = default_page();
	h.resize(400.0);
	h.click_id("menuToggle");
	assert!(menu_open(&h.doc));
	assert!(h.doc.is_scroll_locked());

	let link = nav_link(&h.doc, "#gallery");
	assert_eq!(h.click(link), EventOutcome::PreventDefault);
	assert!(!menu_open(&h.doc));
	assert!(!h.doc.is_scroll_locked());
	assert!(window_scrolls(&h.doc).is_empty());

	h.advance(Duration::from_millis(350));
	assert_eq!(window_scrolls(&h.doc), vec![2330.0]);
	assert_eq!(h.pending_timers(), 0);
}

#[test]
fn desktop_anchor_scrolls_immediately() {
	let mut h = default_page();
	let link = nav_link(&h.doc, "#services");
	h.click(link);
	assert_eq!(window_scrolls(&h.doc), vec![1530.0]);
	assert_eq!(h.pending_timers(), 0);
}

#[test]
fn phone_link_is_left_to_the_browser() {
	let mut h = default_page();
	let link = nav_link(&h.doc, "tel:+966500000000");
	assert_eq!(h.click(link), EventOutcome::Handled);
	assert!(h.doc.scroll_log().is_empty());
}

#[test]
fn scroll_burst_is_throttled_to_one_frame() {
	let mut h = default_page();
	for y in [20.0, 200.0, 640.0] {
		h.scroll_to(y);
	}
	assert_eq!(h.pending_frames(), 1);
	h.run_frames();
	assert!(h.doc.has_class(h.doc.id("navbar"), "scrolled"));
	assert!(h.doc.has_class(h.doc.id("scrollTop"), "active"));
	h.click_id("scrollTop");
	assert_eq!(window_scrolls(&h.doc).last(), Some(&0.0));
}

#[test]
fn reveal_and_lazy_images_fire_once() {
	let mut h = default_page();
	let animated = h.doc.query_all(&Selector::attr("data-animate"));
	let lazy = h.doc.query_all(&Selector::tag_attr("img", "data-src"));
	assert_eq!(h.doc.observed_count(), animated.len() + lazy.len());

	h.enter_viewport(animated[0]);
	h.enter_viewport(lazy[0]);
	assert!(h.doc.has_class(animated[0], "animated"));
	assert_eq!(h.doc.attribute(lazy[0], "src").as_deref(), Some("images/strip-1.jpg"));
	assert_eq!(h.doc.observed_count(), animated.len() + lazy.len() - 2);
	assert_eq!(h.enter_viewport(animated[0]), EventOutcome::Ignored);
}

#[test]
fn lazy_images_can_be_disabled() {
	let h = mounted(resolve_config(Some("[reveal]\nlazy_images = false\n")));
	let lazy = h.doc.query_all(&Selector::tag_attr("img", "data-src"));
	assert!(lazy.iter().all(|n| !h.doc.is_observed(*n)));
}

#[test]
fn unmount_tears_everything_down() {
	let mut h = default_page();
	h.click_id("menuToggle");
	h.unmount();
	assert!(h.host.interactions().is_empty());
	assert_eq!(h.doc.observed_count(), 0);
	assert!(!h.doc.is_scroll_locked());
	assert_eq!(h.click_id("menuToggle"), EventOutcome::Ignored);
	assert_eq!(h.scroll_to(900.0), EventOutcome::Ignored);
}

#[test]
fn missing_sections_only_disable_their_features() {
	let mut doc = FakeDocument::new();
	let body = doc.body();
	doc.element(body, "button").id("langToggle").build();
	doc.element(body, "h1").attr("data-i18n", "nav.home").build();
	let page = Page::new(SiteConfig::default(), None);
	let mut h = Harness::with_host(doc, page.into_host()).mount();

	assert!(!h.host.is_mounted("navigation"));
	assert!(!h.host.is_mounted("gallery-viewer"));
	assert!(h.host.is_mounted("translation"));
	h.click_id("langToggle");
	assert_eq!(h.doc.lang(), "en");
	assert_eq!(h.press_key(Key::Escape), EventOutcome::Ignored);
}

proptest! {
	#[test]
	fn menu_state_stays_consistent_under_mixed_input(
		steps in proptest::collection::vec(prop_oneof![
			Just(0u8),
			Just(1u8),
			Just(2u8),
			key_strategy().prop_map(|_| 3u8),
		], 0..25),
		width in 300.0f64..1400.0,
	) {
		let mut h = default_page();
		h.resize(width);
		for step in steps {
			match step {
				0 => { h.click_id("menuToggle"); }
				1 => { h.click_id("navOverlay"); }
				2 => {
					let link = nav_link(&h.doc, "#about");
					h.click(link);
				}
				_ => { h.press_key(Key::Escape); }
			}
			h.advance(Duration::from_millis(400));
			let open = menu_open(&h.doc);
			prop_assert_eq!(h.doc.is_scroll_locked(), open);
			prop_assert_eq!(h.doc.has_class(h.doc.id("navOverlay"), "active"), open);
		}
	}
}
