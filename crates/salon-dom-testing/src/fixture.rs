// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The landing page markup the controllers are written against.

use crate::fake::FakeDocument;

/// Top offsets of the page sections, in document pixels.
pub const SECTIONS: &[(&str, f64)] = &[
	("home", 0.0),
	("about", 800.0),
	("services", 1600.0),
	("gallery", 2400.0),
	("contact", 3200.0),
];

pub const STRIP_ITEM_WIDTH: f64 = 300.0;
pub const STRIP_CONTAINER_WIDTH: f64 = 1000.0;
pub const STRIP_ITEMS: usize = 5;

/// Build the full salon landing page.
///
/// Text starts out in Arabic, as served. The viewer dots container starts
/// empty so the gallery fills it.
pub fn salon_page() -> FakeDocument {
	let mut doc = FakeDocument::new();
	let body = doc.body();

	let navbar = doc.element(body, "nav").id("navbar").class("navbar").build();
	let logo = doc.element(navbar, "a").class("logo").attr("href", "#").build();
	doc.element(logo, "span").attr("data-i18n", "logo.title").text("صالون الحيوانات الأليفة").build();

	let menu = doc.element(navbar, "ul").id("navMenu").class("nav-menu").build();
	for (section, key) in [
		("home", "nav.home"),
		("about", "nav.about"),
		("services", "nav.services"),
		("gallery", "nav.gallery"),
		("contact", "nav.contact"),
	] {
		let item = doc.element(menu, "li").build();
		doc.element(item, "a")
			.class("nav-link")
			.attr("href", &format!("#{section}"))
			.attr("data-i18n", key)
			.text(key)
			.build();
	}
	let item = doc.element(menu, "li").build();
	doc.element(item, "a").class("nav-phone").attr("href", "tel:+966500000000").text("0500000000").build();
	let item = doc.element(menu, "li").build();
	let mobile_toggle = doc
		.element(item, "button")
		.id("langToggleMobile")
		.class("lang-toggle")
		.build();
	doc.element(mobile_toggle, "span").text("EN").build();

	let toggle = doc.element(navbar, "button").id("langToggle").class("lang-toggle").build();
	doc.element(toggle, "span").text("EN").build();

	let menu_toggle = doc
		.element(navbar, "button")
		.id("menuToggle")
		.class("menu-toggle")
		.attr("aria-expanded", "false")
		.attr("aria-controls", "navMenu")
		.build();
	for _ in 0..3 {
		doc.element(menu_toggle, "span").class("bar").build();
	}

	doc.element(body, "div").id("navOverlay").class("nav-overlay").build();

	for (section, top) in SECTIONS {
		let node = doc
			.element(body, "section")
			.id(section)
			.offset_top(*top)
			.build();
		let key = match *section {
			"home" => "hero.title".to_string(),
			other => format!("{other}.title"),
		};
		doc.element(node, "h2")
			.attr("data-i18n", &key)
			.attr("data-animate", "fade-up")
			.text(section)
			.build();
	}

	let about = doc.id("about");
	for n in 1..=4 {
		let card = doc.element(about, "div").class("feature").attr("data-animate", "fade-up").build();
		doc.element(card, "h3").attr("data-i18n", &format!("about.feature{n}.title")).build();
		doc.element(card, "p").attr("data-i18n", &format!("about.feature{n}.desc")).build();
	}
	doc.element(about, "p").attr("data-i18n", "about.unknownKey").text("keep me").build();

	let gallery = doc.id("gallery");
	let container = doc
		.element(gallery, "div")
		.class("gallery-container")
		.client_width(STRIP_CONTAINER_WIDTH)
		.build();
	let track = doc.element(container, "div").id("galleryTrack").class("gallery-track").build();
	for n in 1..=STRIP_ITEMS {
		let item = doc
			.element(track, "div")
			.class("gallery-item")
			.width(STRIP_ITEM_WIDTH)
			.build();
		doc.element(item, "img")
			.attr("data-src", &format!("images/strip-{n}.jpg"))
			.attr("alt", "")
			.build();
	}
	doc.element(gallery, "button").class("gallery-prev").build();
	doc.element(gallery, "button").class("gallery-next").build();

	let viewer = doc.element(gallery, "div").class("gallery-viewer").build();
	doc.element(viewer, "img").id("galleryImage").attr("src", "").attr("alt", "").build();
	doc.element(viewer, "button").id("galleryViewerPrev").build();
	doc.element(viewer, "button").id("galleryViewerNext").build();
	doc.element(viewer, "div").id("galleryDots").class("gallery-dots").build();

	let contact = doc.id("contact");
	doc.element(contact, "a")
		.class("cta")
		.attr("href", "#services")
		.attr("data-i18n", "hero.ctaServices")
		.build();

	doc.element(body, "button").id("scrollTop").class("scroll-top").build();

	doc
}
