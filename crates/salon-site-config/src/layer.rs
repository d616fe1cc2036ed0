// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::sections::{
	GalleryConfigLayer, I18nConfigLayer, LoggingConfigLayer, NavigationConfigLayer, RevealConfigLayer,
	ScrollConfigLayer,
};

/// One partially specified configuration, as read from a single source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfigLayer {
	pub i18n: Option<I18nConfigLayer>,
	pub navigation: Option<NavigationConfigLayer>,
	pub scroll: Option<ScrollConfigLayer>,
	pub gallery: Option<GalleryConfigLayer>,
	pub reveal: Option<RevealConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

macro_rules! merge_section {
	($self:ident, $other:ident, $field:ident) => {
		if let Some(other) = $other.$field {
			match &mut $self.$field {
				Some(existing) => existing.merge(other),
				None => $self.$field = Some(other),
			}
		}
	};
}

impl SiteConfigLayer {
	/// Overlay `other` on top of `self`; set fields in `other` win.
	pub fn merge(&mut self, other: Self) {
		merge_section!(self, other, i18n);
		merge_section!(self, other, navigation);
		merge_section!(self, other, scroll);
		merge_section!(self, other, gallery);
		merge_section!(self, other, reveal);
		merge_section!(self, other, logging);
	}
}
