// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Resolve the effective starting locale.
///
/// Resolution order (highest to lowest priority):
/// 1. Configured locale (if valid)
/// 2. The document's `lang` attribute (if valid)
/// 3. Fallback to Arabic
///
/// # Example
///
/// ```
/// use salon_common_i18n::{resolve_locale, Locale};
///
/// assert_eq!(resolve_locale(Some("en"), Some("ar")), Locale::En);
/// assert_eq!(resolve_locale(None, Some("en-GB")), Locale::En);
/// assert_eq!(resolve_locale(Some("fr"), Some("de")), Locale::Ar);
/// ```
pub fn resolve_locale(configured: Option<&str>, document_lang: Option<&str>) -> Locale {
	configured
		.and_then(Locale::from_code)
		.or_else(|| document_lang.and_then(Locale::from_code))
		.unwrap_or(DEFAULT_LOCALE)
}
