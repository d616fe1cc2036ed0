// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections, one per page behaviour.

mod gallery;
mod i18n;
mod logging;
mod navigation;
mod reveal;
mod scroll;

pub use gallery::{GalleryConfig, GalleryConfigLayer, GalleryImageConfig};
pub use i18n::{I18nConfig, I18nConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use navigation::{NavigationConfig, NavigationConfigLayer};
pub use reveal::{RevealConfig, RevealConfigLayer};
pub use scroll::{ScrollConfig, ScrollConfigLayer};
