// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The two gallery carousels of the page.
//!
//! [`GalleryStrip`] scrolls a horizontal strip of thumbnails one item at a
//! time. [`GalleryViewer`] shows one configured image at a time with
//! prev/next buttons and a row of dots, wrapping at both ends.

mod strip;
mod viewer;

pub use strip::{strip_step, GalleryStrip, STRIP_ID};
pub use viewer::{GalleryViewer, ViewerState, VIEWER_ID};
