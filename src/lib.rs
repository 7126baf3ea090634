//! # slideshow-widget
//!
//! Image slideshows for web pages, configured entirely from markup:
//!
//! ```html
//! <div class="ukpa-slideshow" data-base="/images/slides/" data-files="intro.svg, plan.svg">
//!   <img class="ukpa-slide-img">
//!   <button class="ukpa-slide-next">Next</button>
//!   <span class="ukpa-slide-count"></span> / <span class="ukpa-slide-total"></span>
//! </div>
//! ```
//!
//! The structured form `data-slides='[{"src": "/a.svg", "alt": "Intro"}]'` is
//! accepted when `data-files` is absent.
//!
//! Each container becomes an independent widget cycling through its slides on
//! Next clicks, arrow/space/enter keys and touch swipes. Problems with the
//! markup are reported through [`report`] and leave only that widget inert.
//!
//! All DOM access goes through [`platform::Platform`]. The `web` feature
//! provides the browser implementation and wasm entry points; [`dom`] holds an
//! in-memory document for tests and the native `preview` feature.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod dom;
pub mod error;
pub mod gesture;
pub mod platform;
pub mod report;
pub mod slide;
pub mod state;
pub mod widget;

#[cfg(feature = "preview")]
pub mod preview;
#[cfg(feature = "preview")]
pub mod texture_loader;
#[cfg(feature = "web")]
pub mod web;

pub use config::Config;
pub use error::SlideshowError;
pub use slide::{Slide, SlideSource};
