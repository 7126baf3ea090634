//! Runtime configuration for slideshow widgets.
//!
//! A [`Config`] is set once when the page boots and is read-only afterwards.
//! It can be built in code or loaded from JSON, where every field is optional:
//!
//! ```
//! use slideshow_widget::config::Config;
//!
//! let config = Config::from_json(r#"{"debug": true, "markers": {"container": "gallery"}}"#).unwrap();
//! assert!(config.debug);
//! assert_eq!(config.markers.container, "gallery");
//! assert_eq!(config.markers.image, "ukpa-slide-img");
//! ```
//!
//! In the browser the JSON is read from the page's root element, e.g.
//! `<html data-slideshow-config='{"debug": true}'>`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::*;
use crate::error::SlideshowError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Surface every diagnostic as a blocking alert, not just a console log.
    pub debug: bool,

    /// Class names used to locate containers and their children.
    pub markers: Markers,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, SlideshowError> {
        serde_json::from_str(json).map_err(SlideshowError::InvalidConfig)
    }

    /// Config from the page's config attribute, if any. A malformed value
    /// is logged and the defaults are used.
    pub fn from_page_attribute(raw: Option<&str>) -> Self {
        match raw.map(Self::from_json) {
            None => Self::default(),
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                warn!(target: "slideshow", "{err}, using defaults");
                Self::default()
            }
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Class names (without the leading dot) of the slideshow markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub container: String,
    pub image: String,
    pub next: String,
    pub count: String,
    pub total: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            container: CONTAINER_CLASS.to_string(),
            image: IMAGE_CLASS.to_string(),
            next: NEXT_CLASS.to_string(),
            count: COUNT_CLASS.to_string(),
            total: TOTAL_CLASS.to_string(),
        }
    }
}
