//! Page-load entry: find every slideshow container and activate it.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::SlideshowError;
use crate::platform::Platform;
use crate::report::Reporter;
use crate::widget::activate;

/// Activate slideshows now, or once the document finishes parsing.
pub fn start<P: Platform>(platform: P, config: Config) {
    if platform.is_loading() {
        debug!(target: "slideshow", "document still loading, deferring");
        let ready = platform.clone();
        platform.on_ready(Box::new(move || {
            init_all(&ready, &config);
        }));
    } else {
        init_all(&platform, &config);
    }
}

/// Activate every container in the document. Returns how many came to life.
///
/// Containers are independent: one that fails is reported and skipped.
pub fn init_all<P: Platform>(platform: &P, config: &Config) -> usize {
    let reporter = Reporter::new(platform.clone(), config.debug);

    let containers = platform.find_all(&config.markers.container);
    if containers.is_empty() {
        reporter.report(&SlideshowError::NoContainers(config.markers.container.clone()));
        return 0;
    }

    let mut active = 0;
    for container in &containers {
        match activate(platform, config, container) {
            Ok(_) => active += 1,
            Err(err) => reporter.report(&err),
        }
    }

    info!(target: "slideshow", found = containers.len(), active, "slideshows initialized");
    active
}
