//! Diagnostics channel.
//!
//! Every problem is logged at error level. With `debug` set it is also shown
//! to the user as a blocking alert, which makes broken markup obvious while a
//! page is being built.

use tracing::error;

use crate::constants::REPORT_PREFIX;
use crate::error::SlideshowError;
use crate::platform::Platform;

#[derive(Clone)]
pub struct Reporter<P: Platform> {
    platform: P,
    debug: bool,
}

impl<P: Platform> Reporter<P> {
    pub fn new(platform: P, debug: bool) -> Self {
        Self { platform, debug }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn report(&self, err: &SlideshowError) {
        error!(target: "slideshow", "{REPORT_PREFIX} {err}");
        if self.debug {
            self.platform.alert(&format!("{REPORT_PREFIX} {err}"));
        }
    }
}
