// Marker classes used to find a slideshow and its parts
pub const CONTAINER_CLASS: &str = "ukpa-slideshow";
pub const IMAGE_CLASS: &str = "ukpa-slide-img";
pub const NEXT_CLASS: &str = "ukpa-slide-next";
pub const COUNT_CLASS: &str = "ukpa-slide-count";
pub const TOTAL_CLASS: &str = "ukpa-slide-total";

// Container attributes
pub const FILES_ATTR: &str = "data-files";   // Comma-separated filenames
pub const BASE_ATTR: &str = "data-base";     // Path prefix for relative filenames
pub const ALT_ATTR: &str = "data-alt";       // Shared alt text
pub const SLIDES_ATTR: &str = "data-slides"; // JSON list of {src, alt}
pub const CONFIG_ATTR: &str = "data-slideshow-config"; // JSON Config on <html>

pub const SWIPE_THRESHOLD: f32 = 30.0;       // Minimum horizontal travel for a swipe (CSS px)
pub const REPORT_PREFIX: &str = "[slideshow]";
