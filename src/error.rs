use thiserror::Error;

/// Everything that can stop a slideshow (or a single slide) from working.
///
/// None of these are fatal to the page. They are reported through
/// [`crate::report`] and the affected widget stays inert.
#[derive(Debug, Error)]
pub enum SlideshowError {
    /// Container has neither `data-files` nor `data-slides`
    #[error("No data-files or data-slides attribute found on slideshow wrapper")]
    MissingConfiguration,

    /// `data-files` is set but holds no filenames after trimming
    #[error("data-files is present but empty")]
    EmptyFiles,

    /// `data-slides` parsed, but is not a list or is an empty list
    #[error("data-slides parsed but is empty or not an array")]
    EmptySlides,

    /// `data-slides` is not valid JSON
    #[error("Invalid JSON in data-slides: {0}")]
    InvalidSlides(#[source] serde_json::Error),

    /// Parsing produced no usable slide
    #[error("No slides available for this slideshow instance.")]
    NoSlides,

    /// Container has no image element to render into
    #[error("Missing .{0} inside slideshow wrapper")]
    MissingImage(String),

    /// Browser could not fetch the displayed image
    #[error("Image failed to load: {0}")]
    ImageLoad(String),

    /// Page has no slideshow container at all
    #[error("No .{0} elements found on this page")]
    NoContainers(String),

    /// Config JSON handed to the wasm entry point is malformed
    #[error("Invalid slideshow config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
