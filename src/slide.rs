use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::constants::*;
use crate::error::SlideshowError;
use crate::platform::Platform;
use crate::report::Reporter;

/// One image of a slideshow with its accessible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }

    /// Label used when the markup gives none. `position` is 1-based.
    pub fn default_alt(position: usize) -> String {
        format!("Slide {position}")
    }
}

/// Raw slide attributes of one container.
///
/// `data-files` (the compact form) wins over `data-slides` (the structured
/// JSON form) when both are present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlideSource {
    pub files: Option<String>,
    pub base: Option<String>,
    pub alt: Option<String>,
    pub slides: Option<String>,
}

impl SlideSource {
    pub fn from_element<P: Platform>(platform: &P, container: &P::Element) -> Self {
        Self {
            files: platform.attribute(container, FILES_ATTR),
            base: platform.attribute(container, BASE_ATTR),
            alt: platform.attribute(container, ALT_ATTR),
            slides: platform.attribute(container, SLIDES_ATTR),
        }
    }

    pub fn parse(&self) -> Result<Vec<Slide>, SlideshowError> {
        if let Some(files) = &self.files {
            return parse_files(files, self.base.as_deref(), self.alt.as_deref());
        }
        if let Some(json) = &self.slides {
            return parse_json(json);
        }
        Err(SlideshowError::MissingConfiguration)
    }
}

/// Read the container's slide list, reporting any problem.
///
/// Never fails: a container whose attributes cannot be turned into slides
/// yields an empty list.
pub fn parse_slides<P: Platform>(
    platform: &P,
    reporter: &Reporter<P>,
    container: &P::Element,
) -> Vec<Slide> {
    let source = SlideSource::from_element(platform, container);
    match source.parse() {
        Ok(slides) => slides,
        Err(err) => {
            if let (SlideshowError::InvalidSlides(cause), Some(json)) = (&err, &source.slides) {
                error!(target: "slideshow", value = %json, %cause, "data-slides value");
            }
            reporter.report(&err);
            Vec::new()
        }
    }
}

// --- Compact form: data-files="a.svg, b.svg" + data-base + data-alt ---

fn parse_files(
    files: &str,
    base: Option<&str>,
    alt: Option<&str>,
) -> Result<Vec<Slide>, SlideshowError> {
    let base = normalize_base(base.unwrap_or(""));
    let alt = alt.filter(|alt| !alt.is_empty());

    let slides: Vec<Slide> = files
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .enumerate()
        .map(|(idx, name)| {
            let src = if name.starts_with('/') {
                name.to_string()
            } else {
                format!("{base}{name}")
            };
            let alt = alt.map_or_else(|| Slide::default_alt(idx + 1), str::to_string);
            Slide { src, alt }
        })
        .collect();

    if slides.is_empty() {
        return Err(SlideshowError::EmptyFiles);
    }
    Ok(slides)
}

// Non-empty bases end with exactly one '/'
fn normalize_base(base: &str) -> String {
    if base.is_empty() {
        String::new()
    } else {
        format!("{}/", base.trim_end_matches('/'))
    }
}

// --- Structured form: data-slides='[{"src": "...", "alt": "..."}]' ---

fn parse_json(json: &str) -> Result<Vec<Slide>, SlideshowError> {
    let value: Value = serde_json::from_str(json).map_err(SlideshowError::InvalidSlides)?;

    let entries = match value {
        Value::Array(entries) if !entries.is_empty() => entries,
        _ => return Err(SlideshowError::EmptySlides),
    };

    // Entries without a usable src are dropped before numbering
    let slides = entries
        .iter()
        .filter_map(|entry| {
            let src = truthy_text(entry, "src")?;
            Some((src, truthy_text(entry, "alt")))
        })
        .enumerate()
        .map(|(idx, (src, alt))| Slide {
            src,
            alt: alt.unwrap_or_else(|| Slide::default_alt(idx + 1)),
        })
        .collect();

    Ok(slides)
}

// Scalar values that count as set in markup: non-empty strings, non-zero
// numbers and `true`. Numbers and booleans are used in their text form.
fn truthy_text(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| *f != 0.0 && !f.is_nan())
            .map(|f| f.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
