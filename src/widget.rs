//! One live slideshow: activation, rendering and input bindings.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::SlideshowError;
use crate::gesture::{key_step, TouchTracker};
use crate::platform::{Listener, Platform};
use crate::report::Reporter;
use crate::slide::{parse_slides, Slide};
use crate::state::{Cursor, Step};

/// Shared by every event handler of the widget; lives as long as they do.
pub type SlideshowHandle<P> = Rc<RefCell<Slideshow<P>>>;

pub struct Slideshow<P: Platform> {
    platform: P,
    slides: Vec<Slide>,
    cursor: Cursor,
    image: P::Element,
    count: Option<P::Element>,
    debug: bool,
}

impl<P: Platform> Slideshow<P> {
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.cursor.index()]
    }

    /// Put slide `idx` on screen. Out-of-range indices are ignored.
    pub fn show(&self, idx: usize) {
        let Some(slide) = self.slides.get(idx) else {
            return;
        };
        self.platform.set_image(&self.image, &slide.src, &slide.alt);
        if let Some(count) = &self.count {
            self.platform.set_text(count, &(idx + 1).to_string());
        }
        if self.debug && idx == 0 {
            debug!(target: "slideshow", src = %slide.src, alt = %slide.alt, "showing first slide");
        }
    }

    pub fn step(&mut self, step: Step) {
        let idx = self.cursor.step(step);
        self.show(idx);
    }

    pub fn advance(&mut self) {
        self.step(Step::Advance);
    }

    pub fn retreat(&mut self) {
        self.step(Step::Retreat);
    }
}

/// Bring the slideshow in `container` to life.
///
/// Problems found while parsing the slide list are reported on the spot;
/// the returned error only says why this container stays inert.
pub fn activate<P: Platform>(
    platform: &P,
    config: &Config,
    container: &P::Element,
) -> Result<SlideshowHandle<P>, SlideshowError> {
    let reporter = Reporter::new(platform.clone(), config.debug);
    let markers = &config.markers;

    let slides = parse_slides(platform, &reporter, container);
    let Some(cursor) = Cursor::new(slides.len()) else {
        return Err(SlideshowError::NoSlides);
    };

    // --- Locate the parts; only the image is required ---
    let image = platform
        .find(container, &markers.image)
        .ok_or_else(|| SlideshowError::MissingImage(markers.image.clone()))?;
    let next = platform.find(container, &markers.next);
    let count = platform.find(container, &markers.count);
    let total = platform.find(container, &markers.total);

    if let Some(total) = &total {
        platform.set_text(total, &slides.len().to_string());
    }

    // Broken paths, wrong case, CORS... reported, never fatal
    let on_error = {
        let platform = platform.clone();
        let img = image.clone();
        move || reporter.report(&SlideshowError::ImageLoad(platform.image_src(&img)))
    };
    platform.listen(&image, Listener::ImageError(Box::new(on_error)));

    let slideshow = Rc::new(RefCell::new(Slideshow {
        platform: platform.clone(),
        slides,
        cursor,
        image,
        count,
        debug: config.debug,
    }));
    slideshow.borrow().show(0);

    bind_navigation(platform, container, next.as_ref(), &slideshow);

    // Warm the cache for everything but the slide already shown
    for slide in slideshow.borrow().slides.iter().skip(1) {
        platform.preload(&slide.src);
    }

    info!(target: "slideshow", slides = cursor.len(), "slideshow activated");
    Ok(slideshow)
}

fn bind_navigation<P: Platform>(
    platform: &P,
    container: &P::Element,
    next: Option<&P::Element>,
    slideshow: &SlideshowHandle<P>,
) {
    // --- Next button ---
    if let Some(next) = next {
        let slideshow = slideshow.clone();
        platform.listen(next, Listener::Click(Box::new(move || slideshow.borrow_mut().advance())));
    }

    // --- Keyboard ---
    platform.make_focusable(container);
    {
        let slideshow = slideshow.clone();
        platform.listen(
            container,
            Listener::KeyDown(Box::new(move |key: &str| match key_step(key) {
                Some(step) => {
                    slideshow.borrow_mut().step(step);
                    true
                }
                None => false,
            })),
        );
    }

    // --- Touch ---
    let tracker = Rc::new(Cell::new(TouchTracker::default()));
    {
        let tracker = tracker.clone();
        platform.listen(
            container,
            Listener::TouchStart(Box::new(move |at| {
                let mut current = tracker.get();
                current.begin(at);
                tracker.set(current);
            })),
        );
    }
    {
        let slideshow = slideshow.clone();
        platform.listen(
            container,
            Listener::TouchEnd(Box::new(move |at| {
                let step = tracker.get().end(at);
                slideshow.borrow_mut().step(step);
            })),
        );
    }
}
