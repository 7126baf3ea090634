//! The page capabilities a slideshow needs.
//!
//! Everything the widget does to a document goes through [`Platform`], so the
//! same activation code drives the browser DOM ([`crate::web`]) and the
//! in-memory document used by tests and the native preview ([`crate::dom`]).

use crate::gesture::Point;

/// Event handler bound to an element.
pub enum Listener {
    /// `click`
    Click(Box<dyn Fn()>),
    /// `keydown` with the event's `key`. Returns `true` to suppress the
    /// default browser action.
    KeyDown(Box<dyn Fn(&str) -> bool>),
    /// `touchstart` (passive) at the first changed touch
    TouchStart(Box<dyn Fn(Point)>),
    /// `touchend` (passive) at the first changed touch
    TouchEnd(Box<dyn Fn(Point)>),
    /// Image `error`
    ImageError(Box<dyn Fn()>),
}

impl Listener {
    pub fn event_type(&self) -> &'static str {
        match self {
            Listener::Click(_) => "click",
            Listener::KeyDown(_) => "keydown",
            Listener::TouchStart(_) => "touchstart",
            Listener::TouchEnd(_) => "touchend",
            Listener::ImageError(_) => "error",
        }
    }
}

pub trait Platform: Clone + 'static {
    type Element: Clone + 'static;

    /// Whether the document is still being parsed.
    fn is_loading(&self) -> bool;

    /// Run `callback` once the document structure is parsed.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);

    /// All elements in the document carrying `class`, in document order.
    fn find_all(&self, class: &str) -> Vec<Self::Element>;

    /// First descendant of `scope` carrying `class`.
    fn find(&self, scope: &Self::Element, class: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_text(&self, element: &Self::Element, text: &str);

    fn set_image(&self, element: &Self::Element, src: &str, alt: &str);

    /// The resolved address the image element is currently showing.
    fn image_src(&self, element: &Self::Element) -> String;

    /// Let the element receive keyboard focus.
    fn make_focusable(&self, element: &Self::Element);

    fn listen(&self, element: &Self::Element, listener: Listener);

    /// Start fetching `src` off-screen. Fire-and-forget.
    fn preload(&self, src: &str);

    /// Blocking user-visible notification.
    fn alert(&self, message: &str);
}
