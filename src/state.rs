use std::num::NonZeroUsize;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    Advance, // Move to the next slide, wrapping to the first
    Retreat, // Move to the previous slide, wrapping to the last
}

/// Current slide index of one slideshow.
///
/// The length is fixed at creation and never zero, so `index` is always a
/// valid position in the slide list.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cursor {
    index: usize,
    len: NonZeroUsize,
}

impl Cursor {
    /// Cursor at the first slide, or `None` for an empty list.
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// 1-based position, as shown in the counter.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len();
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        self.index = (self.index + self.len() - 1) % self.len();
        self.index
    }

    pub fn step(&mut self, step: Step) -> usize {
        match step {
            Step::Advance => self.advance(),
            Step::Retreat => self.retreat(),
        }
    }
}
