use tracing::debug;

/// Where the lightbox is: closed, or showing the image at a flat-sequence
/// index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Navigation state machine for the gallery's modal viewer.
///
/// The machine addresses the flattened, date-ordered image sequence of a
/// [`crate::GroupedGallery`]; it never inspects the images themselves.
/// `next`/`prev` wrap circularly across the whole sequence regardless of
/// date grouping. State is owned by a single mounted gallery instance,
/// purely synchronous, nothing shared.
#[derive(Debug, Clone)]
pub struct Lightbox {
    state: LightboxState,
    len: usize,
    enabled: bool,
}

impl Lightbox {
    /// `len` is the flat-sequence length; `enabled` is the per-gallery
    /// lightbox flag (disabled galleries ignore open requests).
    pub fn new(len: usize, enabled: bool) -> Self {
        Self {
            state: LightboxState::Closed,
            len,
            enabled,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// Index of the image on display, if open.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Guard for `open`: the gallery must have the lightbox enabled and
    /// the index must address an image.
    pub fn can_open(&self, index: usize) -> bool {
        self.enabled && index < self.len
    }

    /// Open on the image at `index`. Returns whether the transition fired.
    pub fn open(&mut self, index: usize) -> bool {
        if !self.can_open(index) {
            debug!(index, len = self.len, enabled = self.enabled, "lightbox open rejected");
            return false;
        }
        self.state = LightboxState::Open { index };
        true
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Step to the next image, wrapping past the end. No-op while closed
    /// or when there is at most one image.
    pub fn next(&mut self) {
        if let LightboxState::Open { index } = self.state {
            if self.len > 1 {
                self.state = LightboxState::Open {
                    index: (index + 1) % self.len,
                };
            }
        }
    }

    /// Step to the previous image, wrapping past the start. Same no-op
    /// rules as [`Lightbox::next`].
    pub fn prev(&mut self) {
        if let LightboxState::Open { index } = self.state {
            if self.len > 1 {
                self.state = LightboxState::Open {
                    index: (index + self.len - 1) % self.len,
                };
            }
        }
    }
}
