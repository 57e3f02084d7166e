// Page lifecycle across pagehide/pageshow. Kept free of web-sys so host tests can include it.

/// Where the page is in its navigation lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    Live,
    /// Hidden into the back/forward cache; the browser freezes timers and
    /// frames and may restore the page as is.
    Cached,
    /// Unloaded for good. Never left.
    Closed,
}

impl PageState {
    /// `pagehide`: a persisted page is only cached, anything else closes it.
    pub fn on_pagehide(self, persisted: bool) -> Self {
        match self {
            PageState::Closed => PageState::Closed,
            _ if persisted => PageState::Cached,
            _ => PageState::Closed,
        }
    }

    /// `pageshow`: a cached page comes back live.
    pub fn on_pageshow(self) -> Self {
        match self {
            PageState::Cached => PageState::Live,
            other => other,
        }
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        self == PageState::Closed
    }
}
