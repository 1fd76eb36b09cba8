//! Embedded page surface — the downstream collaborator that renders a
//! web page and scrolls under gaze control.
//!
//! The real renderer is opaque to this crate; `PageSurface` carries
//! the pieces the pipeline touches: a load target and the scrollable
//! region behind [`ScrollSurface`].

use tracing::{debug, info};
use url::Url;

use crate::scroll::{self, ScrollRegion, ScrollSurface};

/// An embeddable page surface with a vertically scrollable content area.
#[derive(Debug)]
pub struct PageSurface {
    pub scroll: ScrollRegion,
    pub url: Option<Url>,
}

impl PageSurface {
    pub fn new(scroll: ScrollRegion) -> Self {
        Self { scroll, url: None }
    }

    /// Set the page load target. A malformed URL aborts the load
    /// silently; no error is surfaced.
    pub fn load_page(&mut self, url_str: &str) {
        match Url::parse(url_str) {
            Ok(url) => {
                info!(%url, "loading page");
                self.url = Some(url);
            }
            Err(err) => {
                debug!(url_str, %err, "ignoring malformed page url");
            }
        }
    }

    /// Auto-scroll for a gaze indicator at the given vertical position,
    /// measured against this surface's viewport bounds.
    pub fn scroll_by_looking_at(&mut self, position_y: f32) {
        scroll::nudge(&mut self.scroll, position_y);
    }

    /// Current vertical content offset.
    pub fn offset_y(&self) -> f32 {
        self.scroll.offset_y()
    }
}
