//! Typed UI event payloads.

use crate::nav::chrome::ChromeControl;

/// Events the navigation controller consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Initial load; `path` is the current URL path.
    Loaded { path: String },
    /// The sidebar toggle control was activated.
    ToggleClicked,
    /// The overlay behind the open sidebar was activated.
    OverlayClicked,
    /// One of the decorative window controls was activated.
    ChromeClicked(ChromeControl),
    /// The viewport was resized to `width`.
    Resized { width: u32 },
}
