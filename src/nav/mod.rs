//! Navigation controller for the site shell.
//!
//! Reflects UI state purely from the page structure and the current
//! URL; no server calls, no persisted state. Submodules:
//!
//! - `page`: the typed page model (elements, class lists, nav items)
//! - `events`: typed UI event payloads
//! - `controller`: sidebar state and active-item marking
//! - `chrome`: the decorative window controls

pub mod chrome;
pub mod controller;
pub mod events;
pub mod page;

pub use chrome::{ChromeControl, Decorative};
pub use controller::handle_event;
pub use events::UiEvent;
pub use page::{Anchor, ClassList, Element, FileItem, MenuItem, Page};

/// Visibility and selection class the controller flips on elements.
pub const ACTIVE_CLASS: &str = "active";

/// Viewport widths strictly above this value never show the mobile
/// overlay.
pub const DESKTOP_BREAKPOINT: u32 = 768;

/// Document name assumed when the URL path ends without one.
pub const HOME_DOCUMENT: &str = "index.html";
