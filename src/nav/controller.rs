//! Event handling for the navigation shell.
//!
//! State lives entirely in the page's class lists and is recomputed
//! from events; nothing here persists or talks to a server.

use tracing::debug;

use crate::nav::chrome;
use crate::nav::events::UiEvent;
use crate::nav::page::Page;
use crate::nav::{ACTIVE_CLASS, DESKTOP_BREAKPOINT, HOME_DOCUMENT};

/// Apply one event to the page.
///
/// Missing elements are tolerated everywhere: the affected part of the
/// event is dropped without effect, never an error.
pub fn handle_event(page: &mut Page, event: UiEvent) {
    match event {
        UiEvent::Loaded { path } => mark_active(page, &path),
        UiEvent::ToggleClicked => toggle_sidebar(page),
        UiEvent::OverlayClicked => {
            if page.overlay.is_none() {
                debug!("overlay event with no overlay element, ignoring");
                return;
            }
            close_sidebar(page);
        }
        UiEvent::ChromeClicked(control) => chrome::acknowledge(page, control),
        UiEvent::Resized { width } => {
            // Desktop layout never shows the mobile overlay.
            if width > DESKTOP_BREAKPOINT {
                close_sidebar(page);
            }
        }
    }
}

/// Flip the visibility class on sidebar and overlay together.
fn toggle_sidebar(page: &mut Page) {
    if page.menu_toggle.is_none() {
        debug!("toggle event with no toggle control, ignoring");
        return;
    }
    if let Some(sidebar) = page.sidebar.as_mut() {
        sidebar.classes.toggle(ACTIVE_CLASS);
    }
    if let Some(overlay) = page.overlay.as_mut() {
        overlay.classes.toggle(ACTIVE_CLASS);
    }
}

/// Force the closed state on both sidebar and overlay.
fn close_sidebar(page: &mut Page) {
    if let Some(sidebar) = page.sidebar.as_mut() {
        sidebar.classes.remove(ACTIVE_CLASS);
    }
    if let Some(overlay) = page.overlay.as_mut() {
        overlay.classes.remove(ACTIVE_CLASS);
    }
}

/// Resolve the current document name from a URL path: the last
/// `/`-separated segment, or the home document when that segment is
/// empty.
fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => HOME_DOCUMENT,
    }
}

/// Mark the first item in each collection whose link target equals the
/// current document. Exact string equality only: no partial match, no
/// query strings, no normalization.
fn mark_active(page: &mut Page, path: &str) {
    let current = current_page(path);

    if let Some(item) = page.menu_items.iter_mut().find(|item| item.href == current) {
        item.element.classes.add(ACTIVE_CLASS);
    }

    if let Some(item) = page
        .file_items
        .iter_mut()
        .find(|item| item.anchor.as_ref().is_some_and(|a| a.href == current))
    {
        item.element.classes.add(ACTIVE_CLASS);
    }
}

// ============================================================================
// Tests
// ============================================================================
