//! Decorative window controls.
//!
//! The minimize, maximize and close buttons are cosmetic. Activating
//! one logs an acknowledgment and manages no window. The [`Decorative`]
//! marker makes that contract explicit so a caller never mistakes these
//! for real window-management hooks.

use tracing::info;

use crate::nav::page::Page;

/// Marker for UI affordances with no functional effect.
pub trait Decorative {}

/// The three window-chrome buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeControl {
    Minimize,
    Maximize,
    Close,
}

impl Decorative for ChromeControl {}

impl ChromeControl {
    /// Label used in the acknowledgment log.
    pub fn label(&self) -> &'static str {
        match self {
            ChromeControl::Minimize => "minimize",
            ChromeControl::Maximize => "maximize",
            ChromeControl::Close => "close",
        }
    }
}

/// Log the click if the matching button exists on the page; change
/// nothing either way.
pub(crate) fn acknowledge(page: &Page, control: ChromeControl) {
    let present = match control {
        ChromeControl::Minimize => page.minimize.is_some(),
        ChromeControl::Maximize => page.maximize.is_some(),
        ChromeControl::Close => page.close.is_some(),
    };
    if present {
        info!(control = control.label(), "window control clicked");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::page::Element;

    #[test]
    fn test_acknowledge_changes_nothing() {
        let mut page = Page::default();
        page.minimize = Some(Element::new());
        page.maximize = Some(Element::new());
        let before = page.clone();

        acknowledge(&page, ChromeControl::Minimize);
        acknowledge(&page, ChromeControl::Maximize);
        // Close button absent: tolerated, still a no-op.
        acknowledge(&page, ChromeControl::Close);

        assert_eq!(page, before);
    }
}
