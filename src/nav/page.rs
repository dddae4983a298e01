//! Typed model of the page the controller drives.
//!
//! This is the element contract the site's markup provides, made
//! explicit. Every singleton element is optional; a page missing any of
//! them is valid and the corresponding events simply do nothing.

use std::collections::BTreeSet;

/// Class attribute of one element: a set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Add the class if absent, remove it if present.
    /// Returns whether the class is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }
}

/// One element the controller may touch. Only the class attribute is
/// modeled; nothing else about an element matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub classes: ClassList,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A top-level menu link; the href lives on the item itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub href: String,
    pub element: Element,
}

impl MenuItem {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            element: Element::new(),
        }
    }
}

/// An anchor nested inside a file item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
}

/// A sidebar file entry. Its link sits one level below the item and may
/// be absent; an unlinked item is never marked active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub anchor: Option<Anchor>,
    pub element: Element,
}

impl FileItem {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            anchor: Some(Anchor { href: href.into() }),
            element: Element::new(),
        }
    }

    pub fn unlinked() -> Self {
        Self {
            anchor: None,
            element: Element::new(),
        }
    }
}

/// The element contract of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub menu_toggle: Option<Element>,
    pub sidebar: Option<Element>,
    pub overlay: Option<Element>,
    pub minimize: Option<Element>,
    pub maximize: Option<Element>,
    pub close: Option<Element>,
    pub menu_items: Vec<MenuItem>,
    pub file_items: Vec<FileItem>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_toggle() {
        let mut classes = ClassList::new();

        assert!(classes.toggle("active"));
        assert!(classes.contains("active"));
        assert!(!classes.toggle("active"));
        assert!(!classes.contains("active"));
    }

    #[test]
    fn test_class_list_add_is_idempotent() {
        let mut classes = ClassList::new();

        classes.add("active");
        classes.add("active");
        assert!(classes.contains("active"));

        classes.remove("active");
        assert!(!classes.contains("active"));
    }
}
