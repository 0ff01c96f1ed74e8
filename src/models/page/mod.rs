use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::countdown::CountdownPanel;

/// Ordered set of class names carried by a page element.
///
/// A `BTreeSet` keeps iteration deterministic so serialized pages and test
/// assertions are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes(classes: &[&str]) -> Self {
        Self(classes.iter().map(|c| (*c).to_string()).collect())
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Adds `class`, returning true if it was newly inserted.
    pub fn add(&mut self, class: &str) -> bool {
        self.0.insert(class.to_string())
    }

    /// Removes `class`, returning true if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        self.0.remove(class)
    }

    /// Flips `class` and returns whether it is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }

    /// Adds or removes `class` to match `present`.
    pub fn set(&mut self, class: &str, present: bool) {
        if present {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One element of the abstract page: classes, string attributes and an
/// optional text slot. No hierarchy is modeled; the parts of the page the
/// engine touches are held by name on [`PageModel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub classes: ClassList,
    attributes: BTreeMap<String, String>,
    text: Option<String>,
}

impl PageElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: ClassList::from_classes(classes),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}

/// A navigation item owning a collapsible submenu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavDropdown {
    pub item: PageElement,
    pub submenu: PageElement,
}

/// The parts of a landing page the enhancement engine operates on.
///
/// Optional parts mirror markup that may simply not be present; every service
/// treats a missing part as a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageModel {
    pub body: PageElement,
    pub header: Option<PageElement>,
    pub nav_toggle: Option<PageElement>,
    pub dropdowns: Vec<NavDropdown>,
    pub preloader: Option<PageElement>,
    pub scroll_top: Option<PageElement>,
    pub countdowns: Vec<CountdownPanel>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }
}
