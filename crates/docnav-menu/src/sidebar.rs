//! Sidebar groups scoped to route prefixes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::nav::MenuItem;

/// Entry inside a sidebar group: a link or a nested group.
///
/// Serializes untagged: an item is `{text, link}`, a group is
/// `{text, collapsed, items}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Nested collapsible group.
    Group(MenuGroup),
    /// Leaf link.
    Item(MenuItem),
}

impl From<MenuItem> for SidebarEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<MenuGroup> for SidebarEntry {
    fn from(group: MenuGroup) -> Self {
        Self::Group(group)
    }
}

/// Labeled, collapsible cluster of sidebar links.
///
/// Order of `items` is display order; labels are not required to be
/// unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    /// Display label.
    pub text: String,
    /// Initial UI expansion state.
    pub collapsed: bool,
    /// Entries in display order; may nest further groups.
    pub items: Vec<SidebarEntry>,
}

impl MenuGroup {
    /// Create a group from a label, initial collapse state, and entries.
    #[must_use]
    pub fn new(text: impl Into<String>, collapsed: bool, items: Vec<SidebarEntry>) -> Self {
        Self {
            text: text.into(),
            collapsed,
            items,
        }
    }
}

/// Sidebar groups keyed by route prefix.
///
/// A page shows the group list of the section its path falls under.
/// Lookups on unregistered prefixes degrade to an empty list rather than
/// failing, so a missing sidebar never breaks a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    groups: BTreeMap<String, Vec<MenuGroup>>,
}

impl Sidebar {
    /// Create an empty sidebar map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the group list shown under a route prefix.
    ///
    /// Replaces any list previously registered for the same prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<MenuGroup>) {
        self.groups.insert(prefix.into(), groups);
    }

    /// Group list registered for a route prefix, verbatim.
    ///
    /// Returns an empty slice for an unregistered prefix.
    #[must_use]
    pub fn for_section(&self, prefix: &str) -> &[MenuGroup] {
        self.groups.get(prefix).map_or(&[], Vec::as_slice)
    }

    /// Group list for the section a page path falls under.
    ///
    /// Walks up the path one segment at a time and returns the first
    /// (longest) registered prefix. Empty when no prefix matches.
    #[must_use]
    pub fn for_page(&self, page_path: &str) -> &[MenuGroup] {
        let mut current = page_path;
        loop {
            if let Some(groups) = self.groups.get(current) {
                return groups;
            }
            match current.rsplit_once('/') {
                Some(("", _)) if current != "/" => current = "/",
                Some((parent, _)) => current = parent,
                None => return &[],
            }
        }
    }

    /// Registered route prefixes in sorted order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of registered route prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if no prefixes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
