//! Top navigation bar entries.

use serde::Serialize;

/// A single navigation link: display label plus URL path.
///
/// Leaf node of both the nav bar and the sidebar. No validation is
/// performed on the path; a broken link is a content-authoring error,
/// not a runtime fault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display label.
    pub text: String,
    /// Link target path.
    pub link: String,
}

/// Build a [`MenuItem`] from a label and a path.
///
/// Pure constructor: the inputs are stored unchanged and the call always
/// succeeds.
#[must_use]
pub fn link(text: impl Into<String>, url: impl Into<String>) -> MenuItem {
    MenuItem {
        text: text.into(),
        link: url.into(),
    }
}

/// Top navigation bar entry: a direct link or a dropdown group.
///
/// Serializes untagged, so a link is `{text, link}` and a dropdown is
/// `{text, items}` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Direct link.
    Link(MenuItem),
    /// Dropdown with nested entries, in display order.
    Dropdown {
        /// Display label.
        text: String,
        /// Nested entries.
        items: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Create a direct link entry.
    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link(link(text, url))
    }

    /// Create a dropdown entry.
    #[must_use]
    pub fn dropdown(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self::Dropdown {
            text: text.into(),
            items,
        }
    }

    /// Display label of this entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(item) => &item.text,
            Self::Dropdown { text, .. } => text,
        }
    }
}

impl From<MenuItem> for NavEntry {
    fn from(item: MenuItem) -> Self {
        Self::Link(item)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_link_is_identity_on_inputs() {
        let item = link("Nginx", "/how_to/deploy_web_server/install-nginx");

        assert_eq!(item.text, "Nginx");
        assert_eq!(item.link, "/how_to/deploy_web_server/install-nginx");
    }

    #[test]
    fn test_link_no_transformation_of_unusual_inputs() {
        // No normalization, escaping, or validation at this layer
        let item = link("Ünïcode & <tags>", "relative/no-slash?q=1");

        assert_eq!(item.text, "Ünïcode & <tags>");
        assert_eq!(item.link, "relative/no-slash?q=1");
    }

    #[test]
    fn test_menu_item_serialization() {
        let item = link("Home", "/");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["text"], "Home");
        assert_eq!(json["link"], "/");
    }

    #[test]
    fn test_nav_entry_link_serializes_flat() {
        let entry = NavEntry::link("Home", "/");

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["text"], "Home");
        assert_eq!(json["link"], "/");
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_nav_entry_dropdown_serializes_items() {
        let entry = NavEntry::dropdown(
            "How-to",
            vec![
                NavEntry::link("Deploy Web Server", "/how_to/deploy_web_server"),
                NavEntry::link("Repository", "/how_to/repository"),
            ],
        );

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["text"], "How-to");
        assert!(json.get("link").is_none());
        assert_eq!(json["items"][0]["text"], "Deploy Web Server");
        assert_eq!(json["items"][1]["link"], "/how_to/repository");
    }

    #[test]
    fn test_nav_ordering_preserved() {
        let nav = vec![
            NavEntry::link("Home", "/"),
            NavEntry::dropdown("How-to", Vec::new()),
            NavEntry::link("IaC", "/iac"),
            NavEntry::link("Containers", "/containerization"),
            NavEntry::link("SysAdmin", "/sysadmin"),
        ];

        let texts: Vec<_> = nav.iter().map(NavEntry::text).collect();

        assert_eq!(texts, vec!["Home", "How-to", "IaC", "Containers", "SysAdmin"]);
    }

    #[test]
    fn test_nested_dropdowns() {
        let entry = NavEntry::dropdown(
            "Shell Scripting",
            vec![NavEntry::dropdown(
                "Advanced",
                vec![NavEntry::link("Debugging", "/shell_script/debugging")],
            )],
        );

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["items"][0]["items"][0]["text"], "Debugging");
    }
}
