//! Navigation and sidebar data model for docnav.
//!
//! Defines the object graph consumed by the static-site generator: a top
//! navigation bar ([`NavEntry`] list) and a per-section sidebar
//! ([`Sidebar`], route prefix → [`MenuGroup`] list). Everything here is
//! plain data, constructed once at site-build time and never mutated.
//!
//! # Example
//!
//! ```
//! use docnav_menu::{MenuGroup, NavEntry, Sidebar, SiteNav, link};
//!
//! let mut sidebar = Sidebar::new();
//! sidebar.insert(
//!     "/how_to",
//!     vec![MenuGroup::new(
//!         "Web Server",
//!         false,
//!         vec![link("Nginx", "/how_to/install-nginx").into()],
//!     )],
//! );
//!
//! let site_nav = SiteNav {
//!     nav: vec![NavEntry::link("Home", "/")],
//!     sidebar,
//! };
//! assert_eq!(site_nav.sidebar.for_section("/how_to").len(), 1);
//! ```

mod nav;
mod sidebar;

use serde::Serialize;

pub use nav::{MenuItem, NavEntry, link};
pub use sidebar::{MenuGroup, Sidebar, SidebarEntry};

/// Complete navigation configuration for a documentation site.
///
/// The single immutable value handed to the rendering layer; replaces any
/// ambient global configuration object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteNav {
    /// Top navigation bar entries, in display order.
    pub nav: Vec<NavEntry>,
    /// Sidebar groups keyed by route prefix.
    pub sidebar: Sidebar,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_site_nav_serialization_shape() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/how_to",
            vec![MenuGroup::new(
                "Web Server",
                false,
                vec![link("Nginx", "/how_to/install-nginx").into()],
            )],
        );
        let site_nav = SiteNav {
            nav: vec![NavEntry::link("Home", "/")],
            sidebar,
        };

        let json = serde_json::to_value(&site_nav).unwrap();

        assert_eq!(json["nav"][0]["text"], "Home");
        assert_eq!(json["nav"][0]["link"], "/");
        assert_eq!(json["sidebar"]["/how_to"][0]["text"], "Web Server");
        assert_eq!(json["sidebar"]["/how_to"][0]["collapsed"], false);
        assert_eq!(
            json["sidebar"]["/how_to"][0]["items"][0]["link"],
            "/how_to/install-nginx"
        );
    }

    #[test]
    fn test_default_site_nav_is_empty() {
        let site_nav = SiteNav::default();

        assert!(site_nav.nav.is_empty());
        assert!(site_nav.sidebar.is_empty());
    }
}
