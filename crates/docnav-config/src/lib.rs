//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! A configuration declares three things:
//!
//! - `[[sections]]` — the path registry, in topological order (a section
//!   with a `parent` must come after that parent);
//! - `[[nav]]` — the top navigation bar, where entries link to a literal
//!   path or reference a section key;
//! - `[[sidebar]]` — per-section sidebar groups, where items link to a
//!   literal path or name a `page` resolved against the section's path.
//!
//! [`Config::build`] turns the declarations into the immutable
//! `(PathRegistry, SiteNav)` pair consumed by the rendering layer.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use docnav_menu::{MenuGroup, MenuItem, NavEntry, Sidebar, SidebarEntry, SiteNav, link};
use docnav_paths::{PathError, PathRegistry};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Path registration error.
    #[error("{0}")]
    Path(#[from] PathError),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Section declarations, in registration order.
    sections: Vec<SectionDecl>,
    /// Top navigation bar declarations, in display order.
    nav: Vec<NavDecl>,
    /// Sidebar declarations, keyed by section.
    sidebar: Vec<SidebarDecl>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Output file for the generated navigation JSON, relative to the
    /// config file directory.
    pub out_file: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            out_file: PathBuf::from("navigation.json"),
        }
    }
}

/// One `[[sections]]` entry: a registry root or a derived key.
#[derive(Debug, Deserialize)]
struct SectionDecl {
    key: String,
    /// Absolute path (root sections only).
    path: Option<String>,
    /// Parent section key (derived sections only).
    parent: Option<String>,
    /// Sub-segment appended to the parent path (derived sections only).
    segment: Option<String>,
}

/// One `[[nav]]` entry: a link, a section reference, or a dropdown.
#[derive(Debug, Deserialize)]
struct NavDecl {
    text: String,
    link: Option<String>,
    section: Option<String>,
    items: Option<Vec<NavDecl>>,
}

/// One `[[sidebar]]` entry: the group list for a section.
#[derive(Debug, Deserialize)]
struct SidebarDecl {
    section: String,
    groups: Vec<GroupDecl>,
}

/// A sidebar group declaration; may nest further groups.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupDecl {
    text: String,
    #[serde(default)]
    collapsed: bool,
    items: Vec<EntryDecl>,
}

/// A sidebar entry declaration: nested group or leaf item.
///
/// Untagged; the required `items` field distinguishes a group.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryDecl {
    Group(GroupDecl),
    Item(ItemDecl),
}

/// A leaf sidebar item: literal `link` or section-relative `page`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemDecl {
    text: String,
    link: Option<String>,
    page: Option<String>,
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docnav.toml` in the current directory and parents,
    /// falling back to an empty default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolved output file path.
    ///
    /// Relative `site.out_file` values are resolved against the config
    /// file's directory, or the current directory for a default config.
    #[must_use]
    pub fn out_file(&self) -> PathBuf {
        if self.site.out_file.is_absolute() {
            return self.site.out_file.clone();
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new("."));
        base.join(&self.site.out_file)
    }

    /// Build the path registry and navigation structures.
    ///
    /// Sections are registered in declaration order, so any forward
    /// reference to a parent fails with [`PathError::UnknownParent`].
    /// Nav and sidebar section references are resolved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Path`] for registry violations and
    /// [`ConfigError::Validation`] for malformed or dangling declarations.
    pub fn build(&self) -> Result<(PathRegistry, SiteNav), ConfigError> {
        let registry = self.build_registry()?;

        let nav = self
            .nav
            .iter()
            .map(|decl| build_nav_entry(decl, &registry))
            .collect::<Result<Vec<_>, _>>()?;

        let mut sidebar = Sidebar::new();
        for decl in &self.sidebar {
            let Some(prefix) = registry.resolve(&decl.section) else {
                return Err(ConfigError::Validation(format!(
                    "sidebar references unknown section '{}'",
                    decl.section
                )));
            };
            let prefix = prefix.to_owned();
            let groups = decl
                .groups
                .iter()
                .map(|group| build_group(group, &decl.section, &registry))
                .collect::<Result<Vec<_>, _>>()?;
            sidebar.insert(prefix, groups);
        }

        Ok((registry, SiteNav { nav, sidebar }))
    }

    /// Register all declared sections, in declaration order.
    fn build_registry(&self) -> Result<PathRegistry, ConfigError> {
        let mut registry = PathRegistry::new();
        for decl in &self.sections {
            match (&decl.path, &decl.parent, &decl.segment) {
                (Some(path), None, None) => registry.register(&decl.key, path)?,
                (None, Some(parent), Some(segment)) => {
                    registry.register_under(&decl.key, parent, segment)?;
                }
                _ => {
                    return Err(ConfigError::Validation(format!(
                        "section '{}' must set either path, or parent and segment",
                        decl.key
                    )));
                }
            }
        }
        Ok(registry)
    }
}

/// Build one nav entry, resolving section references through the registry.
fn build_nav_entry(decl: &NavDecl, registry: &PathRegistry) -> Result<NavEntry, ConfigError> {
    match (&decl.link, &decl.section, &decl.items) {
        (Some(url), None, None) => Ok(NavEntry::link(&decl.text, url)),
        (None, Some(section), None) => {
            let path = resolve_section(section, &decl.text, registry)?;
            Ok(NavEntry::link(&decl.text, path))
        }
        (None, None, Some(items)) => {
            let items = items
                .iter()
                .map(|item| build_nav_entry(item, registry))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(NavEntry::dropdown(&decl.text, items))
        }
        _ => Err(ConfigError::Validation(format!(
            "nav entry '{}' must set exactly one of link, section, items",
            decl.text
        ))),
    }
}

/// Build one sidebar group, resolving `page` items against the section.
fn build_group(
    decl: &GroupDecl,
    section: &str,
    registry: &PathRegistry,
) -> Result<MenuGroup, ConfigError> {
    let items = decl
        .items
        .iter()
        .map(|entry| match entry {
            EntryDecl::Group(group) => {
                build_group(group, section, registry).map(SidebarEntry::from)
            }
            EntryDecl::Item(item) => build_item(item, section, registry).map(SidebarEntry::from),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MenuGroup::new(&decl.text, decl.collapsed, items))
}

/// Build one sidebar item.
fn build_item(
    decl: &ItemDecl,
    section: &str,
    registry: &PathRegistry,
) -> Result<MenuItem, ConfigError> {
    match (&decl.link, &decl.page) {
        (Some(url), None) => Ok(link(&decl.text, url)),
        (None, Some(page)) => {
            let path = registry.join(section, &[page]).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "sidebar item '{}' references unknown section '{section}'",
                    decl.text
                ))
            })?;
            Ok(link(&decl.text, path))
        }
        _ => Err(ConfigError::Validation(format!(
            "sidebar item '{}' must set exactly one of link, page",
            decl.text
        ))),
    }
}

/// Resolve a section key for a nav entry.
fn resolve_section(
    section: &str,
    entry_text: &str,
    registry: &PathRegistry,
) -> Result<String, ConfigError> {
    registry.resolve(section).map(str::to_owned).ok_or_else(|| {
        ConfigError::Validation(format!(
            "nav entry '{entry_text}' references unknown section '{section}'"
        ))
    })
}
