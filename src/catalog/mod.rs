//! Static icon catalog
//!
//! Icons are grouped into categories and compiled into the binary. Lookups go
//! through a name index that is built on first use and never mutated.
//!
//! # Example
//!
//! ```rust
//! use button_icons::catalog;
//!
//! let icon = catalog::lookup("arrow-right").unwrap();
//! assert_eq!(icon.label, "Arrow Right");
//! assert!(icon.markup.starts_with("<svg"));
//! ```

mod social;
mod wordpress;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::IconError;

/// A named icon available to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconCatalogEntry {
    /// Unique key stored in the `iconName` attribute
    pub name: &'static str,
    /// Display text
    pub label: &'static str,
    /// SVG markup
    pub markup: &'static str,
}

/// A group of icons shown together in the picker
#[derive(Debug, Clone, Copy)]
pub struct IconCategory {
    pub name: &'static str,
    pub label: &'static str,
    pub icons: &'static [IconCatalogEntry],
}

const CATEGORIES: &[IconCategory] = &[
    IconCategory {
        name: "wordpress",
        label: "WordPress",
        icons: wordpress::ICONS,
    },
    IconCategory {
        name: "social",
        label: "Social",
        icons: social::ICONS,
    },
];

/// All icon categories in presentation order
pub fn categories() -> &'static [IconCategory] {
    CATEGORIES
}

/// Every icon across all categories, in category order
pub fn flatten() -> impl Iterator<Item = &'static IconCatalogEntry> {
    CATEGORIES.iter().flat_map(|category| category.icons.iter())
}

fn index() -> &'static HashMap<&'static str, &'static IconCatalogEntry> {
    static INDEX: OnceLock<HashMap<&'static str, &'static IconCatalogEntry>> = OnceLock::new();
    // First category wins on a duplicate name, matching flatten order.
    INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for entry in flatten() {
            map.entry(entry.name).or_insert(entry);
        }
        map
    })
}

/// Look up an icon by name
pub fn lookup(name: &str) -> Option<&'static IconCatalogEntry> {
    index().get(name).copied()
}

/// Look up an icon by name, failing with [`IconError::Unresolved`] on a miss
pub fn resolve(name: &str) -> Result<&'static IconCatalogEntry, IconError> {
    lookup(name).ok_or_else(|| IconError::unresolved(name))
}
