//! Brand icons

use super::IconCatalogEntry;

pub(super) const ICONS: &[IconCatalogEntry] = &[IconCatalogEntry {
    name: "flickr",
    label: "Flickr",
    markup: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6.5,7c-2.75,0-5,2.25-5,5s2.25,5,5,5s5-2.25,5-5S9.25,7,6.5,7z M17.5,7c-2.75,0-5,2.25-5,5s2.25,5,5,5s5-2.25,5-5 S20.25,7,17.5,7z"></path></svg>"#,
}];
