//! Default category hierarchy.

use crate::collections::CategoryTree;
use crate::error::CategoryError;

/// `(name, parent)` pairs, parents listed before their children
pub const DEFAULT_CATEGORIES: &[(&str, Option<&str>)] = &[
    ("Comics", None),
    ("DC Comics", Some("Comics")),
    ("Marvel", Some("Comics")),
    ("Manga", Some("Comics")),
    ("Independientes", Some("Comics")),
    ("Batman", Some("DC Comics")),
    ("Superman", Some("DC Comics")),
    ("Wonder Woman", Some("DC Comics")),
    ("Flash", Some("DC Comics")),
    ("Justice League", Some("DC Comics")),
    ("Spider-Man", Some("Marvel")),
    ("X-Men", Some("Marvel")),
    ("Avengers", Some("Marvel")),
    ("Iron Man", Some("Marvel")),
    ("Captain America", Some("Marvel")),
    ("Deadpool", Some("Marvel")),
    ("Shonen", Some("Manga")),
    ("Seinen", Some("Manga")),
];

/// Add the default hierarchy to a tree
pub fn seed(tree: &mut CategoryTree) -> Result<(), CategoryError> {
    for &(name, parent) in DEFAULT_CATEGORIES {
        tree.add(name, parent)?;
    }
    Ok(())
}
