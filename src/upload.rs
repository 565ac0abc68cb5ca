//! Asset upload naming.
//!
//! Every uploaded image is stored under a slug derived from its logical
//! name, always with a `.png` extension. Bytes are written verbatim; the
//! extension is a naming convention, not a format conversion. Re-uploading
//! the same logical name overwrites the previous asset.

use crate::models::slugify;

/// Logical names for the two About-page image slots map to fixed slugs, so
/// the editor can use its own field names without leaking them into asset
/// paths.
const CANONICAL_NAMES: &[(&str, &str)] = &[
    ("about-left", "left-image"),
    ("about-right", "right-image"),
];

pub fn asset_filename(logical_name: &str) -> String {
    let name = CANONICAL_NAMES
        .iter()
        .find(|(from, _)| *from == logical_name)
        .map(|(_, to)| *to)
        .unwrap_or(logical_name);

    format!("{}.png", slugify(name))
}

/// Public URL path for an uploaded asset, as returned to the client.
pub fn asset_path(logical_name: &str) -> String {
    format!("/thumbnails/{}", asset_filename(logical_name))
}

/// Thumbnail path derived from a project name. Project names are never
/// remapped; only upload slot names are.
pub fn thumbnail_path(name: &str) -> String {
    format!("/thumbnails/{}.png", slugify(name))
}
