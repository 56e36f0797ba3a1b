//! Href utilities: variable names from asset locations and read-time href
//! rewriting.

/// Rewrites an href before it is read (e.g. to append a SAS token or sign a
/// URL). The rewritten href is only used for access; records keep the
/// href they were given.
pub type ReadHrefModifier = dyn Fn(&str) -> String + Send + Sync;

/// Extensions stripped from asset basenames to obtain the variable name.
const KNOWN_EXTENSIONS: &[&str] = &[".nc4", ".tif"];

/// Derive the variable name from an asset href.
///
/// Works for local paths and URLs: the last path segment has the known
/// raster/source extensions removed. Query strings and fragments are only
/// stripped from remote hrefs; `?` and `#` are ordinary characters in local
/// paths.
pub fn asset_name_from_href(href: &str) -> String {
    let path = if is_remote(href) {
        href.split(['?', '#']).next().unwrap_or(href)
    } else {
        href
    };
    let basename = path.rsplit(['/', '\\']).next().unwrap_or(path);

    KNOWN_EXTENSIONS
        .iter()
        .fold(basename.to_string(), |name, ext| name.replace(ext, ""))
}

/// Whether an href points at a remote location rather than a local path.
pub fn is_remote(href: &str) -> bool {
    match href.split_once("://") {
        Some((scheme, _)) => scheme != "file",
        None => false,
    }
}

/// Apply an optional modifier, defaulting to identity.
pub fn resolve_read_href(href: &str, modifier: Option<&ReadHrefModifier>) -> String {
    match modifier {
        Some(modify) => modify(href),
        None => href.to_string(),
    }
}
