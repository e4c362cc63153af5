/// Suffix Unity appends to an asset path to name its metadata sidecar.
pub const META_SUFFIX: &str = ".meta";

/// Splits a depot path into its directory (including the trailing `/`) and leaf name.
///
/// A path without any `/` has an empty directory part.
#[must_use]
pub fn split_depot_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}

/// Returns the text after the last `.` of the leaf name, if the leaf has one.
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let (_, leaf) = split_depot_path(path);
    leaf.rfind('.').map(|idx| &leaf[idx + 1..])
}

#[must_use]
pub fn is_meta(path: &str) -> bool {
    extension(path) == Some(&META_SUFFIX[1..])
}

/// Removes the metadata suffix, returning the path of the asset it describes.
#[must_use]
pub fn strip_meta(path: &str) -> Option<&str> {
    if is_meta(path) {
        path.strip_suffix(META_SUFFIX)
    } else {
        None
    }
}
