/// Pure path composition for remote WebDAV paths.
///
/// These helpers do no slash normalization beyond the join point: an
/// identifier with a leading `/` yields doubled slashes in the composed
/// path and empty leading collection segments, which the remote side
/// treats as benign.

/// Join `base` and `segment` with a single `/`.
///
/// An empty `segment` returns `base` unchanged. Existing leading or
/// trailing slashes are preserved as-is.
pub fn compose(base: &str, segment: &str) -> String {
    if segment.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, segment)
    }
}

/// Cumulative collection chain for a directory path, parents first.
///
/// `a/b/c` expands to `/a`, `/a/b`, `/a/b/c`; the remote server requires
/// each parent to exist before its child is created. An empty path yields
/// an empty chain.
pub fn collection_chain(dir_path: &str) -> Vec<String> {
    if dir_path.is_empty() {
        return Vec::new();
    }

    let mut chain = Vec::new();
    let mut current = String::new();
    for segment in dir_path.split('/') {
        current = format!("{}/{}", current, segment);
        chain.push(current.clone());
    }
    chain
}

/// Cumulative ancestor collection paths for an object identifier.
///
/// Everything before the final `/` is the directory portion; an identifier
/// without `/` has no ancestors.
pub fn ancestor_paths(identifier: &str) -> Vec<String> {
    match identifier.rfind('/') {
        Some(last_slash) => collection_chain(&identifier[..last_slash]),
        None => Vec::new(),
    }
}
