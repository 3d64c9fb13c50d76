//! Resource path helpers
//!
//! Storage object keys use `/` as the separator. Directory keys end in a
//! slash, the root prefix is the empty string. These helpers extract names
//! and parents from keys and normalize directory prefixes; they never touch
//! the filesystem.

/// Last path segment of a resource key
///
/// `"a/b/c.txt"` gives `"c.txt"`, `"a/b/"` gives `"b"`.
pub fn resource_name(resource_path: &str) -> &str {
    let trimmed = resource_path.strip_suffix('/').unwrap_or(resource_path);
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Directory prefix containing the resource, with its trailing slash
///
/// `"a/b/c.txt"` gives `"a/b/"`, `"a/b/"` gives `"a/"` and a resource in
/// the root gives `""`.
pub fn parent_path(resource_path: &str) -> &str {
    let trimmed = resource_path.strip_suffix('/').unwrap_or(resource_path);
    match trimmed.rfind('/') {
        Some(idx) => &resource_path[..idx + 1],
        None => "",
    }
}

/// Append a trailing slash if the path does not already end with one
pub fn normalize_directory_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Normalize a user-supplied prefix into a storage key prefix
///
/// Backslashes become slashes, surrounding whitespace is dropped and a
/// trailing slash is appended. The empty string stays empty (the root).
pub fn normalize(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let normalized = normalized.trim();
    if normalized.is_empty() || normalized.ends_with('/') {
        normalized.to_string()
    } else {
        format!("{normalized}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name("folder1/folder2/file.txt"), "file.txt");
        assert_eq!(resource_name("folder1/folder2/"), "folder2");
        assert_eq!(resource_name("file.txt"), "file.txt");
        assert_eq!(resource_name("docs/"), "docs");
        assert_eq!(resource_name(""), "");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("folder1/folder2/file.txt"), "folder1/folder2/");
        assert_eq!(parent_path("folder1/folder2/"), "folder1/");
        assert_eq!(parent_path("docs/"), "");
        assert_eq!(parent_path("file.txt"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn test_normalize_directory_path() {
        assert_eq!(normalize_directory_path("docs"), "docs/");
        assert_eq!(normalize_directory_path("docs/"), "docs/");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a\\b\\c"), "a/b/c/");
        assert_eq!(normalize("  docs "), "docs/");
        assert_eq!(normalize("docs/"), "docs/");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
