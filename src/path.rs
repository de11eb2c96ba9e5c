use std::borrow::Cow;

/// Returns a canonical form of `path` for matching.
///
/// The following rules are applied:
///  1. Anything from the first `?` or `#` on is dropped.
///  2. Multiple slashes are replaced with a single slash.
///  3. Each `.` path element (the current directory) is eliminated.
///  4. Each inner `..` path element is eliminated along with the non-`..`
///     element that precedes it; `..` elements that begin a rooted path are
///     dropped.
///  5. A trailing slash is removed, except on the root path.
///
/// A path that is already canonical is returned as-is, without allocating.
/// If the result of this process is an empty string, `/` is returned.
pub fn normalize(path: &str) -> Cow<'_, str> {
    let path = match path.find(['?', '#']) {
        Some(i) => &path[..i],
        None => path,
    };

    if is_normal(path) {
        return Cow::Borrowed(path);
    }

    let mut kept: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                kept.pop();
            }
            part => kept.push(part),
        }
    }

    if kept.is_empty() {
        return Cow::Owned("/".to_owned());
    }

    let mut out = String::with_capacity(path.len());
    for part in kept {
        out.push('/');
        out.push_str(part);
    }
    Cow::Owned(out)
}

fn is_normal(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    if !path.starts_with('/') || path.ends_with('/') {
        return false;
    }
    !path[1..]
        .split('/')
        .any(|part| part.is_empty() || part == "." || part == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    // path, result
    fn normalize_tests() -> Vec<(&'static str, &'static str)> {
        vec![
            // Already canonical
            ("/", "/"),
            ("/abc", "/abc"),
            ("/a/b/c", "/a/b/c"),
            // Empty and missing root
            ("", "/"),
            ("abc", "/abc"),
            ("abc/def", "/abc/def"),
            // Trailing slash
            ("/abc/", "/abc"),
            ("/a/b/c/", "/a/b/c"),
            // Doubled slashes
            ("//", "/"),
            ("/abc//def", "/abc/def"),
            ("//abc", "/abc"),
            // Dot elements
            ("/abc/./def", "/abc/def"),
            ("/./abc", "/abc"),
            ("/abc/.", "/abc"),
            // Dot-dot elements
            ("/..", "/"),
            ("/../abc", "/abc"),
            ("/abc/def/../ghi", "/abc/ghi"),
            ("/abc/def/..", "/abc"),
            ("/abc/../../def", "/def"),
            // Query and fragment suffixes
            ("/abc?tab=1", "/abc"),
            ("/abc#section", "/abc"),
            ("/abc/def/?tab=1", "/abc/def"),
            ("/?x", "/"),
        ]
    }

    #[test]
    fn canonical_forms() {
        for (path, expected) in normalize_tests() {
            assert_eq!(normalize(path), expected, "normalize({:?})", path);

            // normalization is idempotent
            assert_eq!(normalize(expected), expected);
        }
    }

    #[test]
    fn borrows_when_already_normal() {
        assert!(matches!(normalize("/a/b/c"), Cow::Borrowed(_)));
        assert!(matches!(normalize("/a/b/"), Cow::Owned(_)));
    }
}
