//! URL helpers for stem and directory derivation

use url::Url;

/// Last path segment, or `None` when the URL denotes a directory.
pub fn file_name(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

/// Filename truncated at the first dot.
///
/// Requesting the leftmost stem surfaces every sibling: for "backup.asp.old"
/// next to "backup.asp", a request for "backup" lists both.
pub fn stem(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

/// Sibling URL built by joining the request's stem into its own directory.
///
/// `http://x/dir/backup.php` becomes `http://x/dir/backup`; directory URLs
/// have no filename and yield `None`.
pub fn stem_sibling(url: &Url) -> Option<Url> {
    let name = file_name(url)?;
    url.join(stem(&name)).ok()
}

/// Ancestor directory URLs, innermost first, ending at the host root.
///
/// `http://x/a/b/c.php` yields `http://x/a/b/`, `http://x/a/`, `http://x/`.
pub fn directories(url: &Url) -> Vec<Url> {
    let mut result = Vec::new();

    let segments: Vec<&str> = match url.path_segments() {
        Some(segments) => segments.filter(|s| !s.is_empty()).collect(),
        None => return result,
    };

    // The last segment is a file unless the path ends with '/'.
    let dir_count = if url.path().ends_with('/') {
        segments.len()
    } else {
        segments.len().saturating_sub(1)
    };

    for depth in (0..=dir_count).rev() {
        let mut path = String::from("/");
        for segment in &segments[..depth] {
            path.push_str(segment);
            path.push('/');
        }
        let mut dir = url.clone();
        dir.set_path(&path);
        dir.set_query(None);
        dir.set_fragment(None);
        result.push(dir);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_of_resource() {
        let url = Url::parse("http://x/dir/backup.php").unwrap();
        assert_eq!(file_name(&url).as_deref(), Some("backup.php"));
    }

    #[test]
    fn test_file_name_of_directory_is_none() {
        let url = Url::parse("http://x/dir/").unwrap();
        assert_eq!(file_name(&url), None);

        let root = Url::parse("http://x/").unwrap();
        assert_eq!(file_name(&root), None);
    }

    #[test]
    fn test_stem_truncates_at_first_dot() {
        assert_eq!(stem("backup.php"), "backup");
        assert_eq!(stem("backup.asp.old"), "backup");
        assert_eq!(stem("plain"), "plain");
    }

    #[test]
    fn test_stem_sibling_stays_in_directory() {
        let url = Url::parse("http://x/dir/backup.php").unwrap();
        assert_eq!(
            stem_sibling(&url).unwrap().as_str(),
            "http://x/dir/backup"
        );
    }

    #[test]
    fn test_stem_sibling_of_directory_is_none() {
        let url = Url::parse("http://x/dir/").unwrap();
        assert!(stem_sibling(&url).is_none());
    }

    #[test]
    fn test_directories_innermost_first() {
        let url = Url::parse("http://x/a/b/c.php?id=1").unwrap();
        let dirs: Vec<String> = directories(&url).iter().map(|u| u.to_string()).collect();
        assert_eq!(
            dirs,
            vec!["http://x/a/b/", "http://x/a/", "http://x/"]
        );
    }

    #[test]
    fn test_directories_of_directory_url_includes_itself() {
        let url = Url::parse("http://x/a/b/").unwrap();
        let dirs: Vec<String> = directories(&url).iter().map(|u| u.to_string()).collect();
        assert_eq!(
            dirs,
            vec!["http://x/a/b/", "http://x/a/", "http://x/"]
        );
    }

    #[test]
    fn test_directories_of_root_file() {
        let url = Url::parse("http://x/index.html").unwrap();
        let dirs: Vec<String> = directories(&url).iter().map(|u| u.to_string()).collect();
        assert_eq!(dirs, vec!["http://x/"]);
    }
}
