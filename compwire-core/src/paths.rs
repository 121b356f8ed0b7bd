//! Lexical path helpers for module specifiers.
//!
//! Generated modules always use forward slashes regardless of host platform,
//! so these helpers operate on strings rather than [`std::path::Path`].
//! Nothing here touches the filesystem.

/// Check whether a specifier is an absolute filesystem path (POSIX or Windows).
pub fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    if path.starts_with('/') || path.starts_with('\\') {
        return true;
    }
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Split a normalized path into its root (`/`, `C:/` or empty) and segments.
fn split_root(path: &str) -> (String, Vec<&str>) {
    let (root, rest) = if let Some(rest) = path.strip_prefix('/') {
        ("/".to_string(), rest)
    } else if is_absolute(path) {
        (format!("{}/", path[..2].to_ascii_uppercase()), &path[3..])
    } else {
        (String::new(), path)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if root.is_empty() {
                    segments.push("..");
                }
            }
            s => segments.push(s),
        }
    }
    (root, segments)
}

/// Normalize separators to `/` and collapse `.` and `..` segments.
pub fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    let (root, segments) = split_root(&path);
    let joined = segments.join("/");
    if root.is_empty() && joined.is_empty() {
        ".".to_string()
    } else {
        format!("{}{}", root, joined)
    }
}

/// Compute the path of `to` relative to the directory `from`.
///
/// Both paths should be absolute. When they live on different roots
/// (e.g. two Windows drives) the normalized `to` is returned unchanged.
pub fn relative(from: &str, to: &str) -> String {
    let from = from.replace('\\', "/");
    let to = to.replace('\\', "/");
    let (from_root, from_segments) = split_root(&from);
    let (to_root, to_segments) = split_root(&to);

    if from_root != to_root {
        return normalize(&to);
    }

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_segments.len() - common];
    parts.extend(&to_segments[common..]);
    parts.join("/")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Strip a trailing script extension, keeping `.vue` (and `.vue*`) intact.
///
/// Only strips when the dot follows a word character and the extension
/// is made of word characters, so `./Foo` and `..` are left alone.
pub fn strip_script_extension(path: &str) -> &str {
    let Some(dot) = path.rfind('.') else {
        return path;
    };
    let ext = &path[dot + 1..];
    let preceded_by_word = path[..dot].chars().next_back().is_some_and(is_word_char);

    if preceded_by_word
        && !ext.is_empty()
        && ext.chars().all(is_word_char)
        && !ext.starts_with("vue")
    {
        &path[..dot]
    } else {
        path
    }
}

/// Compute the specifier a type declaration in `build_dir` uses to import `file_path`.
///
/// Absolute paths are rewritten relative to `build_dir` (prefixed with `./`
/// when they stay inside it); relative specifiers and aliases are kept as
/// given. Script extensions are stripped in both cases.
///
/// `build_dir` must be absolute. When it is not, or when it sits on another
/// Windows drive, no relative form exists and the normalized absolute path
/// is used.
pub fn import_path(file_path: &str, build_dir: &str) -> String {
    if !is_absolute(file_path) {
        return strip_script_extension(file_path).to_string();
    }

    let rel = if is_absolute(build_dir) {
        relative(build_dir, file_path)
    } else {
        normalize(file_path)
    };
    let rel = if rel.starts_with('.') || is_absolute(&rel) {
        rel
    } else {
        format!("./{}", rel)
    };
    strip_script_extension(&rel).to_string()
}
